use glam::IVec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::camera::Camera;
use crate::config::Config;
use crate::dungeon::{self, Dungeon};
use crate::input::Direction;
use crate::player::Player;

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Top-level game phase.  The world only advances while `Playing`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    MainMenu,
    Playing,
    Paused,
    Quit,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One running game: dungeon, player, camera and the random source used to
/// (re)generate the dungeon.
///
/// The caller drives it once per frame with [`Session::update`] and reads back
/// [`Session::dungeon`], [`Session::player`] and [`Session::camera`] to render.
pub struct Session {
    config: Config,
    rng: StdRng,
    dungeon: Dungeon,
    player: Player,
    camera: Camera,
    phase: Phase,
}

impl Session {
    /// New session in the main menu, seeded from OS entropy.
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// New session whose dungeons are fully determined by `seed`.
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        let dungeon = Dungeon::new(config.dungeon.width, config.dungeon.height);
        let player = Player::new(config.movement);
        let camera = Camera::new(
            config.viewport.width as f32,
            config.viewport.height as f32,
            config.movement.player_size as f32,
        );
        Self { config, rng, dungeon, player, camera, phase: Phase::MainMenu }
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn config(&self) -> &Config { &self.config }
    pub fn dungeon(&self) -> &Dungeon { &self.dungeon }
    pub fn player(&self) -> &Player { &self.player }
    pub fn camera(&self) -> &Camera { &self.camera }
    pub fn phase(&self) -> Phase { self.phase }

    // ── Commands ───────────────────────────────────────────────────────────

    /// Throw away the current layout and generate a fresh one from the
    /// session's random source.  The player is reset to idle but not moved;
    /// call [`Session::spawn_player`] or [`Session::place_player`] afterwards.
    pub fn new_dungeon(&mut self) {
        dungeon::generate(&mut self.dungeon, &self.config.dungeon.rooms, &mut self.rng);
        let cell = self.player.grid();
        self.player.snap_to(cell);
    }

    /// Snap the player onto `cell` and recentre the camera.
    pub fn place_player(&mut self, cell: IVec2) {
        self.player.snap_to(cell);
        self.follow();
    }

    /// Place the player at the centre of the first room.  Returns false and
    /// leaves the player where it is if the dungeon has no rooms.
    pub fn spawn_player(&mut self) -> bool {
        match self.dungeon.rooms().first() {
            Some(room) => {
                let cell = room.center();
                self.place_player(cell);
                debug!(?cell, "spawned player");
                true
            }
            None => {
                warn!("dungeon has no rooms; player not spawned");
                false
            }
        }
    }

    // ── Phase transitions ──────────────────────────────────────────────────

    /// Main menu → Playing with a freshly generated dungeon.
    pub fn start(&mut self) {
        if self.phase != Phase::MainMenu {
            return;
        }
        self.begin_run();
    }

    /// Main menu → Playing on a prebuilt layout instead of a generated one.
    pub fn start_with(&mut self, dungeon: Dungeon) {
        if self.phase != Phase::MainMenu {
            return;
        }
        self.dungeon = dungeon;
        let cell = self.player.grid();
        self.player.snap_to(cell);
        self.spawn_player();
        self.phase = Phase::Playing;
    }

    /// Paused → Playing with a freshly generated dungeon.
    pub fn restart(&mut self) {
        if self.phase != Phase::Paused {
            return;
        }
        self.begin_run();
    }

    /// Playing ↔ Paused.  Ignored in other phases.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            other => other,
        };
    }

    /// Paused → main menu.
    pub fn to_main_menu(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::MainMenu;
        }
    }

    pub fn quit(&mut self) {
        self.phase = Phase::Quit;
    }

    fn begin_run(&mut self) {
        self.new_dungeon();
        self.spawn_player();
        self.phase = Phase::Playing;
        info!(rooms = self.dungeon.rooms().len(), "run started");
    }

    // ── Per-frame tick ─────────────────────────────────────────────────────

    /// Advance one frame by `dt` seconds with the raw direction held this frame.
    ///
    /// Order: input timing, step start, interpolation, camera.  A step started
    /// this frame already advances by `dt`.  When a step ends while the input
    /// timer's continuous latch is set, the next step starts on the same frame
    /// so held movement has no idle gap between cells.
    pub fn update(&mut self, dt: f32, raw: Direction) {
        if self.phase != Phase::Playing {
            return;
        }
        let dt = dt.max(0.0);

        self.player.input.update(raw, dt);
        self.try_step(raw);

        if self.player.update(dt) && self.player.input.continuous {
            self.try_step(raw);
        }

        self.follow();
    }

    fn try_step(&mut self, raw: Direction) {
        if raw.is_empty() || !self.player.input.should_accept_input(self.player.is_moving()) {
            return;
        }
        self.player.try_move(raw, &self.dungeon);
    }

    fn follow(&mut self) {
        let bounds = self.dungeon.pixel_size(self.config.movement.tile_size);
        self.camera.follow_player(self.player.pixel(), bounds);
    }
}
