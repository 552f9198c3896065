use glam::{IVec2, Vec2};
use tracing::trace;

use crate::config::MovementConfig;
use crate::dungeon::Dungeon;
use crate::easing::{Easing, ease_out_cubic};
use crate::input::{Direction, InputTimer};

/// Grid-locked player with smooth pixel interpolation between cells.
///
/// Two states:
/// - **Idle**: `moving == false`, `pixel` is exactly the canonical position of
///   `grid`, and `target == grid`.
/// - **Transitioning**: `moving == true`, `progress ∈ [0, 1)`, and `pixel` is
///   the eased interpolation from `grid`'s canonical position to `target`'s.
///
/// `grid` only changes when a transition completes, so a move always starts
/// from a whole cell.
#[derive(Debug, Clone)]
pub struct Player {
    grid: IVec2,
    target: IVec2,
    pixel: Vec2,
    moving: bool,
    direction: Direction,
    progress: f32,
    /// Hold-to-repeat tracker for directional input.
    pub input: InputTimer,
    metrics: MovementConfig,
    easing: Easing,
}

impl Player {
    /// A player idle at cell (0, 0).
    pub fn new(metrics: MovementConfig) -> Self {
        let mut player = Self {
            grid: IVec2::ZERO,
            target: IVec2::ZERO,
            pixel: Vec2::ZERO,
            moving: false,
            direction: Direction::NONE,
            progress: 0.0,
            input: InputTimer::new(metrics.input_buffer_time),
            metrics,
            easing: ease_out_cubic,
        };
        player.snap_to(IVec2::ZERO);
        player
    }

    /// Replace the interpolation curve.  Takes effect on the next update.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn grid(&self) -> IVec2 { self.grid }
    pub fn target(&self) -> IVec2 { self.target }
    pub fn pixel(&self) -> Vec2 { self.pixel }
    pub fn is_moving(&self) -> bool { self.moving }
    pub fn direction(&self) -> Direction { self.direction }
    pub fn progress(&self) -> f32 { self.progress }
    pub fn size(&self) -> f32 { self.metrics.player_size as f32 }
    pub fn metrics(&self) -> &MovementConfig { &self.metrics }

    /// Top-left pixel of the player when standing still on `cell`.
    pub fn canonical_pixel(&self, cell: IVec2) -> Vec2 {
        let tile = self.metrics.tile_size as f32;
        let offset = self.metrics.centering_offset();
        Vec2::new(cell.x as f32 * tile + offset, cell.y as f32 * tile + offset)
    }

    // ── State transitions ───────────────────────────────────────────────────

    /// Teleport to `cell`, cancelling any transition and clearing input timing.
    pub fn snap_to(&mut self, cell: IVec2) {
        self.grid = cell;
        self.target = cell;
        self.pixel = self.canonical_pixel(cell);
        self.moving = false;
        self.direction = Direction::NONE;
        self.progress = 0.0;
        self.input.reset();
    }

    /// Begin a transition toward `target`.  Ignored while already moving;
    /// a new step can only begin from a whole cell.
    pub fn start_move(&mut self, direction: Direction, target: IVec2) -> bool {
        if self.moving {
            return false;
        }
        self.moving = true;
        self.direction = direction;
        self.progress = 0.0;
        self.target = target;
        trace!(from = ?self.grid, to = ?target, ?direction, "start move");
        true
    }

    /// Start a step in `direction` if the destination is walkable.
    ///
    /// Directions whose net offset is zero (opposing keys on every pressed
    /// axis) never start a step.  Returns whether a transition began.
    pub fn try_move(&mut self, direction: Direction, dungeon: &Dungeon) -> bool {
        let offset = direction.offset();
        if self.moving || offset == IVec2::ZERO {
            return false;
        }
        let dest = self.grid + offset;
        if !dungeon.is_walkable(dest.x, dest.y) {
            return false;
        }
        self.start_move(direction, dest)
    }

    /// Advance the current transition by `dt` seconds.
    ///
    /// Returns true if the transition finished during this call.  Negative
    /// deltas are treated as zero.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.moving {
            return false;
        }

        self.progress += self.metrics.move_speed * dt.max(0.0);

        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.grid = self.target;
            self.pixel = self.canonical_pixel(self.grid);
            self.moving = false;
            self.direction = Direction::NONE;
            return true;
        }

        let start = self.canonical_pixel(self.grid);
        let end = self.canonical_pixel(self.target);
        let t = (self.easing)(self.progress);
        self.pixel = start + (end - start) * t;
        false
    }
}
