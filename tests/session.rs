use glam::{IVec2, Vec2};
use tilecrawl::dungeon::{Dungeon, Room, Tile};
use tilecrawl::input::Direction;
use tilecrawl::{Config, Phase, Session};

const FRAME: f32 = 1.0 / 60.0;

/// Session playing on a 40x30 grid holding a single room.
fn playing_in(room: Room) -> Session {
    let mut dungeon = Dungeon::new(40, 30);
    dungeon.add_room(room);
    let mut session = Session::with_seed(Config::default(), 1);
    session.start_with(dungeon);
    session
}

// ── Phases ───────────────────────────────────────────────────────────────────

#[test]
fn test_starts_in_main_menu_and_ignores_updates() {
    let mut s = Session::with_seed(Config::default(), 9);
    assert_eq!(s.phase(), Phase::MainMenu);
    s.update(0.5, Direction::RIGHT);
    assert_eq!(s.player().grid(), IVec2::ZERO);
    assert!(!s.player().is_moving());
}

#[test]
fn test_start_generates_and_spawns_in_first_room() {
    let mut s = Session::with_seed(Config::default(), 42);
    s.start();
    assert_eq!(s.phase(), Phase::Playing);
    let first = s.dungeon().rooms()[0];
    assert_eq!(s.player().grid(), first.center());
    assert_eq!(s.player().pixel(), s.player().canonical_pixel(first.center()));
    assert_eq!(s.dungeon().tile(first.center().x, first.center().y), Tile::Floor);
}

#[test]
fn test_same_seed_same_dungeon() {
    let mut a = Session::with_seed(Config::default(), 1234);
    let mut b = Session::with_seed(Config::default(), 1234);
    a.start();
    b.start();
    assert_eq!(a.dungeon(), b.dungeon());
    assert_eq!(a.player().grid(), b.player().grid());
}

#[test]
fn test_pause_freezes_the_world() {
    let mut s = playing_in(Room::new(5, 5, 6, 6));
    s.toggle_pause();
    assert_eq!(s.phase(), Phase::Paused);
    s.update(0.1, Direction::RIGHT);
    assert!(!s.player().is_moving());
    s.toggle_pause();
    assert_eq!(s.phase(), Phase::Playing);
    s.update(0.02, Direction::RIGHT);
    assert!(s.player().is_moving());
}

#[test]
fn test_restart_only_from_pause() {
    let mut s = playing_in(Room::new(5, 5, 6, 6));
    s.restart();
    assert_eq!(s.dungeon().rooms(), &[Room::new(5, 5, 6, 6)]);

    s.toggle_pause();
    s.restart();
    assert_eq!(s.phase(), Phase::Playing);
    assert_ne!(s.dungeon().rooms(), &[Room::new(5, 5, 6, 6)]);
    assert_eq!(s.player().grid(), s.dungeon().rooms()[0].center());
}

#[test]
fn test_main_menu_and_quit() {
    let mut s = playing_in(Room::new(5, 5, 6, 6));
    s.to_main_menu();
    assert_eq!(s.phase(), Phase::Playing);
    s.toggle_pause();
    s.to_main_menu();
    assert_eq!(s.phase(), Phase::MainMenu);
    s.toggle_pause();
    assert_eq!(s.phase(), Phase::MainMenu);
    s.quit();
    assert_eq!(s.phase(), Phase::Quit);
}

#[test]
fn test_regeneration_resets_a_moving_player() {
    let mut s = playing_in(Room::new(5, 5, 6, 6));
    s.update(0.02, Direction::RIGHT);
    assert!(s.player().is_moving());
    s.new_dungeon();
    assert!(!s.player().is_moving());
    assert_eq!(s.player().target(), s.player().grid());
}

#[test]
fn test_empty_dungeon_does_not_spawn() {
    let mut s = Session::with_seed(Config::default(), 3);
    s.start_with(Dungeon::new(40, 30));
    assert_eq!(s.phase(), Phase::Playing);
    assert!(!s.spawn_player());
    assert_eq!(s.player().grid(), IVec2::ZERO);
    s.update(0.1, Direction::RIGHT);
    assert!(!s.player().is_moving());
}

// ── Movement scenarios ───────────────────────────────────────────────────────

#[test]
fn test_held_right_three_frames() {
    let mut s = playing_in(Room::new(5, 5, 6, 6));
    let start = s.player().pixel();
    let target_x = s.player().canonical_pixel(IVec2::new(9, 8)).x;
    assert_eq!(s.player().grid(), IVec2::new(8, 8));

    for expected in [0.16, 0.32, 0.48] {
        s.update(0.02, Direction::RIGHT);
        assert!(s.player().is_moving());
        assert!((s.player().progress() - expected).abs() < 1e-4, "progress {}", s.player().progress());
    }
    let pixel = s.player().pixel();
    assert!(pixel.x > start.x && pixel.x < target_x);
    assert_eq!(pixel.y, start.y);
    assert_eq!(s.player().grid(), IVec2::new(8, 8));
}

#[test]
fn test_wall_blocks_forever() {
    let mut s = playing_in(Room::new(5, 5, 1, 1));
    for _ in 0..120 {
        s.update(FRAME, Direction::RIGHT);
        assert!(!s.player().is_moving());
    }
    assert_eq!(s.player().grid(), IVec2::new(5, 5));
    assert_eq!(s.player().pixel(), Vec2::new(205.0, 205.0));
}

#[test]
fn test_diagonal_moves_both_axes_in_one_step() {
    let mut s = playing_in(Room::new(5, 5, 6, 6));
    s.update(FRAME, Direction::UP | Direction::LEFT);
    assert_eq!(s.player().target(), IVec2::new(7, 7));
    for _ in 0..10 {
        s.update(FRAME, Direction::NONE);
    }
    assert_eq!(s.player().grid(), IVec2::new(7, 7));
    assert!(!s.player().is_moving());
}

#[test]
fn test_tap_moves_one_cell() {
    let mut s = playing_in(Room::new(5, 5, 6, 6));
    s.update(FRAME, Direction::LEFT);
    for _ in 0..30 {
        s.update(FRAME, Direction::NONE);
    }
    assert_eq!(s.player().grid(), IVec2::new(7, 8));
}

#[test]
fn test_held_direction_chains_steps_once_latched() {
    // Each step takes 8 frames at 60 fps.  Step 2 starts on the frame after
    // step 1 lands; by the time step 2 lands the latch is set, so steps 3
    // and 4 start on the very frame their predecessor lands.
    let mut s = playing_in(Room::new(2, 5, 30, 3));
    assert_eq!(s.player().grid(), IVec2::new(17, 6));
    for _ in 0..30 {
        s.update(FRAME, Direction::RIGHT);
    }
    assert_eq!(s.player().grid(), IVec2::new(20, 6));
    assert!(s.player().is_moving());
    assert_eq!(s.player().target(), IVec2::new(21, 6));
}

#[test]
fn test_stall_frame_moves_a_single_cell() {
    let mut s = playing_in(Room::new(5, 5, 6, 6));
    s.update(5.0, Direction::DOWN);
    assert!(!s.player().is_moving());
    assert_eq!(s.player().progress(), 1.0);
    assert_eq!(s.player().grid(), IVec2::new(8, 9));
    assert_eq!(s.player().pixel(), s.player().canonical_pixel(IVec2::new(8, 9)));
}

#[test]
fn test_opposing_keys_do_not_move() {
    let mut s = playing_in(Room::new(5, 5, 6, 6));
    for _ in 0..20 {
        s.update(FRAME, Direction::LEFT | Direction::RIGHT);
    }
    assert_eq!(s.player().grid(), IVec2::new(8, 8));
    assert!(!s.player().is_moving());
}

#[test]
fn test_camera_tracks_player() {
    let mut s = playing_in(Room::new(20, 15, 6, 6));
    let p = s.player().pixel();
    assert_eq!(s.camera().offset, Vec2::new(p.x + 15.0 - 400.0, p.y + 15.0 - 300.0));
    s.update(FRAME, Direction::RIGHT);
    let p = s.player().pixel();
    assert!((s.camera().offset.x - (p.x + 15.0 - 400.0)).abs() < 1e-3);
}
