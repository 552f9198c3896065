use glam::IVec2;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::RoomConfig;
use crate::dungeon::{Dungeon, Room};
use crate::geometry::{Elbow, l_path, walk_line};

// =============================================================================
// ROOMS AND CORRIDORS
// =============================================================================
///
/// Fill `dungeon` with non-overlapping rectangular rooms joined by L-shaped
/// corridors.
///
/// The previous contents (tiles and rooms) are discarded.  A target room count
/// is drawn from `config.min_count..=config.max_count`; rooms are then sampled
/// until that many are placed or `config.max_attempts` samples have been
/// drawn.  Each room after the first is connected to the one placed before it,
/// so the rooms form a single chain and every room is reachable from every
/// other.
///
/// Ending with fewer rooms than the target (even zero) is not an error.
pub fn generate(dungeon: &mut Dungeon, config: &RoomConfig, rng: &mut impl Rng) {
    dungeon.clear();

    if config.min_size <= 0 || config.min_size > config.max_size || config.min_count > config.max_count {
        warn!(?config, "room config has an empty range; leaving dungeon solid");
        return;
    }

    let target = rng.gen_range(config.min_count..=config.max_count);
    let mut attempts = 0;

    while dungeon.rooms().len() < target && attempts < config.max_attempts {
        attempts += 1;

        let Some(room) = sample_room(dungeon, config, rng) else {
            continue;
        };

        if dungeon.rooms().iter().any(|r| room.overlaps(r, config.padding)) {
            continue;
        }

        let previous = dungeon.rooms().last().copied();
        dungeon.add_room(room);

        if let Some(prev) = previous {
            let elbow = if rng.gen_bool(0.5) { Elbow::HorizontalFirst } else { Elbow::VerticalFirst };
            connect(dungeon, prev.center(), room.center(), elbow);
        }

        debug!(x = room.x, y = room.y, w = room.width, h = room.height, attempt = attempts, "placed room");
    }

    info!(
        rooms = dungeon.rooms().len(),
        target_rooms = target,
        attempts,
        "generated {}x{} dungeon",
        dungeon.width(),
        dungeon.height()
    );
}

/// Draw a room size and a top-left corner that keeps at least one wall cell
/// above and left of the room and two below and right of it.
///
/// Returns `None` when the sampled size cannot fit the grid at all.
fn sample_room(dungeon: &Dungeon, config: &RoomConfig, rng: &mut impl Rng) -> Option<Room> {
    let width = rng.gen_range(config.min_size..=config.max_size);
    let height = rng.gen_range(config.min_size..=config.max_size);

    let span_x = dungeon.width() - width - 2;
    let span_y = dungeon.height() - height - 2;
    if span_x <= 0 || span_y <= 0 {
        return None;
    }

    let x = 1 + rng.gen_range(0..span_x);
    let y = 1 + rng.gen_range(0..span_y);
    Some(Room::new(x, y, width, height))
}

/// Carve an L-corridor between two cells.  Only wall cells change.
fn connect(dungeon: &mut Dungeon, from: IVec2, to: IVec2, elbow: Elbow) {
    for (start, end) in l_path(from, to, elbow) {
        walk_line(start, end, |cell| {
            dungeon.carve_corridor(cell);
            true
        });
    }
}
