pub mod generator;

use glam::{IVec2, Vec2};

use crate::geometry::rects_overlap;

pub use generator::generate;

// ── Tile ─────────────────────────────────────────────────────────────────────

/// Kind of a single dungeon cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Wall,
    /// Inside a room.
    Floor,
    /// Carved by a connecting L-corridor.
    Corridor,
}

impl Tile {
    pub fn is_walkable(self) -> bool {
        self != Tile::Wall
    }

    /// ASCII rendering used by debug dumps.
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Corridor => ',',
        }
    }
}

// ── Room ─────────────────────────────────────────────────────────────────────

/// Axis-aligned room in cell coordinates.  `(x, y)` is the top-left cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Centre cell, rounding toward the top-left for even sizes.
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// True if the two rooms overlap once grown by `padding` cells.
    pub fn overlaps(&self, other: &Room, padding: i32) -> bool {
        rects_overlap(
            (self.x, self.y, self.width, self.height),
            (other.x, other.y, other.width, other.height),
            padding,
        )
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= self.x
            && cell.x < self.x + self.width
            && cell.y >= self.y
            && cell.y < self.y + self.height
    }
}

// ── Dungeon ──────────────────────────────────────────────────────────────────

/// Fixed-size tile grid plus the rooms placed by the last generation pass.
///
/// Cells are stored row-major.  Everything outside the grid reads as
/// [`Tile::Wall`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    rooms: Vec<Room>,
}

impl Dungeon {
    /// Create a solid-wall dungeon with no rooms.  Negative sizes are treated as 0.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; width as usize * height as usize],
            rooms: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn rooms(&self) -> &[Room] { &self.rooms }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Tile at `(x, y)`; out-of-range cells are walls.
    pub fn tile(&self, x: i32, y: i32) -> Tile {
        if self.in_bounds(x, y) {
            self.tiles[self.index(x, y)]
        } else {
            Tile::Wall
        }
    }

    /// Overwrite a single cell.  Out-of-range writes are ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        if self.in_bounds(x, y) {
            let i = self.index(x, y);
            self.tiles[i] = tile;
        }
    }

    /// True if the player may stand on `(x, y)`.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_walkable()
    }

    /// Full grid extent in pixels for the given tile size.
    pub fn pixel_size(&self, tile_size: u32) -> Vec2 {
        let tile = tile_size as f32;
        Vec2::new(self.width as f32 * tile, self.height as f32 * tile)
    }

    /// Reset every cell to wall and forget all rooms.
    pub fn clear(&mut self) {
        self.tiles.fill(Tile::Wall);
        self.rooms.clear();
    }

    /// Carve `room` to floor and append it to the room list.
    pub fn add_room(&mut self, room: Room) {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                self.set_tile(x, y, Tile::Floor);
            }
        }
        self.rooms.push(room);
    }

    /// Turn `cell` into corridor if it is currently wall.  Floors are never
    /// downgraded.
    pub fn carve_corridor(&mut self, cell: IVec2) {
        if self.tile(cell.x, cell.y) == Tile::Wall {
            self.set_tile(cell.x, cell.y, Tile::Corridor);
        }
    }

    /// Row-major iterator over `(cell, tile)`.
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, Tile)> + '_ {
        self.tiles.iter().enumerate().map(move |(i, &t)| {
            let i = i as i32;
            (IVec2::new(i % self.width, i / self.width), t)
        })
    }

    /// Render the grid as one line of glyphs per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.tiles.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|t| t.glyph()));
            out.push('\n');
        }
        out
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
