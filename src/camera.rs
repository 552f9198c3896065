use std::ops::Range;

use glam::Vec2;

/// Scrolling viewport over the dungeon, in world pixels.
///
/// `offset` is the world-space pixel shown at the top-left corner of the
/// viewport.  It is recomputed every frame by [`Camera::follow_player`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    /// Visible area in pixels.
    pub viewport: Vec2,
    /// Edge length of the followed square; the camera centres on its middle.
    pub focus_size: f32,
}

impl Camera {
    pub fn new(viewport_w: f32, viewport_h: f32, focus_size: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport: Vec2::new(viewport_w, viewport_h),
            focus_size,
        }
    }

    /// Centre the viewport on the player's pixel centre, then clamp so it
    /// stays inside `[0, dungeon_size]`.
    ///
    /// On an axis where the dungeon is smaller than the viewport the offset is
    /// pinned to 0 and the viewport hangs past the far edge.
    pub fn follow_player(&mut self, player_pixel: Vec2, dungeon_size: Vec2) {
        let half_focus = (self.focus_size as i32 / 2) as f32;
        let half_view = Vec2::new(
            (self.viewport.x as i32 / 2) as f32,
            (self.viewport.y as i32 / 2) as f32,
        );
        let centered = player_pixel + Vec2::splat(half_focus) - half_view;
        let max = dungeon_size - self.viewport;
        // Upper bound first so an undersized dungeon ends on the lower bound.
        self.offset = centered.min(max).max(Vec2::ZERO);
    }

    /// Convert a world-pixel position to viewport-relative pixels.
    pub fn world_to_view(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }

    /// Column and row ranges of cells that intersect the viewport, clamped to
    /// a `grid_w × grid_h` grid.
    pub fn visible_cells(&self, tile_size: u32, grid_w: i32, grid_h: i32) -> (Range<i32>, Range<i32>) {
        let tile = tile_size.max(1) as i32;
        let start_col = (self.offset.x as i32 / tile).max(0);
        let end_col = ((self.offset.x + self.viewport.x) as i32 / tile + 1).min(grid_w);
        let start_row = (self.offset.y as i32 / tile).max(0);
        let end_row = ((self.offset.y + self.viewport.y) as i32 / tile + 1).min(grid_h);
        (start_col..end_col.max(start_col), start_row..end_row.max(start_row))
    }
}
