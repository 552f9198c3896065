// =============================================================================
// GEOMETRY.RS — Grid primitives for room-and-corridor layouts
//
// - Axis-aligned rectangle overlap (with clearance padding)
// - Line walking (for carving corridor segments)
// - L-shaped paths between two cells
// =============================================================================

use glam::IVec2;

// =============================================================================
// RECTANGLES
// =============================================================================

/// Check whether two rectangles overlap once each is grown by `padding`
/// cells on its right and bottom edges.
///
/// Rectangles are `(x, y, w, h)` with `(x, y)` the top-left cell.  A padding of
/// 0 is a plain overlap test; touching edges do not count as overlap.
#[inline]
pub fn rects_overlap(a: (i32, i32, i32, i32), b: (i32, i32, i32, i32), padding: i32) -> bool {
    let (ax, ay, aw, ah) = a;
    let (bx, by, bw, bh) = b;
    ax < bx + bw + padding
        && ax + aw + padding > bx
        && ay < by + bh + padding
        && ay + ah + padding > by
}

// =============================================================================
// BRESENHAM'S LINE ALGORITHM
// =============================================================================

/// Iterate along a line, calling a function for each point.
/// Stops early if the function returns false.
///
/// Both endpoints are visited.  For axis-aligned lines every cell between the
/// endpoints is visited exactly once, which is what corridor carving relies on.
///
/// Returns true if the line completed, false if it was interrupted.
pub fn walk_line(from: IVec2, to: IVec2, mut callback: impl FnMut(IVec2) -> bool) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut p = from;
    let mut err = dx - dy;

    loop {
        if !callback(p) {
            return false;
        }

        if p == to {
            break;
        }

        let e2 = 2 * err;

        if e2 > -dy {
            err -= dy;
            p.x += sx;
        }

        if e2 < dx {
            err += dx;
            p.y += sy;
        }
    }

    true
}

// =============================================================================
// L-PATHS
// =============================================================================

/// Which leg of an L-path runs first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Elbow {
    /// Along `from`'s row, then along `to`'s column.
    HorizontalFirst,
    /// Along `from`'s column, then along `to`'s row.
    VerticalFirst,
}

/// The two straight segments of an L-path from `from` to `to`.
///
/// The segments share the elbow cell.  Degenerate legs (same row or column)
/// collapse to a single cell.
pub fn l_path(from: IVec2, to: IVec2, elbow: Elbow) -> [(IVec2, IVec2); 2] {
    let corner = match elbow {
        Elbow::HorizontalFirst => IVec2::new(to.x, from.y),
        Elbow::VerticalFirst => IVec2::new(from.x, to.y),
    };
    [(from, corner), (corner, to)]
}
