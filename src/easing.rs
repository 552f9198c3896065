//! Timing curves mapping raw movement progress `t ∈ [0, 1]` to eased progress.
//!
//! Every curve is a plain `fn(f32) -> f32` so it can be stored in a
//! [`Player`](crate::player::Player) and swapped without touching the
//! movement state machine.  Curves must map 0 → 0 and 1 → 1.

/// A progress-to-progress curve.
pub type Easing = fn(f32) -> f32;

/// Constant speed.
pub fn linear(t: f32) -> f32 {
    t
}

/// Cubic ease-out: fast start, gentle stop.  `1 - (1 - t)^3`.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Quadratic ease-in-out.
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
