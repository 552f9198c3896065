use crate::config::DEFAULT_INPUT_BUFFER_TIME;
use crate::input::Direction;

/// Tap-versus-hold tracker for directional input.
///
/// A fresh press moves the player one cell.  Only once the same direction has
/// been held for `buffer_time` seconds does the tracker latch
/// `continuous`, letting a new step start the moment the previous one ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputTimer {
    /// Direction seen on the previous frame.
    pub last_direction: Direction,
    /// Seconds the current direction has been held, not counting the first frame.
    pub hold_time: f32,
    pub continuous: bool,
    buffer_time: f32,
}

impl Default for InputTimer {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_BUFFER_TIME)
    }
}

impl InputTimer {
    pub fn new(buffer_time: f32) -> Self {
        Self {
            last_direction: Direction::NONE,
            hold_time: 0.0,
            continuous: false,
            buffer_time,
        }
    }

    pub fn buffer_time(&self) -> f32 { self.buffer_time }

    /// Feed one frame of raw input.
    pub fn update(&mut self, current: Direction, dt: f32) {
        if current.is_empty() {
            self.reset();
        } else if current == self.last_direction {
            self.hold_time += dt.max(0.0);
            if self.hold_time >= self.buffer_time {
                self.continuous = true;
            }
        } else {
            self.last_direction = current;
            self.hold_time = 0.0;
            self.continuous = false;
        }
    }

    /// Back to neutral, as if no key had ever been pressed.
    pub fn reset(&mut self) {
        self.last_direction = Direction::NONE;
        self.hold_time = 0.0;
        self.continuous = false;
    }

    /// Whether a new step may be started this frame.
    pub fn should_accept_input(&self, moving: bool) -> bool {
        !moving || self.continuous
    }
}
