pub mod timing;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use bitflags::bitflags;
use glam::IVec2;
pub use winit::keyboard::KeyCode;

pub use timing::InputTimer;

// ── Direction ───────────────────────────────────────────────────────────────

bitflags! {
    /// Combined directional input for one frame.  Bits may be OR-ed freely,
    /// including opposing pairs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        const UP = 1;
        const DOWN = 2;
        const LEFT = 4;
        const RIGHT = 8;

        const UP_LEFT = Self::UP.bits() | Self::LEFT.bits();
        const UP_RIGHT = Self::UP.bits() | Self::RIGHT.bits();
        const DOWN_LEFT = Self::DOWN.bits() | Self::LEFT.bits();
        const DOWN_RIGHT = Self::DOWN.bits() | Self::RIGHT.bits();
    }
}

impl Direction {
    pub const NONE: Self = Self::empty();

    /// Net cell offset `(dx, dy)` with y pointing down.
    ///
    /// Each set bit contributes its unit step, so opposing bits on the same
    /// axis cancel: `UP | DOWN` yields `dy == 0`.
    pub fn offset(self) -> IVec2 {
        let mut d = IVec2::ZERO;
        if self.contains(Self::UP) { d.y -= 1; }
        if self.contains(Self::DOWN) { d.y += 1; }
        if self.contains(Self::LEFT) { d.x -= 1; }
        if self.contains(Self::RIGHT) { d.x += 1; }
        d
    }
}

// ── Raw key state ─────────────────────────────────────────────────────────────

/// Physical keys held during the current frame.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.keys_held.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
}

// ── Action bindings ───────────────────────────────────────────────────────────

/// Logical movement actions the player can bind keys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAction {
    Up,
    Down,
    Left,
    Right,
}

impl MoveAction {
    pub const ALL: [MoveAction; 4] = [MoveAction::Up, MoveAction::Down, MoveAction::Left, MoveAction::Right];

    pub fn direction(self) -> Direction {
        match self {
            MoveAction::Up => Direction::UP,
            MoveAction::Down => Direction::DOWN,
            MoveAction::Left => Direction::LEFT,
            MoveAction::Right => Direction::RIGHT,
        }
    }
}

/// Maps logical actions to one or more physical keys.
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<A, Vec<KeyCode>>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: A, key: KeyCode) {
        self.bindings.entry(action).or_default().push(key);
    }

    /// Returns true if any key bound to `action` is currently held.
    pub fn is_held(&self, action: A, input: &InputState) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|k| input.is_key_held(*k)))
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}

impl ActionMap<MoveAction> {
    /// Arrow keys plus WASD.
    pub fn default_movement() -> Self {
        let mut map = Self::new();
        map.bind(MoveAction::Up, KeyCode::ArrowUp);
        map.bind(MoveAction::Up, KeyCode::KeyW);
        map.bind(MoveAction::Down, KeyCode::ArrowDown);
        map.bind(MoveAction::Down, KeyCode::KeyS);
        map.bind(MoveAction::Left, KeyCode::ArrowLeft);
        map.bind(MoveAction::Left, KeyCode::KeyA);
        map.bind(MoveAction::Right, KeyCode::ArrowRight);
        map.bind(MoveAction::Right, KeyCode::KeyD);
        map
    }
}

/// OR together the directions of every held movement action.
pub fn direction_from_input(input: &InputState, map: &ActionMap<MoveAction>) -> Direction {
    MoveAction::ALL
        .into_iter()
        .filter(|a| map.is_held(*a, input))
        .fold(Direction::NONE, |dir, a| dir | a.direction())
}
