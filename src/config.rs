use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

// ── Defaults ──────────────────────────────────────────────────────────────────

/// Dungeon width in cells.
pub const DEFAULT_DUNGEON_WIDTH: i32 = 40;
/// Dungeon height in cells.
pub const DEFAULT_DUNGEON_HEIGHT: i32 = 30;
/// Edge length of one cell in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 40;
/// Edge length of the player square in pixels.
pub const DEFAULT_PLAYER_SIZE: u32 = 30;
/// Movement speed in cells per second.
pub const DEFAULT_MOVE_SPEED: f32 = 8.0;
/// Seconds a direction must be held before movement repeats.
pub const DEFAULT_INPUT_BUFFER_TIME: f32 = 0.15;
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

// ── ConfigError ───────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ── RoomConfig ────────────────────────────────────────────────────────────────

/// Room placement parameters for one generation pass.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Smallest room side, inclusive.
    pub min_size: i32,
    /// Largest room side, inclusive.
    pub max_size: i32,
    /// Fewest rooms to aim for; the actual target is drawn from `min_count..=max_count`.
    pub min_count: usize,
    pub max_count: usize,
    /// Sampled rooms (placed or rejected) before generation gives up.
    pub max_attempts: u32,
    /// Cells of clearance required between any two rooms.
    pub padding: i32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            min_size: 4,
            max_size: 9,
            min_count: 8,
            max_count: 12,
            max_attempts: 100,
            padding: 2,
        }
    }
}

// ── DungeonConfig ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub width: i32,
    pub height: i32,
    pub rooms: RoomConfig,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DUNGEON_WIDTH,
            height: DEFAULT_DUNGEON_HEIGHT,
            rooms: RoomConfig::default(),
        }
    }
}

// ── MovementConfig ────────────────────────────────────────────────────────────

/// Pixel metrics and timing for the player.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub tile_size: u32,
    pub player_size: u32,
    /// Cells per second.
    pub move_speed: f32,
    /// Hold time in seconds before a held direction repeats every tile.
    pub input_buffer_time: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            player_size: DEFAULT_PLAYER_SIZE,
            move_speed: DEFAULT_MOVE_SPEED,
            input_buffer_time: DEFAULT_INPUT_BUFFER_TIME,
        }
    }
}

impl MovementConfig {
    /// Offset that centres the player square inside its cell.
    ///
    /// Uses integer halving, so a 40px tile with a 30px player gives 5.
    pub fn centering_offset(&self) -> f32 {
        ((self.tile_size as i32 - self.player_size as i32) / 2) as f32
    }
}

// ── ViewportConfig ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: DEFAULT_VIEWPORT_WIDTH, height: DEFAULT_VIEWPORT_HEIGHT }
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

/// Top-level configuration.  Every section and field is optional in JSON;
/// missing values fall back to the defaults above.
///
/// ```json
/// {
///   "dungeon": { "width": 60, "rooms": { "max_count": 16 } },
///   "movement": { "move_speed": 10.0 }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dungeon: DungeonConfig,
    pub movement: MovementConfig,
    pub viewport: ViewportConfig,
}

impl Config {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the generator or movement code cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.dungeon;
        let r = &d.rooms;
        let m = &self.movement;

        if d.width <= 0 || d.height <= 0 {
            return Err(ConfigError::Invalid(format!("dungeon must be non-empty, got {}x{}", d.width, d.height)));
        }
        if r.min_size <= 0 || r.min_size > r.max_size {
            return Err(ConfigError::Invalid(format!("room size range {}..={} is empty", r.min_size, r.max_size)));
        }
        if r.min_count > r.max_count {
            return Err(ConfigError::Invalid(format!("room count range {}..={} is empty", r.min_count, r.max_count)));
        }
        if r.padding < 0 {
            return Err(ConfigError::Invalid(format!("room padding must be non-negative, got {}", r.padding)));
        }
        // Placement samples x from 1..(width - room - 1), so the largest room
        // needs at least three spare cells on each axis.
        if r.max_size + 3 > d.width || r.max_size + 3 > d.height {
            return Err(ConfigError::Invalid(format!(
                "rooms up to {} cells do not fit a {}x{} dungeon",
                r.max_size, d.width, d.height
            )));
        }
        if m.tile_size == 0 || m.player_size == 0 || m.player_size > m.tile_size {
            return Err(ConfigError::Invalid(format!(
                "player size {} must be in 1..={} (tile size)",
                m.player_size, m.tile_size
            )));
        }
        if d.width.checked_mul(d.height).is_none() {
            return Err(ConfigError::Invalid(format!(
                "dungeon of {}x{} cells is too large",
                d.width, d.height
            )));
        }
        let extent = i32::try_from(m.tile_size)
            .ok()
            .and_then(|tile| d.width.max(d.height).checked_mul(tile));
        if extent.is_none() {
            return Err(ConfigError::Invalid(format!(
                "a {}x{} dungeon of {}px tiles overflows pixel coordinates",
                d.width, d.height, m.tile_size
            )));
        }
        if m.move_speed.is_nan() || m.move_speed <= 0.0 {
            return Err(ConfigError::Invalid(format!("move speed must be positive, got {}", m.move_speed)));
        }
        if m.input_buffer_time.is_nan() || m.input_buffer_time < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "input buffer time must be non-negative, got {}",
                m.input_buffer_time
            )));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::Invalid("viewport must be non-empty".to_string()));
        }
        Ok(())
    }
}
