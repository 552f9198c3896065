pub mod camera;
pub mod config;
pub mod dungeon;
pub mod easing;
pub mod geometry;
pub mod input;
pub mod player;
pub mod session;

pub use config::Config;
pub use session::{Phase, Session};
