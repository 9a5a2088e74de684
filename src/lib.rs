// Halite II Autonomous Fleet Library
// Per-turn decision engine plus the server plumbing around it

pub mod models;
pub mod client;
pub mod operations;
pub mod admiral;
pub mod storage;
pub mod config;
pub mod error;
pub mod verbosity;

// Re-export commonly used types
pub use models::{
    planet::Planet,
    ship::{DockingStatus, Ship},
    game_map::GameMap,
    command::Move,
    position::Position,
};

pub use admiral::Admiral;
pub use config::BotConfig;
pub use error::{BotError, BotResult};

// Constants
pub const DEFAULT_CONFIG_FILE: &str = "halite_admiral.toml";
