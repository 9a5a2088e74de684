// Models module - Snapshot entities, geometry and outgoing commands

pub mod position;
pub mod ship;
pub mod planet;
pub mod game_map;
pub mod command;

// Re-export all models for easier imports
pub use position::*;
pub use ship::*;
pub use planet::*;
pub use game_map::*;
pub use command::*;

/// Identifier of a ship or planet as sent by the game server
pub type EntityId = i32;

/// Identifier of a player (0..=3 in a Halite II game)
pub type PlayerId = i32;
