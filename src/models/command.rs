use serde::{Deserialize, Serialize};
use super::EntityId;

/// A command for one ship, submitted to the server at the end of the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Dock { ship: EntityId, planet: EntityId },
    Thrust { ship: EntityId, magnitude: i32, angle: i32 },
}

impl Move {
    pub fn ship_id(&self) -> EntityId {
        match self {
            Move::Dock { ship, .. } => *ship,
            Move::Thrust { ship, .. } => *ship,
        }
    }

    /// Wire encoding of a single command
    pub fn encode(&self) -> String {
        match self {
            Move::Dock { ship, planet } => format!("d {} {}", ship, planet),
            Move::Thrust { ship, magnitude, angle } => format!("t {} {} {}", ship, magnitude, angle),
        }
    }
}
