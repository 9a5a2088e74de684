use serde::{Deserialize, Serialize};
use super::{EntityId, Planet, PlayerId, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockingStatus {
    Undocked,
    Docking,
    Docked,
    Undocking,
}

impl DockingStatus {
    /// Decode the numeric status used on the wire
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(DockingStatus::Undocked),
            1 => Some(DockingStatus::Docking),
            2 => Some(DockingStatus::Docked),
            3 => Some(DockingStatus::Undocking),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            DockingStatus::Undocked => 0,
            DockingStatus::Docking => 1,
            DockingStatus::Docked => 2,
            DockingStatus::Undocking => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: EntityId,
    pub owner: PlayerId,
    pub position: Position,
    pub health: i32,
    pub docking_status: DockingStatus,
    pub docked_planet: Option<EntityId>,
    pub docking_progress: i32,
    pub weapon_cooldown: i32,
}

impl Ship {
    pub fn distance_to(&self, other: &Ship) -> f64 {
        self.position.distance_to(&other.position)
    }

    pub fn is_undocked(&self) -> bool {
        self.docking_status == DockingStatus::Undocked
    }

    /// Whether a dock command would be accepted this turn
    pub fn within_docking_range(&self, planet: &Planet, ship_radius: f64, dock_radius: f64) -> bool {
        self.position.distance_to(&planet.position) <= ship_radius + dock_radius + planet.radius
    }
}
