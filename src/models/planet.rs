use serde::{Deserialize, Serialize};
use super::{EntityId, PlayerId, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: EntityId,
    pub position: Position,
    pub health: i32,
    pub radius: f64,
    pub docking_spots: i32,
    pub current_production: i32,
    pub remaining_production: i32,
    pub owner: Option<PlayerId>,
    pub docked_ships: Vec<EntityId>,
}

impl Planet {
    pub fn docked_count(&self) -> i32 {
        self.docked_ships.len() as i32
    }

    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    pub fn is_full(&self) -> bool {
        self.docked_count() >= self.docking_spots
    }

    /// Distance from `from` to the planet surface
    pub fn surface_distance(&self, from: &Position) -> f64 {
        from.distance_to(&self.position) - self.radius
    }
}
