use serde::{Deserialize, Serialize};
use super::{EntityId, Planet, PlayerId, Position, Ship};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub ships: Vec<EntityId>,
}

/// Reference to either kind of entity on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRef {
    Ship(EntityId),
    Planet(EntityId),
}

/// One turn's view of the world, refreshed from the server every turn.
///
/// Planets keep the order in which the server listed them; range scans
/// depend on that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameMap {
    pub width: f64,
    pub height: f64,
    pub my_id: PlayerId,
    pub players: Vec<Player>,
    pub planets: Vec<Planet>,
    pub ships: Vec<Ship>,
}

impl GameMap {
    pub fn empty(width: f64, height: f64, my_id: PlayerId) -> Self {
        Self {
            width,
            height,
            my_id,
            players: Vec::new(),
            planets: Vec::new(),
            ships: Vec::new(),
        }
    }

    pub fn all_ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn my_ships(&self) -> impl Iterator<Item = &Ship> {
        let me = self.my_id;
        self.ships.iter().filter(move |ship| ship.owner == me)
    }

    pub fn ship(&self, id: EntityId) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.id == id)
    }

    pub fn planet(&self, id: EntityId) -> Option<&Planet> {
        self.planets.iter().find(|planet| planet.id == id)
    }

    pub fn contains(&self, position: &Position) -> bool {
        position.x >= 0.0 && position.y >= 0.0 && position.x <= self.width && position.y <= self.height
    }

    /// Enemy ships whose centre lies within `planet.radius + radius` of the
    /// planet centre, nearest first. Ties on distance break on ship id.
    pub fn hostiles_near_planet(&self, planet: &Planet, radius: f64) -> Vec<(f64, &Ship)> {
        let reach = planet.radius + radius;
        let mut hostiles: Vec<(f64, &Ship)> = self
            .ships
            .iter()
            .filter(|ship| ship.owner != self.my_id)
            .map(|ship| (ship.position.distance_to(&planet.position), ship))
            .filter(|(distance, _)| *distance <= reach)
            .collect();

        hostiles.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.id.cmp(&b.1.id)));
        hostiles
    }

    /// Like `hostiles_near_planet`, restricted to ships that are free to fight
    pub fn undocked_hostiles_near_planet(&self, planet: &Planet, radius: f64) -> Vec<(f64, &Ship)> {
        self.hostiles_near_planet(planet, radius)
            .into_iter()
            .filter(|(_, ship)| ship.is_undocked())
            .collect()
    }

    /// Entities whose footprint the straight path `start -> target` would
    /// clip, widened by `fudge`. Entities listed in `ignore` are skipped.
    pub fn obstacles_between(&self, start: &Position, target: &Position, fudge: f64, ship_radius: f64, ignore: &[EntityRef]) -> Vec<EntityRef> {
        let mut obstacles = Vec::new();

        for planet in &self.planets {
            let entity = EntityRef::Planet(planet.id);
            if ignore.contains(&entity) {
                continue;
            }
            if super::segment_circle_intersect(start, target, &planet.position, planet.radius, fudge) {
                obstacles.push(entity);
            }
        }

        for ship in &self.ships {
            let entity = EntityRef::Ship(ship.id);
            if ignore.contains(&entity) {
                continue;
            }
            if super::segment_circle_intersect(start, target, &ship.position, ship_radius, fudge) {
                obstacles.push(entity);
            }
        }

        obstacles
    }
}
