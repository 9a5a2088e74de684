// Per-planet tabulation of enemy ships, rebuilt once per turn
use crate::models::{EntityId, GameMap, Ship};
use std::collections::HashMap;

/// An enemy ship near a planet, with its distance to the planet centre
#[derive(Debug, Clone, PartialEq)]
pub struct HostileContact<'a> {
    pub distance: f64,
    pub ship: &'a Ship,
}

/// Enemy presence around one planet, nearest contact first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreatRecord<'a> {
    pub hostiles: Vec<HostileContact<'a>>,
    pub undocked_hostiles: Vec<HostileContact<'a>>,
}

static NO_THREAT: ThreatRecord<'static> = ThreatRecord {
    hostiles: Vec::new(),
    undocked_hostiles: Vec::new(),
};

impl<'a> ThreatRecord<'a> {
    pub fn has_hostiles(&self) -> bool {
        !self.hostiles.is_empty()
    }

    pub fn hostile_count(&self) -> usize {
        self.hostiles.len()
    }

    pub fn undocked_count(&self) -> usize {
        self.undocked_hostiles.len()
    }

    /// Enemies that are docked, docking or undocking
    pub fn docked_count(&self) -> usize {
        self.hostiles.len() - self.undocked_hostiles.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThreatTable<'a> {
    records: HashMap<EntityId, ThreatRecord<'a>>,
}

impl<'a> ThreatTable<'a> {
    pub fn build(map: &'a GameMap, near_planet_radius: f64) -> Self {
        let mut records = HashMap::with_capacity(map.planets.len());

        for planet in &map.planets {
            let hostiles: Vec<HostileContact<'a>> = map
                .hostiles_near_planet(planet, near_planet_radius)
                .into_iter()
                .map(|(distance, ship)| HostileContact { distance, ship })
                .collect();
            let undocked_hostiles = hostiles
                .iter()
                .filter(|contact| contact.ship.is_undocked())
                .cloned()
                .collect();

            records.insert(planet.id, ThreatRecord { hostiles, undocked_hostiles });
        }

        Self { records }
    }

    /// Threat around `planet_id`; planets missing from the snapshot have none
    pub fn record(&self, planet_id: EntityId) -> &ThreatRecord<'a> {
        self.records.get(&planet_id).unwrap_or(&NO_THREAT)
    }

    /// Planets with at least one enemy nearby
    pub fn contested_planets(&self) -> usize {
        self.records.values().filter(|record| record.has_hostiles()).count()
    }
}
