// Local combat around a planet the ship is already next to
use crate::config::EngineConstants;
use crate::models::{GameMap, Move, Planet, Ship};
use crate::operations::navigation::Navigator;
use crate::operations::target_priority::TargetQueue;
use crate::operations::threat_table::ThreatRecord;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicroOutcome {
    /// The nearest hostile is already inside weapon range; holding position fights it
    Engaged,
    /// Move towards a hostile
    Intercept(Move),
    /// Navigation could not reach any hostile
    NoAction,
}

pub struct CombatMicroSelector<'a, N: Navigator> {
    navigator: &'a N,
    engine: &'a EngineConstants,
}

impl<'a, N: Navigator> CombatMicroSelector<'a, N> {
    pub fn new(navigator: &'a N, engine: &'a EngineConstants) -> Self {
        Self { navigator, engine }
    }

    pub fn select(&self, map: &GameMap, ship: &Ship, planet: &Planet, threat: &ThreatRecord) -> MicroOutcome {
        let mut queue: TargetQueue<&Ship> = threat
            .hostiles
            .iter()
            .map(|contact| (contact.ship, ship.distance_to(contact.ship)))
            .collect();

        while let Some(candidate) = queue.pop() {
            if candidate.priority < self.engine.weapon_radius {
                return MicroOutcome::Engaged;
            }

            if let Some(command) = self.navigator.intercept_near(map, ship, candidate.target, planet, self.engine.max_speed) {
                return MicroOutcome::Intercept(command);
            }
            trace!("ship {} cannot reach hostile {} near planet {}", ship.id, candidate.target.id, planet.id);
        }

        MicroOutcome::NoAction
    }
}
