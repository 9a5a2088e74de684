// Scalar desirability of a planet for one ship; lower is better
use crate::config::{EngineConstants, ProgressCurve, StrategyConfig};
use crate::models::{Planet, PlayerId, Ship};
use crate::operations::dock_saturation;
use crate::operations::threat_table::ThreatRecord;

/// Game progress scalar for this turn, a logistic function of the number of
/// ships in play. Grows from roughly `offset` towards `offset + amplitude`.
pub fn game_progress(total_ships: usize, curve: &ProgressCurve) -> f64 {
    let exponent = -curve.steepness * (total_ships as f64 - curve.midpoint_ships);
    curve.offset + curve.amplitude / (1.0 + exponent.exp())
}

pub struct TargetCostModel<'a> {
    engine: &'a EngineConstants,
    strategy: &'a StrategyConfig,
    my_id: PlayerId,
}

impl<'a> TargetCostModel<'a> {
    pub fn new(engine: &'a EngineConstants, strategy: &'a StrategyConfig, my_id: PlayerId) -> Self {
        Self { engine, strategy, my_id }
    }

    pub fn cost(&self, ship: &Ship, planet: &Planet, threat: &ThreatRecord, game_progress: f64) -> f64 {
        let distance = planet.surface_distance(&ship.position).max(0.0);
        let travel_turns = distance / self.engine.max_speed as f64;

        let mut cost = if planet.is_owned_by(self.my_id) && self.still_filling(planet, travel_turns) {
            if threat.has_hostiles() {
                distance * self.strategy.defend_weight / (threat.hostile_count() as f64).sqrt()
            } else {
                distance * self.strategy.colonize_weight
            }
        } else {
            distance
                * (threat.undocked_count() as f64 * self.strategy.undocked_hostile_weight
                    + threat.docked_count() as f64 * self.strategy.docked_hostile_weight
                    + self.strategy.contested_base_weight)
        };

        cost *= (game_progress + planet.docking_spots as f64).sqrt();
        cost
    }

    /// Our planet will not have every slot taken by the time this ship arrives
    fn still_filling(&self, planet: &Planet, travel_turns: f64) -> bool {
        dock_saturation::estimate(planet, self.engine).turns() as f64 > travel_turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BotConfig;
    use crate::models::{DockingStatus, EntityId, Position};
    use crate::operations::threat_table::HostileContact;

    fn ship(id: EntityId, owner: PlayerId, x: f64, y: f64, status: DockingStatus) -> Ship {
        Ship {
            id,
            owner,
            position: Position::new(x, y),
            health: 255,
            docking_status: status,
            docked_planet: None,
            docking_progress: 0,
            weapon_cooldown: 0,
        }
    }

    fn planet(owner: Option<PlayerId>, docked: i32, spots: i32) -> Planet {
        Planet {
            id: 1,
            position: Position::new(30.0, 0.0),
            health: 1000,
            radius: 5.0,
            docking_spots: spots,
            current_production: 0,
            remaining_production: 1000,
            owner,
            docked_ships: (100..100 + docked).collect(),
        }
    }

    fn record<'a>(hostiles: &'a [Ship]) -> ThreatRecord<'a> {
        let contacts: Vec<HostileContact<'a>> = hostiles
            .iter()
            .map(|ship| HostileContact { distance: 10.0, ship })
            .collect();
        let undocked = contacts.iter().filter(|c| c.ship.is_undocked()).cloned().collect();
        ThreatRecord { hostiles: contacts, undocked_hostiles: undocked }
    }

    fn enemies(undocked: usize, docked: usize) -> Vec<Ship> {
        let mut ships = Vec::new();
        for i in 0..undocked {
            ships.push(ship(200 + i as EntityId, 1, 30.0, 12.0, DockingStatus::Undocked));
        }
        for i in 0..docked {
            ships.push(ship(300 + i as EntityId, 1, 30.0, 6.0, DockingStatus::Docked));
        }
        ships
    }

    #[test]
    fn progress_rises_with_ship_count() {
        let curve = BotConfig::default().strategy.progress;
        let early = game_progress(6, &curve);
        let middle = game_progress(100, &curve);
        let late = game_progress(400, &curve);
        assert!(early < middle && middle < late);
        assert!((middle - 2.3).abs() < 1e-9);
        assert!(late < curve.offset + curve.amplitude + 1e-9);
    }

    #[test]
    fn threatened_filling_planet_gets_cheaper_as_threat_grows() {
        let config = BotConfig::default();
        let model = TargetCostModel::new(&config.engine, &config.strategy, 0);
        let me = ship(1, 0, 0.0, 0.0, DockingStatus::Undocked);
        // 1 of 3 slots docked with no production: saturation is far slower than the 4-turn trip
        let target = planet(Some(0), 1, 3);

        let one = enemies(1, 0);
        let three = enemies(3, 0);
        let cost_one = model.cost(&me, &target, &record(&one), 1.0);
        let cost_three = model.cost(&me, &target, &record(&three), 1.0);
        assert!(cost_three < cost_one);

        let expected = 25.0 * 100.0 / 3f64.sqrt() * (1.0f64 + 3.0).sqrt();
        assert!((cost_three - expected).abs() < 1e-9);
    }

    #[test]
    fn unthreatened_filling_planet_uses_colonize_weight() {
        let config = BotConfig::default();
        let model = TargetCostModel::new(&config.engine, &config.strategy, 0);
        let me = ship(1, 0, 0.0, 0.0, DockingStatus::Undocked);
        let cost = model.cost(&me, &planet(Some(0), 1, 3), &ThreatRecord::default(), 1.0);
        assert!((cost - 25.0 * 60.0 * 2.0).abs() < 1e-9);
    }

    #[test]
    fn fewer_docked_defenders_make_capture_cheaper() {
        let config = BotConfig::default();
        let model = TargetCostModel::new(&config.engine, &config.strategy, 0);
        let me = ship(1, 0, 0.0, 0.0, DockingStatus::Undocked);
        let target = planet(None, 0, 3);

        let light = enemies(1, 1);
        let heavy = enemies(1, 3);
        let light_cost = model.cost(&me, &target, &record(&light), 2.0);
        let heavy_cost = model.cost(&me, &target, &record(&heavy), 2.0);
        assert!(light_cost < heavy_cost);
    }

    #[test]
    fn saturated_own_planet_is_costed_as_contested() {
        let config = BotConfig::default();
        let model = TargetCostModel::new(&config.engine, &config.strategy, 0);
        let me = ship(1, 0, 0.0, 0.0, DockingStatus::Undocked);
        let cost = model.cost(&me, &planet(Some(0), 3, 3), &ThreatRecord::default(), 1.0);
        assert!((cost - 25.0 * 0.4 * 2.0).abs() < 1e-9);
    }

    #[test]
    fn larger_planets_cost_more_at_equal_distance() {
        let config = BotConfig::default();
        let model = TargetCostModel::new(&config.engine, &config.strategy, 0);
        let me = ship(1, 0, 0.0, 0.0, DockingStatus::Undocked);
        let small = model.cost(&me, &planet(None, 0, 2), &ThreatRecord::default(), 1.0);
        let large = model.cost(&me, &planet(None, 0, 6), &ThreatRecord::default(), 1.0);
        assert!(small < large);
    }
}
