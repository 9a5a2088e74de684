// Per-turn driver: one independent decision for every ship we control
use crate::config::BotConfig;
use crate::models::{EntityId, GameMap, Move, Planet, Ship};
use crate::operations::combat_micro::{CombatMicroSelector, MicroOutcome};
use crate::operations::navigation::Navigator;
use crate::operations::target_cost::{game_progress, TargetCostModel};
use crate::operations::target_priority::TargetQueue;
use crate::operations::threat_table::ThreatTable;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipState {
    /// Docked, docking or undocking; no decision is made
    Skipped,
    /// No command this turn
    Idle,
    /// Fighting or docking at a planet within docking range
    LocalActionTaken,
    /// Heading to the cheapest reachable planet
    TravelAssigned,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShipDecision {
    pub ship_id: EntityId,
    pub state: ShipState,
    pub command: Option<Move>,
    /// Planet the decision was about, if any
    pub planet_id: Option<EntityId>,
}

impl ShipDecision {
    fn new(ship_id: EntityId, state: ShipState) -> Self {
        Self { ship_id, state, command: None, planet_id: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnPlan {
    pub game_progress: f64,
    pub decisions: Vec<ShipDecision>,
}

impl TurnPlan {
    /// Commands to submit, in ship order
    pub fn moves(&self) -> Vec<Move> {
        self.decisions.iter().filter_map(|decision| decision.command).collect()
    }

    pub fn count(&self, state: ShipState) -> usize {
        self.decisions.iter().filter(|decision| decision.state == state).count()
    }

    pub fn decision_for(&self, ship_id: EntityId) -> Option<&ShipDecision> {
        self.decisions.iter().find(|decision| decision.ship_id == ship_id)
    }
}

pub struct TurnOrchestrator<'a, N: Navigator> {
    config: &'a BotConfig,
    navigator: &'a N,
}

impl<'a, N: Navigator> TurnOrchestrator<'a, N> {
    pub fn new(config: &'a BotConfig, navigator: &'a N) -> Self {
        Self { config, navigator }
    }

    /// Decide every ship we own. Shared per-turn data (threats and game
    /// progress) is computed once up front and only read afterwards.
    pub fn plan_turn(&self, map: &GameMap) -> TurnPlan {
        let threats = ThreatTable::build(map, self.config.engine.near_planet_radius);
        let progress = game_progress(map.all_ships().len(), &self.config.strategy.progress);
        debug!("🎯 game progress {:.3}, {} contested planets", progress, threats.contested_planets());

        let decisions = map
            .my_ships()
            .map(|ship| self.decide_ship(map, &threats, ship, progress))
            .collect();

        TurnPlan { game_progress: progress, decisions }
    }

    pub fn decide_ship(&self, map: &GameMap, threats: &ThreatTable, ship: &Ship, progress: f64) -> ShipDecision {
        if !ship.is_undocked() {
            return ShipDecision::new(ship.id, ShipState::Skipped);
        }

        if let Some(decision) = self.local_action(map, threats, ship) {
            return decision;
        }

        self.long_range_travel(map, threats, ship, progress)
    }

    /// Scan planets in snapshot order; the first one within docking range
    /// that offers a fight or a free slot wins.
    fn local_action(&self, map: &GameMap, threats: &ThreatTable, ship: &Ship) -> Option<ShipDecision> {
        let engine = &self.config.engine;
        let micro = CombatMicroSelector::new(self.navigator, engine);

        for planet in &map.planets {
            if !ship.within_docking_range(planet, engine.ship_radius, engine.dock_radius) {
                continue;
            }

            let threat = threats.record(planet.id);
            if threat.has_hostiles() {
                match micro.select(map, ship, planet, threat) {
                    MicroOutcome::Engaged => {
                        debug!("⚔️ ship {} holding to fight near planet {}", ship.id, planet.id);
                        return Some(local(ship, planet, None));
                    }
                    MicroOutcome::Intercept(command) => {
                        debug!("⚔️ ship {} intercepting near planet {}", ship.id, planet.id);
                        return Some(local(ship, planet, Some(command)));
                    }
                    MicroOutcome::NoAction => continue,
                }
            } else if !planet.is_full() {
                debug!("🛬 ship {} docking at planet {}", ship.id, planet.id);
                let command = Move::Dock { ship: ship.id, planet: planet.id };
                return Some(local(ship, planet, Some(command)));
            }
        }

        None
    }

    fn long_range_travel(&self, map: &GameMap, threats: &ThreatTable, ship: &Ship, progress: f64) -> ShipDecision {
        let engine = &self.config.engine;
        let model = TargetCostModel::new(engine, &self.config.strategy, map.my_id);

        let mut queue: TargetQueue<&Planet> = map
            .planets
            .iter()
            .map(|planet| (planet, model.cost(ship, planet, threats.record(planet.id), progress)))
            .collect();

        while let Some(candidate) = queue.pop() {
            let planet = candidate.target;
            if let Some(command) = self.navigator.travel_to(map, ship, planet, engine.max_speed) {
                debug!("🧭 ship {} → planet {} (cost {:.2})", ship.id, planet.id, candidate.priority);
                return ShipDecision {
                    ship_id: ship.id,
                    state: ShipState::TravelAssigned,
                    command: Some(command),
                    planet_id: Some(planet.id),
                };
            }
        }

        trace!("ship {} found no reachable planet this turn", ship.id);
        ShipDecision::new(ship.id, ShipState::Idle)
    }
}

fn local(ship: &Ship, planet: &Planet, command: Option<Move>) -> ShipDecision {
    ShipDecision {
        ship_id: ship.id,
        state: ShipState::LocalActionTaken,
        command,
        planet_id: Some(planet.id),
    }
}
