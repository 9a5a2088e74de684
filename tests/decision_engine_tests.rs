use halite_admiral::models::{EntityId, GameMap, Move, Planet, PlayerId, Position, Ship, DockingStatus};
use halite_admiral::operations::{
    CombatMicroSelector, MicroOutcome, Navigator, ShipState, ThreatTable, TurnOrchestrator,
};
use halite_admiral::BotConfig;
use std::cell::RefCell;
use std::collections::HashSet;

/// Navigator with scripted answers that records every request
#[derive(Default)]
struct ScriptedNavigator {
    unreachable_planets: HashSet<EntityId>,
    unreachable_hostiles: HashSet<EntityId>,
    travel_requests: RefCell<Vec<EntityId>>,
    intercept_requests: RefCell<Vec<EntityId>>,
}

impl ScriptedNavigator {
    fn blocking_all_planets(map: &GameMap) -> Self {
        Self {
            unreachable_planets: map.planets.iter().map(|p| p.id).collect(),
            ..Self::default()
        }
    }
}

impl Navigator for ScriptedNavigator {
    fn travel_to(&self, _map: &GameMap, ship: &Ship, planet: &Planet, max_speed: i32) -> Option<Move> {
        self.travel_requests.borrow_mut().push(planet.id);
        if self.unreachable_planets.contains(&planet.id) {
            return None;
        }
        Some(Move::Thrust { ship: ship.id, magnitude: max_speed, angle: planet.id })
    }

    fn intercept_near(&self, _map: &GameMap, ship: &Ship, hostile: &Ship, _planet: &Planet, max_speed: i32) -> Option<Move> {
        self.intercept_requests.borrow_mut().push(hostile.id);
        if self.unreachable_hostiles.contains(&hostile.id) {
            return None;
        }
        Some(Move::Thrust { ship: ship.id, magnitude: max_speed, angle: 100 + hostile.id })
    }

    fn dock_travel(&self, _map: &GameMap, ship: &Ship, planet: &Planet, max_speed: i32) -> Option<Move> {
        Some(Move::Thrust { ship: ship.id, magnitude: max_speed, angle: planet.id })
    }
}

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

fn planet(id: EntityId, x: f64, y: f64, spots: i32, owner: Option<PlayerId>, docked: Vec<EntityId>) -> Planet {
    Planet {
        id,
        position: Position::new(x, y),
        health: 1000,
        radius: 5.0,
        docking_spots: spots,
        current_production: 0,
        remaining_production: 1000,
        owner,
        docked_ships: docked,
    }
}

fn map_with(planets: Vec<Planet>, ships: Vec<Ship>) -> GameMap {
    let mut map = GameMap::empty(300.0, 200.0, 0);
    map.planets = planets;
    map.ships = ships;
    map
}

#[test]
fn docks_at_free_planet_in_range_without_long_range_search() {
    // capacity 3 with one of our ships already docked, no enemies around
    let map = map_with(
        vec![planet(0, 50.0, 50.0, 3, Some(0), vec![2]), planet(1, 200.0, 50.0, 2, None, vec![])],
        vec![
            ship(1, 0, 50.0, 58.0, DockingStatus::Undocked),
            ship(2, 0, 50.0, 44.0, DockingStatus::Docked),
        ],
    );
    let config = BotConfig::default();
    let navigator = ScriptedNavigator::default();
    let plan = TurnOrchestrator::new(&config, &navigator).plan_turn(&map);

    let decision = plan.decision_for(1).unwrap();
    assert_eq!(decision.state, ShipState::LocalActionTaken);
    assert_eq!(decision.command, Some(Move::Dock { ship: 1, planet: 0 }));
    assert!(navigator.travel_requests.borrow().is_empty());

    assert_eq!(plan.decision_for(2).unwrap().state, ShipState::Skipped);
    assert_eq!(plan.moves(), vec![Move::Dock { ship: 1, planet: 0 }]);
}

#[test]
fn hostile_in_weapon_range_is_fought_without_a_command() {
    let map = map_with(
        vec![planet(0, 50.0, 50.0, 3, None, vec![])],
        vec![
            ship(1, 0, 50.0, 58.0, DockingStatus::Undocked),
            ship(7, 1, 53.0, 60.0, DockingStatus::Undocked),
        ],
    );
    let config = BotConfig::default();
    let navigator = ScriptedNavigator::default();
    let plan = TurnOrchestrator::new(&config, &navigator).plan_turn(&map);

    let decision = plan.decision_for(1).unwrap();
    assert_eq!(decision.state, ShipState::LocalActionTaken);
    assert_eq!(decision.command, None);
    assert!(plan.moves().is_empty());
    assert!(navigator.travel_requests.borrow().is_empty());
    assert!(navigator.intercept_requests.borrow().is_empty());
}

#[test]
fn no_reachable_planet_leaves_ship_idle() {
    let map = map_with(
        vec![
            planet(0, 100.0, 100.0, 2, None, vec![]),
            planet(1, 200.0, 100.0, 3, None, vec![]),
            planet(2, 250.0, 30.0, 4, Some(1), vec![9]),
        ],
        vec![
            ship(1, 0, 20.0, 20.0, DockingStatus::Undocked),
            ship(9, 1, 250.0, 36.0, DockingStatus::Docked),
        ],
    );
    let config = BotConfig::default();
    let navigator = ScriptedNavigator::blocking_all_planets(&map);
    let plan = TurnOrchestrator::new(&config, &navigator).plan_turn(&map);

    let decision = plan.decision_for(1).unwrap();
    assert_eq!(decision.state, ShipState::Idle);
    assert_eq!(decision.command, None);
    assert!(plan.moves().is_empty());
    // every planet was tried once before giving up
    let mut tried = navigator.travel_requests.borrow().clone();
    tried.sort();
    assert_eq!(tried, vec![0, 1, 2]);
}

#[test]
fn travel_falls_back_to_next_cheapest_planet() {
    let map = map_with(
        vec![
            planet(0, 150.0, 20.0, 2, None, vec![]),
            planet(1, 40.0, 20.0, 2, None, vec![]),
            planet(2, 80.0, 20.0, 2, None, vec![]),
        ],
        vec![ship(1, 0, 20.0, 20.0, DockingStatus::Undocked)],
    );
    let config = BotConfig::default();
    let navigator = ScriptedNavigator {
        unreachable_planets: [1].into_iter().collect(),
        ..ScriptedNavigator::default()
    };
    let plan = TurnOrchestrator::new(&config, &navigator).plan_turn(&map);

    let decision = plan.decision_for(1).unwrap();
    assert_eq!(decision.state, ShipState::TravelAssigned);
    assert_eq!(decision.planet_id, Some(2));
    // nearest first, then the next cheapest
    assert_eq!(*navigator.travel_requests.borrow(), vec![1, 2]);
}

#[test]
fn intercept_tries_hostiles_nearest_first() {
    let map = map_with(
        vec![planet(0, 50.0, 50.0, 3, None, vec![])],
        vec![
            ship(1, 0, 50.0, 58.0, DockingStatus::Undocked),
            ship(7, 1, 60.0, 64.0, DockingStatus::Undocked),
            ship(8, 1, 35.0, 50.0, DockingStatus::Docked),
        ],
    );
    let config = BotConfig::default();
    let navigator = ScriptedNavigator {
        unreachable_hostiles: [7].into_iter().collect(),
        ..ScriptedNavigator::default()
    };
    let threats = ThreatTable::build(&map, config.engine.near_planet_radius);
    let selector = CombatMicroSelector::new(&navigator, &config.engine);

    let outcome = selector.select(&map, &map.ships[0], &map.planets[0], threats.record(0));
    assert_eq!(outcome, MicroOutcome::Intercept(Move::Thrust { ship: 1, magnitude: 7, angle: 108 }));
    assert_eq!(*navigator.intercept_requests.borrow(), vec![7, 8]);
}

#[test]
fn unreachable_hostiles_let_the_scan_continue() {
    // planet 0 has an enemy we cannot reach, planet 1 next to it is free
    let map = map_with(
        vec![planet(0, 50.0, 50.0, 3, None, vec![]), planet(1, 50.0, 68.0, 2, None, vec![])],
        vec![
            ship(1, 0, 50.0, 59.0, DockingStatus::Undocked),
            ship(7, 1, 42.0, 42.0, DockingStatus::Undocked),
        ],
    );
    let config = BotConfig {
        engine: halite_admiral::config::EngineConstants { near_planet_radius: 9.0, ..Default::default() },
        ..BotConfig::default()
    };
    let navigator = ScriptedNavigator {
        unreachable_hostiles: [7].into_iter().collect(),
        ..ScriptedNavigator::default()
    };
    let plan = TurnOrchestrator::new(&config, &navigator).plan_turn(&map);

    let decision = plan.decision_for(1).unwrap();
    assert_eq!(decision.state, ShipState::LocalActionTaken);
    assert_eq!(decision.command, Some(Move::Dock { ship: 1, planet: 1 }));
}

#[test]
fn full_planet_in_range_is_passed_over() {
    let map = map_with(
        vec![planet(0, 50.0, 50.0, 1, Some(0), vec![2]), planet(1, 120.0, 50.0, 2, None, vec![])],
        vec![
            ship(1, 0, 50.0, 58.0, DockingStatus::Undocked),
            ship(2, 0, 50.0, 44.0, DockingStatus::Docked),
        ],
    );
    let config = BotConfig::default();
    let navigator = ScriptedNavigator::default();
    let plan = TurnOrchestrator::new(&config, &navigator).plan_turn(&map);

    let decision = plan.decision_for(1).unwrap();
    assert_eq!(decision.state, ShipState::TravelAssigned);
}

#[test]
fn planning_is_deterministic() {
    let map = map_with(
        vec![
            planet(0, 60.0, 60.0, 3, None, vec![]),
            planet(1, 160.0, 90.0, 2, Some(1), vec![20]),
            planet(2, 240.0, 150.0, 5, None, vec![]),
        ],
        vec![
            ship(1, 0, 10.0, 10.0, DockingStatus::Undocked),
            ship(2, 0, 14.0, 12.0, DockingStatus::Undocked),
            ship(3, 0, 62.0, 69.0, DockingStatus::Undocked),
            ship(20, 1, 160.0, 96.0, DockingStatus::Docked),
            ship(21, 1, 150.0, 90.0, DockingStatus::Undocked),
        ],
    );
    let config = BotConfig::default();
    let navigator = ScriptedNavigator::default();
    let orchestrator = TurnOrchestrator::new(&config, &navigator);

    assert_eq!(orchestrator.plan_turn(&map), orchestrator.plan_turn(&map));
}
