// Estimates how long a planet needs until every docking slot is taken
use crate::config::EngineConstants;
use crate::models::Planet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saturation {
    /// Nothing docked, the planet is not filling up
    Empty,
    /// Every slot is already occupied
    Full,
    /// Slots will be filled after this many turns
    Filling(i32),
}

impl Saturation {
    /// Integer form used by the cost model: -1 for empty, 0 for full
    pub fn turns(&self) -> i32 {
        match self {
            Saturation::Empty => -1,
            Saturation::Full => 0,
            Saturation::Filling(turns) => *turns,
        }
    }
}

/// Simulate production forward, one spawned ship at a time, assuming every
/// spawned ship docks straight back onto the planet.
pub fn estimate(planet: &Planet, engine: &EngineConstants) -> Saturation {
    let spots = planet.docking_spots as i64;
    let mut ships = planet.docked_count() as i64;

    if ships <= 0 {
        return Saturation::Empty;
    }
    if ships >= spots {
        return Saturation::Full;
    }

    let ship_cost = engine.ship_cost as i64;
    let base = engine.base_productivity as f64;
    let mut production = planet.current_production as i64;
    let mut turns: i64 = 0;

    // Freshly docked ships produce nothing until docking completes
    if production == 0 {
        match ships {
            1 => turns += 2,
            2 => turns += 1,
            _ => {}
        }
    }

    while ships < spots {
        let remaining = (ship_cost - production).max(0) as f64;
        let new_turns = match ships {
            1 => (remaining / base).ceil() as i64,
            2 => ((remaining / (1.5 * base)).ceil() as i64).max(1),
            _ => ((remaining / ((ships - 1) as f64 * base)).ceil() as i64).max(1),
        };
        turns += new_turns;
        production = (production + turns * engine.base_productivity as i64 - ship_cost).max(0);
        ships += 1;
    }

    Saturation::Filling(turns.min(i32::MAX as i64) as i32)
}
