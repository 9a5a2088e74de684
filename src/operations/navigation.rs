// Navigation Module
// Turns a destination into a single thrust command that avoids obstacles

use crate::config::EngineConstants;
use crate::models::*;

/// Margin kept outside a planet surface when approaching it
pub const MIN_DISTANCE_FOR_CLOSEST_POINT: f64 = 3.0;

/// Extra clearance added to every obstacle footprint on the projected path
pub const FORECAST_FUDGE: f64 = 0.1;

/// Produces movement commands. `None` means no safe path could be found this
/// turn and the caller should try its next candidate.
pub trait Navigator {
    /// Long-range travel to a spot from which the ship can dock at `planet`
    fn travel_to(&self, map: &GameMap, ship: &Ship, planet: &Planet, max_speed: i32) -> Option<Move>;

    /// Close in on `hostile`, which is threatening `planet`, until within firing range
    fn intercept_near(&self, map: &GameMap, ship: &Ship, hostile: &Ship, planet: &Planet, max_speed: i32) -> Option<Move>;

    /// Short approach to the closest point just outside `planet`
    fn dock_travel(&self, map: &GameMap, ship: &Ship, planet: &Planet, max_speed: i32) -> Option<Move>;
}

/// Straight-line navigation with angular corrections around obstacles
pub struct NavigationPlanner {
    engine: EngineConstants,
}

impl NavigationPlanner {
    pub fn new(engine: EngineConstants) -> Self {
        Self { engine }
    }

    /// Aim at `target`; when the straight path is blocked, rotate the heading
    /// one step at a time, alternating sides, up to the configured number of
    /// corrections. Zero-length thrusts are not commands.
    pub fn navigate_towards(&self, map: &GameMap, ship: &Ship, target: &Position, max_thrust: i32, ignore: &[EntityRef]) -> Option<Move> {
        let distance = ship.position.distance_to(target);
        let base_angle = ship.position.angle_to(target);
        let step = self.engine.navigation_step_degrees.to_radians();
        let fudge = self.engine.ship_radius + FORECAST_FUDGE;

        let mut ignored = Vec::with_capacity(ignore.len() + 1);
        ignored.push(EntityRef::Ship(ship.id));
        ignored.extend_from_slice(ignore);

        for correction in 0..=self.engine.max_navigation_corrections {
            let offset = correction.div_ceil(2) as f64 * step;
            let angle = if correction % 2 == 1 { base_angle + offset } else { base_angle - offset };
            let waypoint = ship.position.offset(angle, distance);

            if !map.contains(&waypoint) {
                continue;
            }
            if !map.obstacles_between(&ship.position, &waypoint, fudge, self.engine.ship_radius, &ignored).is_empty() {
                continue;
            }

            let magnitude = if distance < max_thrust as f64 { distance as i32 } else { max_thrust };
            if magnitude <= 0 {
                return None;
            }
            return Some(Move::Thrust {
                ship: ship.id,
                magnitude,
                angle: angle_rad_to_deg_clipped(angle),
            });
        }

        None
    }
}

impl Navigator for NavigationPlanner {
    fn travel_to(&self, map: &GameMap, ship: &Ship, planet: &Planet, max_speed: i32) -> Option<Move> {
        // Stop on the docking ring so the next turn can dock immediately
        let target = ship.position.closest_point_to(&planet.position, planet.radius, self.engine.dock_radius);
        self.navigate_towards(map, ship, &target, max_speed, &[])
    }

    fn intercept_near(&self, map: &GameMap, ship: &Ship, hostile: &Ship, planet: &Planet, max_speed: i32) -> Option<Move> {
        let target = ship.position.closest_point_to(&hostile.position, self.engine.ship_radius, self.engine.weapon_radius / 2.0);

        // Do not get dragged away from the planet being defended
        let leash = planet.radius + self.engine.near_planet_radius + self.engine.weapon_radius;
        if target.distance_to(&planet.position) > leash {
            return None;
        }

        self.navigate_towards(map, ship, &target, max_speed, &[EntityRef::Ship(hostile.id)])
    }

    fn dock_travel(&self, map: &GameMap, ship: &Ship, planet: &Planet, max_speed: i32) -> Option<Move> {
        let target = ship.position.closest_point_to(&planet.position, planet.radius, MIN_DISTANCE_FOR_CLOSEST_POINT);
        self.navigate_towards(map, ship, &target, max_speed, &[])
    }
}
