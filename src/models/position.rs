use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Heading from `self` towards `target` in radians
    pub fn angle_to(&self, target: &Position) -> f64 {
        (target.y - self.y).atan2(target.x - self.x)
    }

    /// Point on the ring of radius `target_radius + min_distance` around
    /// `target`, on the side facing `self`.
    pub fn closest_point_to(&self, target: &Position, target_radius: f64, min_distance: f64) -> Position {
        let radius = target_radius + min_distance;
        let angle = target.angle_to(self);
        Position {
            x: target.x + radius * angle.cos(),
            y: target.y + radius * angle.sin(),
        }
    }

    /// Position reached after travelling `distance` along `angle` (radians)
    pub fn offset(&self, angle: f64, distance: f64) -> Position {
        Position {
            x: self.x + distance * angle.cos(),
            y: self.y + distance * angle.sin(),
        }
    }
}

/// Convert a heading in radians to whole degrees in `[0, 360)`, the unit the
/// server expects in thrust commands.
pub fn angle_rad_to_deg_clipped(angle_rad: f64) -> i32 {
    let unclipped = angle_rad.to_degrees().round() as i64;
    (((unclipped % 360) + 360) % 360) as i32
}

/// Whether the segment `start -> end` passes within `radius + fudge` of `center`
pub fn segment_circle_intersect(start: &Position, end: &Position, center: &Position, radius: f64, fudge: f64) -> bool {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let a = dx * dx + dy * dy;
    if a == 0.0 {
        return start.distance_to(center) <= radius + fudge;
    }

    let b = -2.0
        * (start.x * start.x - start.x * end.x - start.x * center.x + end.x * center.x
            + start.y * start.y - start.y * end.y - start.y * center.y + end.y * center.y);

    let t = (-b / (2.0 * a)).min(1.0);
    if t < 0.0 {
        return false;
    }

    let closest = Position::new(start.x + dx * t, start.y + dy * t);
    closest.distance_to(center) <= radius + fudge
}
