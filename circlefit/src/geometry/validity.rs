use crate::entities::PlacedCircle;

/// Slack absorbing floating point and scan discretization error in [`is_valid_position`]
pub const DEFAULT_OVERLAP_TOLERANCE: f64 = 0.1;

/// Checks whether a circle with `radius` centered at `(x, y)` keeps at least `gap`
/// clearance (minus `tolerance`) from every circle in `placed`.
///
/// Containment within the sheet is the responsibility of the caller.
pub fn is_valid_position(
    x: f64,
    y: f64,
    radius: f64,
    placed: &[PlacedCircle],
    gap: f64,
    tolerance: f64,
) -> bool {
    placed
        .iter()
        .all(|other| clearance_violation(x, y, radius, other, gap, tolerance).is_none())
}

/// If a circle with `radius` at `(x, y)` comes too close to `other`, returns the minimum
/// distance required between both centers.
#[inline(always)]
pub fn clearance_violation(
    x: f64,
    y: f64,
    radius: f64,
    other: &PlacedCircle,
    gap: f64,
    tolerance: f64,
) -> Option<f64> {
    let (dx, dy) = (x - other.x, y - other.y);
    let min_distance = radius + other.radius() + gap - tolerance;
    //compare squared distances, no need for the root
    match min_distance > 0.0 && dx * dx + dy * dy < min_distance * min_distance {
        true => Some(min_distance),
        false => None,
    }
}
