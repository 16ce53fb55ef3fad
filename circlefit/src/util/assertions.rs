use crate::entities::{MaxCirclesResult, PlacedCircle, Sheet};
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the results of the engine
//Used in debug_assert!() blocks and tests

/// No two circles are closer than `gap - tolerance` to each other
pub fn circles_respect_gap(circles: &[PlacedCircle], gap: f64, tolerance: f64) -> bool {
    circles.iter().tuple_combinations().all(|(a, b)| {
        let distance = a.center().distance(&b.center());
        let required = a.radius() + b.radius() + gap - tolerance;
        let valid = distance >= required || approx_eq!(f64, distance, required, epsilon = 1e-9);
        if !valid {
            error!(
                "circles at ({:.3}, {:.3}) and ({:.3}, {:.3}) are {distance:.3} apart, {required:.3} required",
                a.x, a.y, b.x, b.y
            );
        }
        valid
    })
}

/// Every circle lies fully inside the sheet
pub fn circles_inside_sheet(circles: &[PlacedCircle], sheet: &Sheet) -> bool {
    circles.iter().all(|c| {
        let inside = sheet.contains(c.x, c.y, c.radius());
        if !inside {
            error!(
                "circle of diameter {} at ({:.3}, {:.3}) exceeds the {}x{} sheet",
                c.spec.diameter, c.x, c.y, sheet.width, sheet.height
            );
        }
        inside
    })
}

/// The total count matches both the per-type counts and the number of listed positions
pub fn counts_are_consistent(result: &MaxCirclesResult) -> bool {
    let sum_counts: usize = result.circles_by_type.iter().map(|t| t.count).sum();
    let sum_positions: usize = result
        .circles_by_type
        .iter()
        .map(|t| t.positions.len())
        .sum();
    result.total_count == sum_counts && sum_counts == sum_positions
}

/// Full check of a placement on `sheet`
pub fn placement_is_valid(circles: &[PlacedCircle], sheet: &Sheet, tolerance: f64) -> bool {
    circles_inside_sheet(circles, sheet) && circles_respect_gap(circles, sheet.gap, tolerance)
}
