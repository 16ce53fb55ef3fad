use crate::entities::{CircleSpec, Sheet};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Above this fraction of the sheet area covered, all circles are scaled down
const CROWDED_FILL: f64 = 0.7;
/// Fraction of the sheet area the uniformly scaled circles cover
const TARGET_FILL: f64 = 0.6;
/// Factor applied to the largest circles when the sheet is not crowded
const LARGEST_SHRINK: f64 = 0.85;
const N_LARGEST_SHRUNK: usize = 2;

/// Suggests smaller diameters for circles that did not fit on `sheet`.
///
/// If the circles cover more than 70% of the sheet, every diameter is scaled by the same factor
/// so that they cover 60% (in the order given). Otherwise only the two largest circles are shrunk
/// by 15% (largest first).
/// Suggested diameters are rounded to one decimal.
pub fn generate_suggestions(sheet: &Sheet, circles: &[CircleSpec]) -> Vec<CircleSpec> {
    let total_area: f64 = circles.iter().map(|c| c.area()).sum();
    let sheet_area = sheet.area();

    if total_area > sheet_area * CROWDED_FILL {
        let scale = f64::sqrt(sheet_area * TARGET_FILL / total_area);
        circles
            .iter()
            .map(|c| c.with_diameter(round_to_tenth(c.diameter * scale)))
            .collect()
    } else {
        circles
            .iter()
            .sorted_by_key(|c| Reverse(OrderedFloat(c.diameter)))
            .enumerate()
            .map(|(i, c)| {
                if i < N_LARGEST_SHRUNK {
                    c.with_diameter(round_to_tenth(c.diameter * LARGEST_SHRINK))
                } else {
                    c.clone()
                }
            })
            .collect()
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
