use crate::entities::{CircleSpec, CircleTypeSummary, MaxCirclesResult, PlacedCircle};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// The distinct circle types among `specs`, largest diameter first.
/// Of several specs sharing a diameter, the first one listed is kept.
pub fn distinct_types(specs: &[CircleSpec]) -> Vec<CircleSpec> {
    specs
        .iter()
        .unique_by(|s| OrderedFloat(s.diameter))
        .sorted_by_key(|s| Reverse(OrderedFloat(s.diameter)))
        .cloned()
        .collect_vec()
}

/// Summarizes `placed` per distinct diameter of `specs`, in descending diameter order.
/// Types of which nothing was placed are listed with a count of zero.
pub fn group_by_type(specs: &[CircleSpec], placed: &[PlacedCircle]) -> Vec<CircleTypeSummary> {
    distinct_types(specs)
        .into_iter()
        .map(|spec| {
            let positions = placed
                .iter()
                .filter(|p| p.spec.diameter == spec.diameter)
                .map(|p| p.center())
                .collect_vec();
            CircleTypeSummary {
                diameter: spec.diameter,
                color: spec.color,
                count: positions.len(),
                positions,
            }
        })
        .collect()
}

/// Builds the [`MaxCirclesResult`] of a set of placed circles
pub fn summarize(specs: &[CircleSpec], placed: &[PlacedCircle], timeout: bool) -> MaxCirclesResult {
    let circles_by_type = group_by_type(specs, placed);
    MaxCirclesResult {
        total_count: circles_by_type.iter().map(|t| t.count).sum(),
        circles_by_type,
        timeout,
    }
}
