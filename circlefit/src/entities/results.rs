use crate::entities::{CircleSpec, PlacedCircle};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Outcome of [`try_fit_circles`](crate::fit_check::try_fit_circles)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitResult {
    pub fits: bool,
    /// Circles placed before the check succeeded or gave up, largest first
    pub circles: Vec<PlacedCircle>,
    /// Smaller diameters worth trying, only present when the circles do not fit
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suggestions: Option<Vec<CircleSpec>>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub timeout: bool,
}

/// Placed count and positions of a single circle type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleTypeSummary {
    pub diameter: f64,
    pub color: String,
    pub count: usize,
    pub positions: Vec<Point>,
}

/// Outcome of [`calculate_max_circles_for_all`](crate::optimizer::calculate_max_circles_for_all)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxCirclesResult {
    pub total_count: usize,
    /// One entry per distinct requested diameter, in descending diameter order
    pub circles_by_type: Vec<CircleTypeSummary>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub timeout: bool,
}

impl MaxCirclesResult {
    /// Difference between the most and least placed circle type
    pub fn balance_gap(&self) -> usize {
        let counts = self.circles_by_type.iter().map(|t| t.count);
        match (counts.clone().max(), counts.min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }

    pub fn count_of(&self, diameter: f64) -> usize {
        self.circles_by_type
            .iter()
            .find(|t| t.diameter == diameter)
            .map_or(0, |t| t.count)
    }

    /// All placed circles, reconstructed from the per-type summaries
    pub fn placed_circles(&self) -> Vec<PlacedCircle> {
        self.circles_by_type
            .iter()
            .flat_map(|t| {
                let spec = CircleSpec::new(t.diameter, t.color.clone());
                t.positions
                    .iter()
                    .map(move |p| PlacedCircle::new(&spec, *p))
            })
            .collect()
    }
}
