use serde::{Deserialize, Serialize};

/// Smallest diameter accepted by [`validate_circles`]
pub const MIN_DIAMETER: f64 = 0.01;

/// A requested circle: a diameter and an opaque display color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub diameter: f64,
    pub color: String,
}

impl CircleSpec {
    pub fn new(diameter: f64, color: impl Into<String>) -> Self {
        Self {
            diameter,
            color: color.into(),
        }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius().powi(2)
    }

    /// Returns a copy of this spec with a different diameter, keeping the color
    pub fn with_diameter(&self, diameter: f64) -> Self {
        Self {
            diameter,
            color: self.color.clone(),
        }
    }
}

/// Checks a list of requested circles, returning one message per violation.
/// An empty list means the circles are valid.
pub fn validate_circles(circles: &[CircleSpec]) -> Vec<String> {
    if circles.is_empty() {
        return vec!["at least one circle is required".to_string()];
    }
    circles
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.diameter.is_finite() || c.diameter < MIN_DIAMETER)
        .map(|(i, c)| {
            format!(
                "circle {}: diameter must be at least {MIN_DIAMETER} (got {})",
                i + 1,
                c.diameter
            )
        })
        .collect()
}
