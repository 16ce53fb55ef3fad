use crate::entities::CircleSpec;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A [`CircleSpec`] bound to the position of its center on the sheet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedCircle {
    #[serde(flatten)]
    pub spec: CircleSpec,
    pub x: f64,
    pub y: f64,
}

impl PlacedCircle {
    pub fn new(spec: &CircleSpec, position: Point) -> Self {
        Self {
            spec: spec.clone(),
            x: position.0,
            y: position.1,
        }
    }

    pub fn center(&self) -> Point {
        Point(self.x, self.y)
    }

    pub fn radius(&self) -> f64 {
        self.spec.radius()
    }
}
