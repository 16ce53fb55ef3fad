use serde::{Deserialize, Serialize};

/// The rectangular area circles are packed into, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub width: f64,
    pub height: f64,
    /// Minimum clearance required between the boundaries of any two placed circles
    pub gap: f64,
}

impl Sheet {
    pub fn new(width: f64, height: f64, gap: f64) -> Self {
        Self { width, height, gap }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether a circle with `radius` centered at `(x, y)` lies fully inside the sheet
    pub fn contains(&self, x: f64, y: f64, radius: f64) -> bool {
        x >= radius && x <= self.width - radius && y >= radius && y <= self.height - radius
    }

    /// Whether a circle with `radius` can be placed anywhere on the sheet at all
    pub fn accepts_radius(&self, radius: f64) -> bool {
        2.0 * radius <= self.width && 2.0 * radius <= self.height
    }
}
