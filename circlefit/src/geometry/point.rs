use serde::{Deserialize, Serialize};

/// Geometric primitive representing a point in sheet coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "XY", into = "XY")]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

/// Points are exchanged as `{"x": .., "y": ..}` objects
#[derive(Serialize, Deserialize)]
struct XY {
    x: f64,
    y: f64,
}

impl From<XY> for Point {
    fn from(p: XY) -> Self {
        Point(p.x, p.y)
    }
}

impl From<Point> for XY {
    fn from(p: Point) -> Self {
        XY { x: p.0, y: p.1 }
    }
}
