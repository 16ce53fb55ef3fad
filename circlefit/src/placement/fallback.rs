use crate::entities::{Layout, Sheet};
use crate::geometry::Point;
use crate::placement::PositionFinder;
use crate::util::Deadline;

/// Last resort: probes the four inset corners and the center of the sheet
#[derive(Clone, Copy, Debug)]
pub struct FallbackProbe {
    pub tolerance: f64,
}

impl FallbackProbe {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    fn candidates(sheet: &Sheet, radius: f64) -> [Point; 5] {
        let (x_min, x_max) = (radius, sheet.width - radius);
        let (y_min, y_max) = (radius, sheet.height - radius);
        [
            Point(x_min, y_min),
            Point(x_max, y_min),
            Point(x_min, y_max),
            Point(x_max, y_max),
            Point(sheet.width / 2.0, sheet.height / 2.0),
        ]
    }
}

impl PositionFinder for FallbackProbe {
    fn find_position(&self, layout: &Layout, radius: f64, deadline: &Deadline) -> Option<Point> {
        if deadline.is_expired() || !layout.sheet.accepts_radius(radius) {
            return None;
        }
        Self::candidates(&layout.sheet, radius)
            .into_iter()
            .find(|p| layout.is_valid(p.0, p.1, radius, self.tolerance))
    }
}
