use crate::collision_detection::CircleGrid;
use crate::entities::{CircleSpec, PlacedCircle, Sheet};
use crate::geometry::{Point, clearance_violation};

/// A sheet and the circles placed on it so far.
///
/// Placed circles are registered in a [`CircleGrid`], so checking a candidate position only
/// involves the circles in its neighbourhood.
#[derive(Clone, Debug)]
pub struct Layout {
    pub sheet: Sheet,
    placed: Vec<PlacedCircle>,
    grid: CircleGrid,
}

impl Layout {
    /// Creates an empty layout, with its grid tuned to the smallest of `specs`
    pub fn new(sheet: Sheet, specs: &[CircleSpec]) -> Self {
        let smallest = specs
            .iter()
            .map(|s| s.diameter)
            .filter(|d| d.is_finite() && *d > 0.0)
            .min_by(f64::total_cmp);
        let cell_size = match smallest {
            Some(d) => d + sheet.gap,
            None => f64::max(sheet.width, sheet.height),
        };
        Self {
            sheet,
            placed: vec![],
            grid: CircleGrid::new(&sheet, cell_size),
        }
    }

    /// Places a circle of `spec` centered at `position`, without checking validity
    pub fn place(&mut self, spec: &CircleSpec, position: Point) {
        self.grid.insert(self.placed.len(), position, spec.radius());
        self.placed.push(PlacedCircle::new(spec, position));
    }

    /// All placed circles, in placement order
    pub fn placed_circles(&self) -> &[PlacedCircle] {
        &self.placed
    }

    pub fn n_placed(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn into_placed_circles(self) -> Vec<PlacedCircle> {
        self.placed
    }

    /// Returns a placed circle violating the clearance of a circle with `radius` at `(x, y)`,
    /// together with the minimum distance required between both centers.
    pub fn first_conflict(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        tolerance: f64,
    ) -> Option<(&PlacedCircle, f64)> {
        let gap = self.sheet.gap;
        self.grid
            .candidates(x, y, radius + gap)
            .find_map(|idx| {
                let other = &self.placed[idx];
                clearance_violation(x, y, radius, other, gap, tolerance).map(|d| (other, d))
            })
    }

    /// Whether a circle with `radius` at `(x, y)` lies inside the sheet and clear of all placed circles
    pub fn is_valid(&self, x: f64, y: f64, radius: f64, tolerance: f64) -> bool {
        self.sheet.contains(x, y, radius) && self.first_conflict(x, y, radius, tolerance).is_none()
    }
}
