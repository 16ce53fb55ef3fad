use crate::entities::Sheet;
use crate::geometry::Point;
use std::ops::RangeInclusive;

/// Upper bound on the number of cells along either axis
const MAX_CELLS_PER_AXIS: usize = 512;

/// Uniform grid of buckets over the sheet, registering which circles have their center in each cell.
/// Used to limit clearance checks to circles in the neighbourhood of a candidate position.
#[derive(Clone, Debug)]
pub struct CircleGrid {
    pub cell_size: f64,
    pub n_rows: usize,
    pub n_cols: usize,
    /// Indices of the circles with their center in each cell, row major
    cells: Vec<Vec<usize>>,
    /// Largest radius registered so far
    max_radius: f64,
}

impl CircleGrid {
    /// Creates an empty grid over `sheet` with cells of (roughly) `cell_size`.
    pub fn new(sheet: &Sheet, cell_size: f64) -> Self {
        let longest_side = f64::max(sheet.width, sheet.height);
        let min_cell_size = longest_side / MAX_CELLS_PER_AXIS as f64;
        let cell_size = match cell_size.is_finite() && cell_size > min_cell_size {
            true => cell_size,
            false => min_cell_size,
        };
        let cell_size = if cell_size > 0.0 { cell_size } else { 1.0 };

        let n_cols = ((sheet.width / cell_size).ceil() as usize).clamp(1, MAX_CELLS_PER_AXIS);
        let n_rows = ((sheet.height / cell_size).ceil() as usize).clamp(1, MAX_CELLS_PER_AXIS);

        Self {
            cell_size,
            n_rows,
            n_cols,
            cells: vec![vec![]; n_rows * n_cols],
            max_radius: 0.0,
        }
    }

    /// Registers circle `idx` centered at `center`
    pub fn insert(&mut self, idx: usize, center: Point, radius: f64) {
        let row = self.row_of(center.1);
        let col = self.col_of(center.0);
        self.cells[row * self.n_cols + col].push(idx);
        self.max_radius = f64::max(self.max_radius, radius);
    }

    /// Indices of all registered circles whose center might lie within `reach`
    /// (plus the largest registered radius) of `(x, y)`.
    pub fn candidates(&self, x: f64, y: f64, reach: f64) -> impl Iterator<Item = usize> + '_ {
        let reach = reach + self.max_radius;
        let rows = self.range(y, reach, Self::row_of);
        let cols = self.range(x, reach, Self::col_of);
        rows.flat_map(move |row| {
            let cols = cols.clone();
            cols.flat_map(move |col| self.cells[row * self.n_cols + col].iter().copied())
        })
    }

    fn range(&self, v: f64, reach: f64, to_cell: fn(&Self, f64) -> usize) -> RangeInclusive<usize> {
        to_cell(self, v - reach)..=to_cell(self, v + reach)
    }

    fn row_of(&self, y: f64) -> usize {
        Self::cell_of(y, self.cell_size, self.n_rows)
    }

    fn col_of(&self, x: f64) -> usize {
        Self::cell_of(x, self.cell_size, self.n_cols)
    }

    fn cell_of(v: f64, cell_size: f64, n: usize) -> usize {
        //saturating float to int conversion maps negatives (and NaN) to 0
        ((v / cell_size).floor() as usize).min(n - 1)
    }
}
