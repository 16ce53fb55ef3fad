use crate::entities::Layout;
use crate::geometry::Point;
use crate::placement::PositionFinder;
use crate::util::{Deadline, PackConfig};

/// Scans a uniform grid over the sheet row by row, returning the first valid cell.
/// A smaller step searches more thoroughly at the cost of speed.
#[derive(Clone, Copy, Debug)]
pub struct GridScan {
    /// Step as a fraction of the radius of the circle being placed
    pub step_factor: f64,
    /// Lower bound of the step
    pub min_step: f64,
    pub tolerance: f64,
}

impl GridScan {
    pub fn from_config(config: &PackConfig) -> Self {
        Self {
            step_factor: config.grid_step_factor,
            min_step: config.min_grid_step,
            tolerance: config.overlap_tolerance,
        }
    }

    pub fn step(&self, radius: f64) -> f64 {
        f64::max(radius * self.step_factor, self.min_step)
    }
}

impl PositionFinder for GridScan {
    fn find_position(&self, layout: &Layout, radius: f64, deadline: &Deadline) -> Option<Point> {
        let sheet = &layout.sheet;
        let step = self.step(radius);
        let (x_start, x_end) = (radius, sheet.width - radius);
        let (y_start, y_end) = (radius, sheet.height - radius);
        if x_start > x_end || y_start > y_end || step.is_nan() || step <= 0.0 {
            return None;
        }
        //the last column and row are clamped onto the far edge, so it is always probed
        let n_cols = ((x_end - x_start) / step - 1e-9).ceil().max(0.0) as usize;
        let n_rows = ((y_end - y_start) / step - 1e-9).ceil().max(0.0) as usize;

        for row in 0..=n_rows {
            if deadline.is_expired() {
                return None;
            }
            let y = f64::min(y_start + row as f64 * step, y_end);
            let mut col = 0;
            while col <= n_cols {
                let x = f64::min(x_start + col as f64 * step, x_end);
                match layout.first_conflict(x, y, radius, self.tolerance) {
                    None => return Some(Point(x, y)),
                    Some((other, min_distance)) => {
                        //every cell of this row within reach of `other` is invalid as well, skip them
                        let dy = y - other.y;
                        let reach = (min_distance * min_distance - dy * dy).max(0.0).sqrt();
                        let next_col = ((other.x + reach - x_start) / step).ceil();
                        col = match next_col > col as f64 {
                            true => next_col as usize,
                            false => col + 1,
                        };
                    }
                }
            }
        }
        None
    }
}
