use crate::entities::Layout;
use crate::geometry::Point;
use crate::placement::{PositionFinder, scan_axis};
use crate::util::Deadline;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Scans the centers of a hexagonal close packing of equal circles, row by row.
///
/// The lattice is built for circles of radius `radius + gap / 2`, so neighbouring cells
/// are exactly one gap apart: rows are `√3·r` apart, columns `2·r` apart and every other
/// row is shifted by `r`.
#[derive(Clone, Copy, Debug)]
pub struct HexScan {
    pub tolerance: f64,
}

impl HexScan {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl PositionFinder for HexScan {
    fn find_position(&self, layout: &Layout, radius: f64, deadline: &Deadline) -> Option<Point> {
        let sheet = &layout.sheet;
        let lattice_r = radius + sheet.gap / 2.0;
        let row_step = lattice_r * SQRT_3;
        let col_step = 2.0 * lattice_r;

        for (row, y) in scan_axis(sheet.height, radius, row_step, 0.0).enumerate() {
            if deadline.is_expired() {
                return None;
            }
            let offset = if row % 2 == 1 { lattice_r } else { 0.0 };
            for x in scan_axis(sheet.width, radius, col_step, offset) {
                if layout.first_conflict(x, y, radius, self.tolerance).is_none() {
                    return Some(Point(x, y));
                }
            }
        }
        None
    }
}
