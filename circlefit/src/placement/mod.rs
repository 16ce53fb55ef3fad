mod fallback;
mod grid_scan;
mod hex_scan;

#[doc(inline)]
pub use fallback::FallbackProbe;
#[doc(inline)]
pub use grid_scan::GridScan;
#[doc(inline)]
pub use hex_scan::HexScan;

use crate::entities::Layout;
use crate::geometry::Point;
use crate::util::{Deadline, PackConfig};

/// A strategy searching the sheet for a position where a circle can be placed
/// without violating the clearance to the circles already placed.
pub trait PositionFinder {
    /// Returns the first valid center found on the sheet of `layout` for a circle with `radius`,
    /// or `None` if the search space is exhausted or the `deadline` expired.
    fn find_position(&self, layout: &Layout, radius: f64, deadline: &Deadline) -> Option<Point>;
}

/// Tries a [`GridScan`] first (best for mixed sizes), then a [`HexScan`] (best for uniform sizes)
/// and finally a [`FallbackProbe`].
#[derive(Clone, Copy, Debug)]
pub struct CompositeFinder {
    pub grid: GridScan,
    pub hex: HexScan,
    pub fallback: FallbackProbe,
}

impl CompositeFinder {
    pub fn from_config(config: &PackConfig) -> Self {
        Self {
            grid: GridScan::from_config(config),
            hex: HexScan::new(config.overlap_tolerance),
            fallback: FallbackProbe::new(config.overlap_tolerance),
        }
    }
}

impl PositionFinder for CompositeFinder {
    fn find_position(&self, layout: &Layout, radius: f64, deadline: &Deadline) -> Option<Point> {
        if !layout.sheet.accepts_radius(radius) {
            return None;
        }
        self.grid
            .find_position(layout, radius, deadline)
            .or_else(|| self.hex.find_position(layout, radius, deadline))
            .or_else(|| self.fallback.find_position(layout, radius, deadline))
    }
}

/// Evenly spaced coordinates from `radius` up to `extent - radius`, both ends included
/// when they fall on the lattice.
pub(crate) fn scan_axis(extent: f64, radius: f64, step: f64, offset: f64) -> impl Iterator<Item = f64> {
    let (start, end) = (radius + offset, extent - radius);
    let n_steps = if start > end || step.is_nan() || step <= 0.0 {
        None
    } else {
        //small slack so the far edge is not lost to rounding
        Some(((end - start) / step + 1e-9).floor() as usize)
    };
    n_steps
        .into_iter()
        .flat_map(move |n| (0..=n).map(move |i| f64::min(start + i as f64 * step, end)))
}
