mod suggestions;

#[doc(inline)]
pub use suggestions::generate_suggestions;

use crate::entities::{CircleSpec, FitResult, Layout, PlacedCircle, Sheet};
use crate::placement::{GridScan, PositionFinder};
use crate::util::assertions;
use crate::util::{Deadline, PackConfig};
use itertools::Itertools;
use log::{info, warn};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Checks whether one of each of `circles` fits on `sheet`.
///
/// Circles are placed largest first using a [`GridScan`]. As soon as one does not fit, the check
/// stops and smaller diameters are suggested (see [`generate_suggestions`]).
/// If the time budget runs out, the circles placed so far are returned with `timeout` set.
pub fn try_fit_circles(sheet: Sheet, circles: &[CircleSpec], config: PackConfig) -> FitResult {
    let deadline = Deadline::from_now_ms(config.timeout_ms);
    let finder = GridScan::from_config(&config);
    let mut layout = Layout::new(sheet, circles);

    let not_fitting = |placed: Vec<PlacedCircle>, timeout: bool| FitResult {
        fits: false,
        circles: placed,
        suggestions: Some(generate_suggestions(&sheet, circles)),
        timeout,
    };

    for circle in circles
        .iter()
        .sorted_by_key(|c| Reverse(OrderedFloat(c.diameter)))
    {
        if deadline.is_expired() {
            warn!("[FIT] time budget of {}ms exhausted", config.timeout_ms);
            return not_fitting(layout.into_placed_circles(), true);
        }
        let position = if sheet.accepts_radius(circle.radius()) {
            finder.find_position(&layout, circle.radius(), &deadline)
        } else {
            None
        };
        match position {
            Some(position) => layout.place(circle, position),
            None => {
                let timeout = deadline.is_expired();
                info!(
                    "[FIT] circle of diameter {} does not fit, {}/{} placed",
                    circle.diameter,
                    layout.n_placed(),
                    circles.len()
                );
                return not_fitting(layout.into_placed_circles(), timeout);
            }
        }
    }

    let placed = layout.into_placed_circles();
    debug_assert!(assertions::placement_is_valid(
        &placed,
        &sheet,
        config.overlap_tolerance
    ));
    info!(
        "[FIT] all {} circles fit in {:.3}ms",
        placed.len(),
        deadline.elapsed_ms()
    );
    FitResult {
        fits: true,
        circles: placed,
        suggestions: None,
        timeout: false,
    }
}
