use crate::entities::{CircleSpec, Layout, MaxCirclesResult, PlacedCircle, Sheet};
use crate::grouping::{distinct_types, summarize};
use crate::placement::{CompositeFinder, PositionFinder};
use crate::util::assertions;
use crate::util::{Deadline, PackConfig};
use log::{debug, trace};

/// Places the circles of a sequence one at a time at the first valid position found,
/// until the sequence is exhausted, too many consecutive circles failed to fit or time runs out.
pub struct SingleAttemptPacker<F: PositionFinder = CompositeFinder> {
    pub sheet: Sheet,
    pub config: PackConfig,
    pub finder: F,
}

/// Placements of a single attempt, in placement order
#[derive(Clone, Debug, PartialEq)]
pub struct AttemptOutcome {
    pub placed: Vec<PlacedCircle>,
    /// Whether the attempt was cut short by the deadline
    pub timeout: bool,
}

impl SingleAttemptPacker<CompositeFinder> {
    pub fn new(sheet: Sheet, config: PackConfig) -> Self {
        Self::with_finder(sheet, config, CompositeFinder::from_config(&config))
    }
}

impl<F: PositionFinder> SingleAttemptPacker<F> {
    pub fn with_finder(sheet: Sheet, config: PackConfig, finder: F) -> Self {
        Self {
            sheet,
            config,
            finder,
        }
    }

    /// Places the circles of `sequence` in order.
    /// `n_types` is the number of distinct circle types the sequence is drawn from.
    pub fn pack(&self, sequence: &[CircleSpec], n_types: usize, deadline: &Deadline) -> AttemptOutcome {
        let ceiling = self.config.failure_ceiling(n_types);
        let empty_ceiling = self.config.empty_failure_ceiling(n_types);

        let mut layout = Layout::new(self.sheet, sequence);
        let mut consecutive_failures = 0;
        let mut timeout = false;

        for spec in sequence {
            if deadline.is_expired() {
                timeout = true;
                break;
            }
            match self.finder.find_position(&layout, spec.radius(), deadline) {
                Some(position) => {
                    trace!(
                        "[PACK] placing circle {} of diameter {} at ({:.3}, {:.3})",
                        layout.n_placed() + 1,
                        spec.diameter,
                        position.0,
                        position.1
                    );
                    layout.place(spec, position);
                    consecutive_failures = 0;
                }
                None if deadline.is_expired() => {
                    timeout = true;
                    break;
                }
                None => {
                    consecutive_failures += 1;
                    let limit = if layout.is_empty() { empty_ceiling } else { ceiling };
                    if consecutive_failures >= limit {
                        debug!(
                            "[PACK] stopping after {consecutive_failures} consecutive failures ({} placed)",
                            layout.n_placed()
                        );
                        break;
                    }
                }
            }
        }

        let placed = layout.into_placed_circles();
        debug_assert!(assertions::placement_is_valid(
            &placed,
            &self.sheet,
            self.config.overlap_tolerance
        ));

        AttemptOutcome { placed, timeout }
    }

    /// Packs `sequence` and summarizes the placements per type of `specs`
    pub fn pack_and_summarize(
        &self,
        specs: &[CircleSpec],
        sequence: &[CircleSpec],
        deadline: &Deadline,
    ) -> MaxCirclesResult {
        let n_types = distinct_types(specs).len();
        let outcome = self.pack(sequence, n_types, deadline);
        summarize(specs, &outcome.placed, outcome.timeout)
    }
}
