mod score;

#[doc(inline)]
pub use score::evaluate_result;

use crate::entities::{CircleSpec, MaxCirclesResult, Sheet};
use crate::grouping::{distinct_types, summarize};
use crate::packer::SingleAttemptPacker;
use crate::sequence::{Lcg, SequenceGenerator};
use crate::util::assertions;
use crate::util::{Deadline, PackConfig};
use itertools::Itertools;
use log::{debug, info, warn};
use rand::prelude::SmallRng;
use rand::{RngCore, SeedableRng};

/// Packs as many circles of the given types onto the sheet as possible, favouring balanced results.
/// See [`MultiAttemptOptimizer`].
pub fn calculate_max_circles_for_all(
    sheet: Sheet,
    circles: &[CircleSpec],
    config: PackConfig,
) -> MaxCirclesResult {
    MultiAttemptOptimizer::new(sheet, circles.to_vec(), config).solve()
}

/// Runs the [`SingleAttemptPacker`] several times, each time with a differently seeded
/// [`SequenceGenerator`], and keeps the result with the highest [`evaluate_result`] score.
pub struct MultiAttemptOptimizer {
    pub sheet: Sheet,
    pub circles: Vec<CircleSpec>,
    pub config: PackConfig,
    /// Attempt `i` seeds its sequence generator with `base_seed + i`
    pub base_seed: u64,
}

impl MultiAttemptOptimizer {
    pub fn new(sheet: Sheet, circles: Vec<CircleSpec>, config: PackConfig) -> Self {
        let base_seed = match config.prng_seed {
            Some(seed) => seed,
            None => SmallRng::from_os_rng().next_u64(),
        };
        Self {
            sheet,
            circles,
            config,
            base_seed,
        }
    }

    pub fn solve(&self) -> MaxCirclesResult {
        let deadline = Deadline::from_now_ms(self.config.timeout_ms);
        let generator = SequenceGenerator::new(&self.circles);
        let packer = SingleAttemptPacker::new(self.sheet, self.config);
        let n_types = distinct_types(&self.circles).len();
        let target_len = generator.target_len(&self.sheet, self.config.max_sequence_len);

        let mut best: Option<(i64, MaxCirclesResult)> = None;
        let mut timed_out = false;
        let mut n_attempts = 0;

        for attempt in 0..self.config.attempts {
            if deadline.is_expired() {
                timed_out = true;
                break;
            }
            let mut rng = Lcg::seed_from_u64(self.base_seed.wrapping_add(attempt as u64));
            let sequence = generator.generate(target_len, &mut rng);
            let outcome = packer.pack(&sequence, n_types, &deadline);
            let result = summarize(&self.circles, &outcome.placed, outcome.timeout);
            let score = evaluate_result(&result);
            n_attempts += 1;

            debug!(
                "[OPT] attempt {}/{}: {} circles, balance gap {}, score {score}",
                attempt + 1,
                self.config.attempts,
                result.total_count,
                result.balance_gap()
            );

            if best.as_ref().is_none_or(|(best_score, _)| score > *best_score) {
                best = Some((score, result));
            }
            if outcome.timeout {
                timed_out = true;
                break;
            }
        }

        let mut result = match best {
            Some((_, result)) => result,
            None => summarize(&self.circles, &[], timed_out),
        };
        result.timeout |= timed_out;

        if timed_out {
            warn!(
                "[OPT] time budget of {}ms exhausted after {n_attempts} attempt(s)",
                self.config.timeout_ms
            );
        }
        info!(
            "[OPT] best of {n_attempts} attempt(s): {} circles ({}) in {:.3}ms",
            result.total_count,
            result
                .circles_by_type
                .iter()
                .map(|t| format!("{}x{}", t.count, t.diameter))
                .join(", "),
            deadline.elapsed_ms()
        );
        debug_assert!(assertions::counts_are_consistent(&result));
        result
    }
}
