use std::sync::LazyLock;
use std::time::Instant;

use circlefit::entities::{CircleSpec, Sheet};
use circlefit::fit_check::try_fit_circles;
use circlefit::optimizer::calculate_max_circles_for_all;

use crate::config::CfitConfig;
use crate::io::cli::Mode;
use crate::io::output::PackResult;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Runs the engine in the requested mode
pub fn run(mode: Mode, sheet: Sheet, circles: &[CircleSpec], config: &CfitConfig) -> PackResult {
    match mode {
        Mode::Fit => PackResult::Fit(try_fit_circles(sheet, circles, config.pack_config)),
        Mode::Max => PackResult::Max(calculate_max_circles_for_all(
            sheet,
            circles,
            config.pack_config,
        )),
    }
}
