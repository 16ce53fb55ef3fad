use circlefit::entities::{FitResult, MaxCirclesResult, Sheet};
use circlefit::io::ext_repr::ExtInstance;
use circlefit::io::svg::{SvgDrawOptions, fit_result_to_svg, max_result_to_svg};
use serde::{Deserialize, Serialize};
use svg::Document;

use crate::config::CfitConfig;
use crate::io::cli::Mode;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PackResult {
    Fit(FitResult),
    Max(MaxCirclesResult),
}

impl PackResult {
    pub fn n_placed(&self) -> usize {
        match self {
            PackResult::Fit(r) => r.circles.len(),
            PackResult::Max(r) => r.total_count,
        }
    }

    pub fn timeout(&self) -> bool {
        match self {
            PackResult::Fit(r) => r.timeout,
            PackResult::Max(r) => r.timeout,
        }
    }

    pub fn to_svg(&self, sheet: &Sheet, options: SvgDrawOptions) -> Document {
        match self {
            PackResult::Fit(r) => fit_result_to_svg(r, sheet, options),
            PackResult::Max(r) => max_result_to_svg(r, sheet, options),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CfitOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub mode: Mode,
    pub result: PackResult,
    pub config: CfitConfig,
}
