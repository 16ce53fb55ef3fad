use circlefit::io::svg::SvgDrawOptions;
use circlefit::util::PackConfig;
use serde::{Deserialize, Serialize};

/// Configuration of the command line front end
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct CfitConfig {
    /// Configuration of the packing engine
    #[serde(default)]
    pub pack_config: PackConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl CfitConfig {
    /// Applies the overrides given on the command line, if any
    pub fn with_overrides(mut self, attempts: Option<usize>, timeout_ms: Option<u64>) -> Self {
        if let Some(attempts) = attempts {
            self.pack_config = self.pack_config.with_attempts(attempts);
        }
        if let Some(timeout_ms) = timeout_ms {
            self.pack_config = self.pack_config.with_timeout_ms(timeout_ms);
        }
        self
    }
}
