use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(value_enum)]
    pub mode: Mode,
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the number of attempts of the config
    #[arg(short, long, value_name = "N")]
    pub attempts: Option<usize>,
    /// Overrides the time budget of the config
    #[arg(short, long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
    #[arg(short, long, value_name = "FILE")]
    pub svg_file: Option<PathBuf>,
    /// Writes the instance, result and config together
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Check whether one of each circle fits
    Fit,
    /// Pack as many circles as possible
    Max,
}
