use std::io::Write;

use anyhow::{Context, Result};
use cfit::config::CfitConfig;
use cfit::io::cli::Cli;
use cfit::io::output::CfitOutput;
use cfit::{EPOCH, io};
use circlefit::io::import::import;
use clap::Parser as ClapParser;
use log::{info, warn};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CfitConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    }
    .with_overrides(args.attempts, args.timeout_ms);

    info!("[MAIN] Successfully parsed CfitConfig: {config:?}");

    let ext_instance = io::read_instance(&args.input_file)?;
    let (sheet, circles) = import(&ext_instance)
        .with_context(|| format!("could not import {}", args.input_file.display()))?;
    info!(
        "[MAIN] {} x {} sheet with gap {}, {} circle(s) requested",
        sheet.width,
        sheet.height,
        sheet.gap,
        circles.len()
    );

    let result = cfit::run(args.mode, sheet, &circles, &config);
    info!(
        "[MAIN] {} circles placed in {:.3}s{}",
        result.n_placed().separate_with_commas(),
        EPOCH.elapsed().as_secs_f64(),
        if result.timeout() { " (timed out)" } else { "" }
    );

    {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &result)?;
        writeln!(stdout)?;
    }

    if let Some(svg_file) = &args.svg_file {
        let svg = result.to_svg(&sheet, config.svg_draw_options);
        io::write_svg(&svg, svg_file)?;
    }

    if let Some(output_file) = &args.output_file {
        let output = CfitOutput {
            instance: ext_instance,
            mode: args.mode,
            result,
            config,
        };
        io::write_json(&output, output_file)?;
    }

    Ok(())
}
