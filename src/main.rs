//! iconforge - generate app icons, favicons and splash screens from source artwork.

mod cli;
mod config;
mod image;
mod logger;
mod pipeline;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::AssetConfig;

use crate::image::BackgroundRemover;
use crate::pipeline::SourceOutcome;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = AssetConfig::load(&cli)?;
    debug!("config"; "project root: {}", config.root.display());

    // Capability is decided once; every icon source uses the same strategy.
    let remover = BackgroundRemover::detect(config.keep_background);
    let report = pipeline::run(&config, remover)?;

    for source in &report.sources {
        if let SourceOutcome::Completed { outputs } = &source.outcome {
            debug!(source.name; "{} file(s) from {}", outputs.len(), config.relative(&source.path).display());
        }
    }
    log!("done"; "{}", report);
    log!("done"; "assets are in {}", config.relative(&config.output_dir).display());
    Ok(())
}
