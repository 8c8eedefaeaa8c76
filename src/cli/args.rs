//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Generate app icons, favicons and splash screens from source artwork
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Project root containing the `assets/` directory (default: current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Print every generated file and intermediate sizes
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip background removal and composite icon sources as they are
    #[arg(short = 'k', long)]
    pub keep_background: bool,
}
