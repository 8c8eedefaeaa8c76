//! Project paths and the fixed generation tables.
//!
//! ```text
//! <root>/
//! └── assets/
//!     ├── Generated_icon_1.png ...   # sources
//!     └── finalized/                 # output root
//!         ├── Option1/
//!         ├── Option2/
//!         └── Common/
//! ```

mod specs;

pub use specs::{
    BACKGROUND_COLOR, MASTER_FILE, OutputSpec, SOURCES, SourceAsset, SourcePipeline,
    SpecCategory,
};

use crate::cli::Cli;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory (under root) holding the source images.
const ASSETS_DIR: &str = "assets";
/// Directory (under the assets directory) receiving generated files.
const FINALIZED_DIR: &str = "finalized";

/// Resolved locations for one run.
#[derive(Debug, Clone)]
pub struct AssetConfig {
    /// Project root directory
    pub root: PathBuf,
    /// `<root>/assets`
    pub assets_dir: PathBuf,
    /// `<root>/assets/finalized`
    pub output_dir: PathBuf,
    /// Skip background removal even when it is available
    pub keep_background: bool,
}

impl AssetConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Without `--root` the current working directory is the project root.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to get current working directory")?,
        };

        let mut config = Self::from_root(root);
        config.keep_background = cli.keep_background;
        Ok(config)
    }

    /// Build paths for a project rooted at `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let assets_dir = root.join(ASSETS_DIR);
        let output_dir = assets_dir.join(FINALIZED_DIR);
        Self {
            root,
            assets_dir,
            output_dir,
            keep_background: false,
        }
    }

    /// Absolute path of a source image.
    pub fn source_path(&self, source: &SourceAsset) -> PathBuf {
        self.assets_dir.join(source.file)
    }

    /// Directory receiving a source's outputs.
    pub fn source_output_dir(&self, source: &SourceAsset) -> PathBuf {
        self.output_dir.join(source.output_dir)
    }

    /// Every output directory, deduplicated, in source order.
    pub fn output_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = Vec::with_capacity(SOURCES.len());
        for source in SOURCES {
            let dir = self.source_output_dir(source);
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        dirs
    }

    /// Path relative to the project root, for display.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
