//! Image transforms for icon and splash generation.
//!
//! # Modules
//!
//! - [`background`]: Background removal strategy (edge-connected flood fill)
//! - [`fit`]: Downscale-only fit onto a transparent canvas
//! - [`compose`]: Filled icon on a solid theme color
//! - [`cover`]: Cover resize and center crop
//! - [`composite`]: Source-over alpha compositing shared by the above

pub mod background;
pub mod compose;
pub mod composite;
pub mod cover;
mod error;
pub mod fit;
mod io;

pub use background::BackgroundRemover;
pub use compose::compose_filled;
pub use cover::cover_resize_crop;
pub use error::AssetError;
pub use fit::fit_transparent;
pub use io::{load_rgba, save_png};

use image::imageops::FilterType;

/// Resampling filter for every resize.
pub(crate) const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;
