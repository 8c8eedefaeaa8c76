//! Background removal for icon sources.
//!
//! The built-in remover (feature `background-removal`) works in LAB color
//! space: it detects the dominant corner color, classifies every pixel by its
//! distance to it, then clears only the background connected to the image
//! border with a scanline flood fill.

#[cfg(feature = "background-removal")]
mod detect;
#[cfg(feature = "background-removal")]
mod flood;
#[cfg(feature = "background-removal")]
mod lab;
#[cfg(feature = "background-removal")]
mod mask;
#[cfg(feature = "background-removal")]
mod process;
mod remover;

#[cfg(feature = "background-removal")]
pub use process::remove_background;
pub use remover::BackgroundRemover;
