//! Filled icons: the object centered on a solid theme color.

use image::{Rgba, RgbaImage};

use super::composite::alpha_composite;
use super::fit::{center_offset, thumbnail};

/// Share of the canvas the object may occupy on each axis.
pub const PADDING_FACTOR: f64 = 0.8;

/// Box the object is thumbnailed into, at least 1x1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn padded_box(size: (u32, u32)) -> (u32, u32) {
    let scale = |v: u32| ((f64::from(v) * PADDING_FACTOR) as u32).max(1);
    (scale(size.0), scale(size.1))
}

/// Compose a filled icon of exactly `size` on a `background` canvas.
///
/// The object is scaled down (never up) into the padded box and centered.
/// Its own alpha is respected, so removed background shows `background`.
pub fn compose_filled(img: &RgbaImage, size: (u32, u32), background: Rgba<u8>) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(size.0, size.1, background);
    let scaled = thumbnail(img, padded_box(size));
    let (x, y) = center_offset(size, scaled.dimensions());
    alpha_composite(&mut canvas, &scaled, x, y);
    canvas
}
