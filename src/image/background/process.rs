use image::RgbaImage;

use super::detect::detect_background;
use super::flood::clear_edge_connected;
use super::lab::to_lab_buffer;
use super::mask::{Thresholds, build_mask};

/// Color distance in LAB space (ΔE) under which a pixel is background.
const CORE_THRESHOLD: f32 = 10.0;
/// Extended distance for anti-aliased edge pixels.
const EDGE_THRESHOLD: f32 = 25.0;
/// Pixels with alpha below this value count as already removed.
const MIN_PROCESS_ALPHA: u8 = 1;

/// Make the edge-connected background of `img` transparent.
///
/// Images whose corners are already transparent come back unchanged.
pub fn remove_background(img: RgbaImage) -> RgbaImage {
    let mut output = img;
    let (width, height) = output.dimensions();
    if width == 0 || height == 0 {
        return output;
    }

    let Some(bg) = detect_background(&output) else {
        return output;
    };
    let labs = to_lab_buffer(&output);
    let limits = Thresholds {
        core: CORE_THRESHOLD,
        edge: EDGE_THRESHOLD,
        min_alpha: MIN_PROCESS_ALPHA,
    };
    let mask = build_mask(&output, &labs, &bg, &limits);
    clear_edge_connected(&mut output, &mask);

    output
}
