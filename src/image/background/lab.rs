use image::RgbaImage;
use lab::{Lab, rgb_bytes_to_labs};

/// Convert every pixel of `img` to LAB (alpha ignored), in row-major order.
///
/// Uses the batch conversion from the `lab` crate, which is SIMD accelerated.
pub(super) fn to_lab_buffer(img: &RgbaImage) -> Vec<Lab> {
    let rgb: Vec<u8> = img
        .as_raw()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    rgb_bytes_to_labs(&rgb)
}

/// Squared perceptual distance (ΔE²) between two LAB colors.
#[inline]
pub(super) fn delta_e_sq(a: &Lab, b: &Lab) -> f32 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    dl * dl + da * da + db * db
}
