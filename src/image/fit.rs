//! Downscale-only fitting onto a transparent canvas.

use image::{Rgba, RgbaImage, imageops};

use super::RESAMPLE_FILTER;
use super::composite::alpha_composite;

/// Size an image takes when thumbnailed into `bounds`.
///
/// Returns the source size unchanged when it already fits. Otherwise the
/// limiting axis takes the bound and the other axis is rounded to whichever
/// of floor/ceil keeps the aspect ratio closest, never below 1 px.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn thumbnail_size(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (width, height) = source;
    let (max_w, max_h) = (bounds.0.max(1), bounds.1.max(1));
    if max_w >= width && max_h >= height {
        return source;
    }

    let aspect = f64::from(width) / f64::from(height);
    let (bw, bh) = (f64::from(max_w), f64::from(max_h));

    if bw / bh >= aspect {
        let w = round_aspect(bh * aspect, |n| (aspect - n / bh).abs());
        (w, max_h)
    } else {
        let h = round_aspect(bw / aspect, |n| {
            if n == 0.0 { 0.0 } else { (aspect - bw / n).abs() }
        });
        (max_w, h)
    }
}

/// Pick floor or ceil of `value` by `key` (floor wins ties), at least 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_aspect(value: f64, key: impl Fn(f64) -> f64) -> u32 {
    let lo = value.floor();
    let hi = value.ceil();
    let best = if key(hi) < key(lo) { hi } else { lo };
    (best as u32).max(1)
}

/// Thumbnail `img` into `bounds` (never upscales).
pub fn thumbnail(img: &RgbaImage, bounds: (u32, u32)) -> RgbaImage {
    let (w, h) = thumbnail_size(img.dimensions(), bounds);
    if (w, h) == img.dimensions() {
        return img.clone();
    }
    imageops::resize(img, w, h, RESAMPLE_FILTER)
}

/// Offset that centers `inner` inside `outer` (floor division).
#[inline]
pub fn center_offset(outer: (u32, u32), inner: (u32, u32)) -> (i64, i64) {
    (
        (i64::from(outer.0) - i64::from(inner.0)) / 2,
        (i64::from(outer.1) - i64::from(inner.1)) / 2,
    )
}

/// Fit `img` into `size` and center it on a fully transparent canvas of exactly `size`.
pub fn fit_transparent(img: &RgbaImage, size: (u32, u32)) -> RgbaImage {
    let scaled = thumbnail(img, size);
    let mut canvas = RgbaImage::from_pixel(size.0, size.1, Rgba([0, 0, 0, 0]));
    let (x, y) = center_offset(size, scaled.dimensions());
    alpha_composite(&mut canvas, &scaled, x, y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_size_keeps_small_images() {
        assert_eq!(thumbnail_size((100, 100), (192, 192)), (100, 100));
        assert_eq!(thumbnail_size((192, 50), (192, 192)), (192, 50));
    }

    #[test]
    fn test_thumbnail_size_wide_source() {
        assert_eq!(thumbnail_size((1000, 500), (512, 512)), (512, 256));
    }

    #[test]
    fn test_thumbnail_size_tall_source() {
        assert_eq!(thumbnail_size((300, 900), (180, 180)), (60, 180));
    }

    #[test]
    fn test_thumbnail_size_one_axis_over() {
        // Width fits, height does not: still scaled down by height.
        assert_eq!(thumbnail_size((100, 400), (200, 200)), (50, 200));
    }

    #[test]
    fn test_thumbnail_size_rounds_to_closest_aspect() {
        // 1000/3 = 333.33 -> 333
        assert_eq!(thumbnail_size((1000, 3000), (1000, 1000)), (333, 1000));
        // 2000/3 = 666.67 -> 667
        assert_eq!(thumbnail_size((2000, 3000), (1000, 1000)), (667, 1000));
    }

    #[test]
    fn test_thumbnail_size_never_zero() {
        assert_eq!(thumbnail_size((10_000, 1), (64, 64)), (64, 1));
        assert_eq!(thumbnail_size((1, 10_000), (64, 64)), (1, 64));
    }

    #[test]
    fn test_center_offset_floors() {
        assert_eq!(center_offset((192, 192), (100, 100)), (46, 46));
        assert_eq!(center_offset((10, 10), (7, 10)), (1, 0));
    }

    #[test]
    fn test_fit_small_square_gets_transparent_margin() {
        let img = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));
        let out = fit_transparent(&img, (192, 192));

        assert_eq!(out.dimensions(), (192, 192));
        assert_eq!(out.get_pixel(45, 96)[3], 0);
        assert_eq!(out.get_pixel(46, 96)[3], 255);
        assert_eq!(out.get_pixel(145, 96)[3], 255);
        assert_eq!(out.get_pixel(146, 96)[3], 0);
        assert_eq!(out.get_pixel(96, 45)[3], 0);
        assert_eq!(out.get_pixel(96, 46)[3], 255);
    }

    #[test]
    fn test_fit_large_wide_fills_width() {
        let img = RgbaImage::from_pixel(400, 200, Rgba([0, 255, 0, 255]));
        let out = fit_transparent(&img, (64, 64));

        assert_eq!(out.dimensions(), (64, 64));
        // Scaled to 64x32, centered vertically at y = 16..48.
        assert_eq!(out.get_pixel(0, 15)[3], 0);
        assert_eq!(out.get_pixel(0, 16)[3], 255);
        assert_eq!(out.get_pixel(63, 47)[3], 255);
        assert_eq!(out.get_pixel(63, 48)[3], 0);
    }

    #[test]
    fn test_fit_exact_size_is_stable() {
        let img = RgbaImage::from_pixel(180, 180, Rgba([1, 2, 3, 255]));
        let out = fit_transparent(&img, (180, 180));
        assert_eq!(out, img);
    }

    #[test]
    fn test_fit_output_size_matches_for_all_targets() {
        let img = RgbaImage::from_pixel(37, 91, Rgba([9, 9, 9, 255]));
        for size in [(512, 512), (192, 192), (64, 64), (180, 180), (20, 5)] {
            assert_eq!(fit_transparent(&img, size).dimensions(), size);
        }
    }
}
