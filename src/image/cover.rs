//! Cover resize: fill the target completely, then center-crop the overflow.

use image::{RgbaImage, imageops};

use super::RESAMPLE_FILTER;

/// Resized size and crop origin for covering `target` with `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverPlan {
    /// Size after the aspect-preserving resize.
    pub resized: (u32, u32),
    /// Top-left corner of the crop window inside the resized image.
    pub crop: (u32, u32),
}

/// Compute the cover plan.
///
/// A relatively wider source is matched on height and cropped horizontally,
/// anything else is matched on width and cropped vertically. The overflow
/// axis is truncated, then clamped to the target so it never comes up short.
/// Odd overflow leaves the extra pixel on the right/bottom.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cover_plan(source: (u32, u32), target: (u32, u32)) -> CoverPlan {
    let (w, h) = source;
    let (tw, th) = target;
    let target_ratio = f64::from(tw) / f64::from(th);
    let source_ratio = f64::from(w) / f64::from(h);

    if source_ratio > target_ratio {
        let new_w = ((f64::from(th) * source_ratio) as u32).max(tw);
        CoverPlan {
            resized: (new_w, th),
            crop: ((new_w - tw) / 2, 0),
        }
    } else {
        let new_h = ((f64::from(tw) / source_ratio) as u32).max(th);
        CoverPlan {
            resized: (tw, new_h),
            crop: (0, (new_h - th) / 2),
        }
    }
}

/// Resize `img` to cover `size` (upscaling if needed) and center-crop to exactly `size`.
pub fn cover_resize_crop(img: &RgbaImage, size: (u32, u32)) -> RgbaImage {
    let plan = cover_plan(img.dimensions(), size);

    let resized = if plan.resized == img.dimensions() {
        img.clone()
    } else {
        imageops::resize(img, plan.resized.0, plan.resized.1, RESAMPLE_FILTER)
    };

    if plan.resized == size {
        return resized;
    }
    imageops::crop_imm(&resized, plan.crop.0, plan.crop.1, size.0, size.1).to_image()
}
