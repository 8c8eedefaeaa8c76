use image::RgbaImage;
use lab::Lab;
use rayon::prelude::*;

use super::lab::delta_e_sq;

/// What the flood fill does to a pixel once it reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum Class {
    /// Foreground: blocks the fill.
    #[default]
    Keep,
    /// Anti-aliased border: passable, alpha becomes the stored value.
    Edge(u8),
    /// Background: passable, alpha becomes zero.
    Clear,
}

impl Class {
    #[inline]
    pub(super) fn is_passable(self) -> bool {
        !matches!(self, Self::Keep)
    }
}

/// Per-pixel classification in row-major order.
pub(super) struct Mask {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) cells: Vec<Class>,
}

impl Mask {
    #[inline]
    pub(super) fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// ΔE limits for classification.
pub(super) struct Thresholds {
    /// At or below: core background.
    pub(super) core: f32,
    /// At or below (and above `core`): edge, alpha scaled by distance.
    pub(super) edge: f32,
    /// Pixels more transparent than this are already background.
    pub(super) min_alpha: u8,
}

impl Thresholds {
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn classify(&self, px: &[u8], lab: &Lab, bg: &Lab) -> Class {
        let alpha = px[3];
        if alpha < self.min_alpha {
            return Class::Clear;
        }

        let dist_sq = delta_e_sq(lab, bg);
        if dist_sq <= self.core * self.core {
            Class::Clear
        } else if dist_sq <= self.edge * self.edge {
            let span = (self.edge - self.core).max(f32::EPSILON);
            let ratio = ((dist_sq.sqrt() - self.core) / span).clamp(0.0, 1.0);
            Class::Edge((f32::from(alpha) * ratio).round() as u8)
        } else {
            Class::Keep
        }
    }
}

/// Images at least this large are classified in parallel.
const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Classify every pixel of `img` against the detected background color.
pub(super) fn build_mask(img: &RgbaImage, labs: &[Lab], bg: &Lab, limits: &Thresholds) -> Mask {
    let (width, height) = img.dimensions();
    let len = width as usize * height as usize;
    assert_eq!(labs.len(), len, "LAB buffer length mismatch");

    let raw = img.as_raw();
    let cells: Vec<Class> = if len >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact(4)
            .zip(labs.par_iter())
            .map(|(px, lab)| limits.classify(px, lab, bg))
            .collect()
    } else {
        raw.chunks_exact(4)
            .zip(labs)
            .map(|(px, lab)| limits.classify(px, lab, bg))
            .collect()
    };

    Mask {
        width,
        height,
        cells,
    }
}
