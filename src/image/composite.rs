//! Source-over alpha compositing in 8-bit integer math.
//!
//! Integer math keeps an opaque destination exactly opaque, which float blending
//! does not guarantee after rounding.

use image::{Rgba, RgbaImage};

/// Composite `src` over `dst` with its top-left corner at `(x, y)`.
///
/// Parts of `src` falling outside `dst` are clipped.
pub fn alpha_composite(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dst_w, dst_h) = (i64::from(dst.width()), i64::from(dst.height()));
    let (src_w, src_h) = (i64::from(src.width()), i64::from(src.height()));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + src_w).min(dst_w);
    let y1 = (y + src_h).min(dst_h);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for dy in y0..y1 {
        for dx in x0..x1 {
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let fg = *src.get_pixel((dx - x) as u32, (dy - y) as u32);
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let bg = dst.get_pixel_mut(dx as u32, dy as u32);
            *bg = over(fg, *bg);
        }
    }
}

/// Blend a single foreground pixel over a background pixel.
#[inline]
#[allow(clippy::cast_possible_truncation)] // every result is divided back into 0..=255
pub fn over(fg: Rgba<u8>, bg: Rgba<u8>) -> Rgba<u8> {
    let fa = u32::from(fg[3]);
    if fa == 0 {
        return bg;
    }
    if fa == 255 {
        return fg;
    }

    let ba = u32::from(bg[3]);
    // Output alpha scaled by 255: fa*255 + ba*(255 - fa)
    let fg_weight = fa * 255;
    let bg_weight = ba * (255 - fa);
    let out_a255 = fg_weight + bg_weight;

    let mut out = [0_u8; 4];
    for c in 0..3 {
        let value = u32::from(fg[c]) * fg_weight + u32::from(bg[c]) * bg_weight;
        out[c] = ((value + out_a255 / 2) / out_a255) as u8;
    }
    out[3] = ((out_a255 + 127) / 255) as u8;
    Rgba(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_fg_keeps_bg() {
        let bg = Rgba([1, 2, 3, 200]);
        assert_eq!(over(Rgba([255, 255, 255, 0]), bg), bg);
    }

    #[test]
    fn test_opaque_fg_replaces_bg() {
        let fg = Rgba([9, 8, 7, 255]);
        assert_eq!(over(fg, Rgba([1, 2, 3, 255])), fg);
    }

    #[test]
    fn test_opaque_bg_stays_opaque() {
        for fa in 1..=254_u8 {
            let out = over(Rgba([200, 100, 50, fa]), Rgba([15, 23, 42, 255]));
            assert_eq!(out[3], 255, "fa={fa}");
        }
    }

    #[test]
    fn test_half_alpha_over_transparent_keeps_color() {
        let out = over(Rgba([200, 100, 50, 128]), Rgba([0, 0, 0, 0]));
        assert_eq!(out, Rgba([200, 100, 50, 128]));
    }

    #[test]
    fn test_half_alpha_over_opaque_mixes() {
        let out = over(Rgba([255, 0, 0, 128]), Rgba([0, 0, 255, 255]));
        assert_eq!(out[3], 255);
        assert!((127..=129).contains(&out[0]));
        assert!((126..=128).contains(&out[2]));
    }

    #[test]
    fn test_composite_clips_outside() {
        let mut dst = RgbaImage::new(4, 4);
        let src = RgbaImage::from_pixel(3, 3, Rgba([255, 0, 0, 255]));

        alpha_composite(&mut dst, &src, -1, 2);

        assert_eq!(dst.get_pixel(0, 2)[3], 255);
        assert_eq!(dst.get_pixel(1, 3)[3], 255);
        assert_eq!(dst.get_pixel(2, 2)[3], 0);
        assert_eq!(dst.get_pixel(0, 1)[3], 0);
    }

    #[test]
    fn test_composite_fully_outside_is_noop() {
        let mut dst = RgbaImage::new(2, 2);
        let src = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        alpha_composite(&mut dst, &src, 5, 5);
        assert!(dst.pixels().all(|p| p[3] == 0));
    }
}
