//! Text compositing: flat fills and the gradient wordmark treatment.
//!
//! The gradient treatment renders the glyphs once into a single-channel
//! mask, composites a blurred offset duplicate as a drop shadow, then fills
//! the mask from a vertical gradient image. Pure pixel transforms, no
//! external state.

use crate::font::BrandFont;
use image::{imageops, GrayImage, Rgba, RgbaImage};

const SHADOW_OFFSET: (f32, f32) = (4.0, 6.0);
const SHADOW_ALPHA: u16 = 120;
const SHADOW_BLUR_SIGMA: f32 = 6.0;

/// Source-over blend of `src` onto `dst`.
pub fn blend_pixel(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src[3] as f32 / 255.0;
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let oa = sa + da * (1.0 - sa);
    for i in 0..3 {
        let blended = (src[i] as f32 * sa + dst[i] as f32 * da * (1.0 - sa)) / oa;
        dst[i] = blended.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (oa * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Composite a single-channel coverage mask over the canvas in one color.
///
/// Per-pixel source alpha is `mask * color.alpha`.
pub fn composite_mask(canvas: &mut RgbaImage, mask: &GrayImage, color: Rgba<u8>) {
    for (x, y, m) in mask.enumerate_pixels() {
        if m[0] == 0 {
            continue;
        }
        let alpha = (m[0] as u16 * color[3] as u16 / 255) as u8;
        blend_pixel(
            canvas.get_pixel_mut(x, y),
            Rgba([color[0], color[1], color[2], alpha]),
        );
    }
}

/// Draw text in a flat color with its top-left corner at `pos`.
pub fn draw_text(canvas: &mut RgbaImage, text: &str, pos: (f32, f32), font: &BrandFont, color: Rgba<u8>) {
    let mut mask = GrayImage::new(canvas.width(), canvas.height());
    font.render_mask(&mut mask, text, pos);
    composite_mask(canvas, &mask, color);
}

/// Draw text filled from a vertical gradient, with a soft drop shadow.
///
/// The gradient image is sampled at the canvas pixel position (clamped when
/// the sizes differ), so the fill always follows the canvas-wide gradient
/// rather than the glyph bounding box.
pub fn draw_gradient_text(
    canvas: &mut RgbaImage,
    text: &str,
    pos: (f32, f32),
    font: &BrandFont,
    gradient: &RgbaImage,
) {
    let (w, h) = canvas.dimensions();

    // Shadow first, beneath the fill.
    let mut shadow = GrayImage::new(w, h);
    font.render_mask(
        &mut shadow,
        text,
        (pos.0 + SHADOW_OFFSET.0, pos.1 + SHADOW_OFFSET.1),
    );
    let shadow = imageops::blur(&shadow, SHADOW_BLUR_SIGMA);
    for (x, y, m) in shadow.enumerate_pixels() {
        if m[0] == 0 {
            continue;
        }
        let alpha = (m[0] as u16 * SHADOW_ALPHA / 255) as u8;
        blend_pixel(canvas.get_pixel_mut(x, y), Rgba([0, 0, 0, alpha]));
    }

    // Gradient fill through the glyph mask.
    let mut mask = GrayImage::new(w, h);
    font.render_mask(&mut mask, text, pos);
    let (gw, gh) = gradient.dimensions();
    for (x, y, m) in mask.enumerate_pixels() {
        if m[0] == 0 {
            continue;
        }
        let g = gradient.get_pixel(x.min(gw - 1), y.min(gh - 1));
        let alpha = (m[0] as u16 * g[3] as u16 / 255) as u8;
        blend_pixel(canvas.get_pixel_mut(x, y), Rgba([g[0], g[1], g[2], alpha]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::vertical_gradient;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blend_opaque_src_replaces_dst() {
        let mut dst = Rgba([10, 20, 30, 255]);
        blend_pixel(&mut dst, Rgba([200, 100, 50, 255]));
        assert_eq!(dst, Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn test_blend_transparent_src_is_noop() {
        let mut dst = Rgba([10, 20, 30, 200]);
        blend_pixel(&mut dst, Rgba([255, 255, 255, 0]));
        assert_eq!(dst, Rgba([10, 20, 30, 200]));
    }

    #[test]
    fn test_blend_half_alpha_over_opaque() {
        let mut dst = Rgba([0, 0, 0, 255]);
        blend_pixel(&mut dst, Rgba([255, 255, 255, 128]));
        // 50.2% white over black.
        assert_eq!(dst[3], 255);
        assert!(dst[0] >= 127 && dst[0] <= 129);
    }

    #[test]
    fn test_draw_text_puts_ink_on_canvas() {
        let mut canvas = RgbaImage::new(300, 100);
        let font = BrandFont::fallback(48.0);
        draw_text(&mut canvas, "K", (10.0, 10.0), &font, Rgba([214, 178, 94, 255]));
        let ink = canvas.pixels().filter(|p| p[3] > 0).count();
        assert!(ink > 0);
    }

    #[test]
    fn test_gradient_text_uses_gradient_colors() {
        let top = Rgba([255, 0, 0, 255]);
        let mid = Rgba([0, 255, 0, 255]);
        let bottom = Rgba([0, 0, 255, 255]);
        let mut canvas = RgbaImage::new(200, 101);
        let gradient = vertical_gradient(200, 101, top, mid, bottom);
        let font = BrandFont::fallback(80.0);

        draw_gradient_text(&mut canvas, "K", (20.0, 10.0), &font, &gradient);

        // Fully covered glyph pixels must carry the exact gradient color of
        // their row (the bitmap mask is binary, so no edge blending there).
        let mut checked = 0;
        for (x, y, p) in canvas.enumerate_pixels() {
            if p[3] == 255 {
                let g = gradient.get_pixel(x, y);
                assert_eq!(&p.0[..3], &g.0[..3], "pixel ({}, {})", x, y);
                checked += 1;
            }
        }
        assert!(checked > 0, "no fully covered glyph pixels found");
    }

    #[test]
    fn test_gradient_text_casts_shadow() {
        let mut canvas = RgbaImage::new(200, 120);
        let gradient = vertical_gradient(200, 120, Rgba([255, 255, 255, 255]), Rgba([255, 255, 255, 255]), Rgba([255, 255, 255, 255]));
        let font = BrandFont::fallback(64.0);

        draw_gradient_text(&mut canvas, "K", (20.0, 10.0), &font, &gradient);

        // Some pixels should be semi-transparent black only (shadow spill
        // outside the glyph), since the fill itself is opaque white.
        let shadow_only = canvas
            .pixels()
            .filter(|p| p[3] > 0 && p[3] < 255 && p[0] == 0 && p[1] == 0 && p[2] == 0)
            .count();
        assert!(shadow_only > 0, "expected blurred shadow outside glyphs");
    }
}
