//! Coverage-based shape drawing for logo compositions.
//!
//! All shapes are rendered by evaluating a signed distance per pixel and
//! converting it to edge coverage, which keeps the output deterministic and
//! lightly anti-aliased.

use crate::text::blend_pixel;
use image::{GrayImage, Rgba, RgbaImage};

fn coverage_alpha(cover: f32, color: Rgba<u8>) -> Rgba<u8> {
    let alpha = (cover.clamp(0.0, 1.0) * color[3] as f32).round() as u8;
    Rgba([color[0], color[1], color[2], alpha])
}

/// Distance from `p` to the segment `a`-`b`.
fn segment_distance(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let (apx, apy) = (p.0 - a.0, p.1 - a.1);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (dx, dy) = (apx - t * abx, apy - t * aby);
    (dx * dx + dy * dy).sqrt()
}

/// Stroke a circle outline of the given line width.
pub fn stroke_circle(
    canvas: &mut RgbaImage,
    center: (f32, f32),
    radius: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let (w, h) = canvas.dimensions();
    let half = width / 2.0;
    let reach = radius + half + 1.0;

    let x0 = ((center.0 - reach).floor().max(0.0)) as u32;
    let y0 = ((center.1 - reach).floor().max(0.0)) as u32;
    let x1 = ((center.0 + reach).ceil() as u32).min(w);
    let y1 = ((center.1 + reach).ceil() as u32).min(h);

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - center.0;
            let dy = y as f32 + 0.5 - center.1;
            let d = ((dx * dx + dy * dy).sqrt() - radius).abs();
            let cover = (half - d + 0.5).clamp(0.0, 1.0);
            if cover > 0.0 {
                blend_pixel(canvas.get_pixel_mut(x, y), coverage_alpha(cover, color));
            }
        }
    }
}

/// Fill a solid circle (accent dots).
pub fn fill_circle(canvas: &mut RgbaImage, center: (f32, f32), radius: f32, color: Rgba<u8>) {
    let (w, h) = canvas.dimensions();
    let reach = radius + 1.0;
    let x0 = ((center.0 - reach).floor().max(0.0)) as u32;
    let y0 = ((center.1 - reach).floor().max(0.0)) as u32;
    let x1 = ((center.0 + reach).ceil() as u32).min(w);
    let y1 = ((center.1 + reach).ceil() as u32).min(h);

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - center.0;
            let dy = y as f32 + 0.5 - center.1;
            let cover = (radius - (dx * dx + dy * dy).sqrt() + 0.5).clamp(0.0, 1.0);
            if cover > 0.0 {
                blend_pixel(canvas.get_pixel_mut(x, y), coverage_alpha(cover, color));
            }
        }
    }
}

/// Draw a straight line of the given width between two points.
pub fn draw_line(
    canvas: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgba<u8>,
) {
    let (w, h) = canvas.dimensions();
    let half = width / 2.0;
    let reach = half + 1.0;

    let x0 = ((from.0.min(to.0) - reach).floor().max(0.0)) as u32;
    let y0 = ((from.1.min(to.1) - reach).floor().max(0.0)) as u32;
    let x1 = ((from.0.max(to.0) + reach).ceil() as u32).min(w);
    let y1 = ((from.1.max(to.1) + reach).ceil() as u32).min(h);

    for y in y0..y1 {
        for x in x0..x1 {
            let p = (x as f32 + 0.5, y as f32 + 0.5);
            let cover = (half - segment_distance(p, from, to) + 0.5).clamp(0.0, 1.0);
            if cover > 0.0 {
                blend_pixel(canvas.get_pixel_mut(x, y), coverage_alpha(cover, color));
            }
        }
    }
}

/// Stroke a closed polygon outline (the diamond crest).
///
/// Edge coverage is accumulated into a mask with `max` so corner pixels are
/// blended once, without seams where edges meet.
pub fn stroke_polygon(
    canvas: &mut RgbaImage,
    points: &[(f32, f32)],
    width: f32,
    color: Rgba<u8>,
) {
    if points.len() < 2 {
        return;
    }
    let (w, h) = canvas.dimensions();
    let half = width / 2.0;
    let mut mask = GrayImage::new(w, h);

    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        let reach = half + 1.0;

        let x0 = ((a.0.min(b.0) - reach).floor().max(0.0)) as u32;
        let y0 = ((a.1.min(b.1) - reach).floor().max(0.0)) as u32;
        let x1 = ((a.0.max(b.0) + reach).ceil() as u32).min(w);
        let y1 = ((a.1.max(b.1) + reach).ceil() as u32).min(h);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                let cover = (half - segment_distance(p, a, b) + 0.5).clamp(0.0, 1.0);
                let value = (cover * 255.0).round() as u8;
                let m = mask.get_pixel_mut(x, y);
                m[0] = m[0].max(value);
            }
        }
    }

    crate::text::composite_mask(canvas, &mask, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GOLD: Rgba<u8> = Rgba([214, 178, 94, 255]);

    #[test]
    fn test_stroke_circle_hits_ring_not_center() {
        let mut canvas = RgbaImage::new(100, 100);
        stroke_circle(&mut canvas, (50.0, 50.0), 30.0, 6.0, GOLD);

        // On the ring.
        assert_eq!(canvas.get_pixel(80, 50)[3], 255);
        assert_eq!(canvas.get_pixel(20, 50)[3], 255);
        // Center and far corner stay empty.
        assert_eq!(canvas.get_pixel(50, 50)[3], 0);
        assert_eq!(canvas.get_pixel(2, 2)[3], 0);
    }

    #[test]
    fn test_horizontal_line_coverage() {
        let mut canvas = RgbaImage::new(100, 20);
        draw_line(&mut canvas, (10.0, 10.0), (90.0, 10.0), 4.0, GOLD);

        assert_eq!(canvas.get_pixel(50, 10)[3], 255);
        assert_eq!(canvas.get_pixel(50, 2)[3], 0);
        assert_eq!(canvas.get_pixel(2, 10)[3], 0);
    }

    #[test]
    fn test_fill_circle_interior() {
        let mut canvas = RgbaImage::new(40, 40);
        fill_circle(&mut canvas, (20.0, 20.0), 10.0, GOLD);
        assert_eq!(*canvas.get_pixel(20, 20), GOLD);
        assert_eq!(canvas.get_pixel(20, 2)[3], 0);
    }

    #[test]
    fn test_polygon_outline_leaves_interior_empty() {
        let mut canvas = RgbaImage::new(100, 100);
        let diamond = [(50.0, 10.0), (90.0, 50.0), (50.0, 90.0), (10.0, 50.0)];
        stroke_polygon(&mut canvas, &diamond, 6.0, GOLD);

        // Interior is untouched, edge midpoints are inked.
        assert_eq!(canvas.get_pixel(50, 50)[3], 0);
        assert!(canvas.get_pixel(70, 30)[3] > 0);
        assert!(canvas.get_pixel(30, 70)[3] > 0);
    }
}
