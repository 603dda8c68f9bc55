//! Font loading and glyph mask rendering.
//!
//! `BrandFont` wraps a TrueType face parsed with `ttf-parser`. The raw font
//! bytes are kept and the face is re-parsed on demand (the face borrows the
//! data). When the requested font file cannot be read or parsed, loading
//! degrades to the built-in 5×7 bitmap font instead of failing.

use crate::bitmap;
use crate::error::RasterError;
use image::GrayImage;
use std::path::Path;
use tracing::{debug, warn};
use ttf_parser::{Face, OutlineBuilder};

/// A sized font for raster text rendering.
pub struct BrandFont {
    kind: FontKind,
    size: f32,
}

enum FontKind {
    TrueType(Vec<u8>),
    Bitmap,
}

impl BrandFont {
    /// Load a TrueType font at the given pixel size, falling back to the
    /// built-in bitmap font if the file is missing or unreadable.
    pub fn load(path: impl AsRef<Path>, size: f32) -> Self {
        let path = path.as_ref();
        match Self::from_file(path, size) {
            Ok(font) => font,
            Err(e) => {
                warn!("font {} unavailable ({}), using bitmap fallback", path.display(), e);
                Self::fallback(size)
            }
        }
    }

    /// Load the first readable font from a list of candidate paths.
    pub fn load_any<P: AsRef<Path>>(candidates: &[P], size: f32) -> Self {
        for path in candidates {
            if let Ok(font) = Self::from_file(path.as_ref(), size) {
                debug!("loaded font {}", path.as_ref().display());
                return font;
            }
        }
        warn!("no candidate font available, using bitmap fallback");
        Self::fallback(size)
    }

    pub fn from_file(path: &Path, size: f32) -> Result<Self, RasterError> {
        let data = std::fs::read(path)
            .map_err(|e| RasterError::FontError(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(data, size)
    }

    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self, RasterError> {
        Face::parse(&data, 0).map_err(|e| RasterError::FontError(e.to_string()))?;
        Ok(Self {
            kind: FontKind::TrueType(data),
            size,
        })
    }

    /// The built-in bitmap font, scaled to approximate the requested size.
    pub fn fallback(size: f32) -> Self {
        Self {
            kind: FontKind::Bitmap,
            size,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.kind, FontKind::Bitmap)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    fn bitmap_cell(&self) -> u32 {
        ((self.size / 8.0).round() as u32).max(1)
    }

    /// Width and height of the rendered text in pixels.
    pub fn measure(&self, text: &str) -> (f32, f32) {
        match &self.kind {
            FontKind::TrueType(data) => {
                // Parse was validated in the constructor.
                let Ok(face) = Face::parse(data, 0) else {
                    return (0.0, 0.0);
                };
                let scale = self.size / face.units_per_em() as f32;
                let width: f32 = text
                    .chars()
                    .map(|ch| match face.glyph_index(ch) {
                        Some(gid) => {
                            face.glyph_hor_advance(gid).unwrap_or(0) as f32 * scale
                        }
                        None => self.size / 2.0,
                    })
                    .sum();
                let height = (face.ascender() as f32 - face.descender() as f32) * scale;
                (width, height)
            }
            FontKind::Bitmap => {
                let s = self.bitmap_cell() as f32;
                let n = text.chars().count() as f32;
                let width = if n > 0.0 {
                    n * bitmap::GLYPH_ADVANCE as f32 * s - s
                } else {
                    0.0
                };
                (width, bitmap::GLYPH_HEIGHT as f32 * s)
            }
        }
    }

    /// Render `text` into a single-channel mask with its top-left corner at
    /// `pos`. Coverage is accumulated, so several strings can share a mask.
    pub fn render_mask(&self, mask: &mut GrayImage, text: &str, pos: (f32, f32)) {
        match &self.kind {
            FontKind::TrueType(data) => {
                let Ok(face) = Face::parse(data, 0) else {
                    return;
                };
                let scale = self.size / face.units_per_em() as f32;
                let baseline = pos.1 + face.ascender() as f32 * scale;
                let mut pen = pos.0;

                for ch in text.chars() {
                    let Some(gid) = face.glyph_index(ch) else {
                        pen += self.size / 2.0;
                        continue;
                    };
                    let mut sink = SegmentSink::new(pen, baseline, scale);
                    face.outline_glyph(gid, &mut sink);
                    fill_nonzero(mask, &sink.segments);
                    pen += face.glyph_hor_advance(gid).unwrap_or(0) as f32 * scale;
                }
            }
            FontKind::Bitmap => {
                let s = self.bitmap_cell();
                let mut pen = pos.0.round() as i64;
                let top = pos.1.round() as i64;
                for ch in text.chars() {
                    let columns = bitmap::glyph(ch);
                    for (col, bits) in columns.iter().enumerate() {
                        for row in 0..bitmap::GLYPH_HEIGHT {
                            if bits >> row & 1 == 1 {
                                fill_block(
                                    mask,
                                    pen + (col as u32 * s) as i64,
                                    top + (row * s) as i64,
                                    s,
                                );
                            }
                        }
                    }
                    pen += (bitmap::GLYPH_ADVANCE * s) as i64;
                }
            }
        }
    }
}

fn fill_block(mask: &mut GrayImage, x: i64, y: i64, size: u32) {
    let (w, h) = mask.dimensions();
    for dy in 0..size as i64 {
        for dx in 0..size as i64 {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && (px as u32) < w && (py as u32) < h {
                mask.get_pixel_mut(px as u32, py as u32)[0] = 255;
            }
        }
    }
}

/// Flattens a glyph outline into straight segments in pixel space.
///
/// Glyph coordinates are y-up font units; pixel space is y-down, so the
/// sink applies the scale and flips around the baseline.
struct SegmentSink {
    segments: Vec<[f32; 4]>,
    current: (f32, f32),
    subpath_start: (f32, f32),
    origin: (f32, f32),
    scale: f32,
}

const QUAD_STEPS: u32 = 8;
const CUBIC_STEPS: u32 = 16;

impl SegmentSink {
    fn new(pen_x: f32, baseline_y: f32, scale: f32) -> Self {
        Self {
            segments: Vec::new(),
            current: (0.0, 0.0),
            subpath_start: (0.0, 0.0),
            origin: (pen_x, baseline_y),
            scale,
        }
    }

    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin.0 + x * self.scale, self.origin.1 - y * self.scale)
    }

    fn push(&mut self, to: (f32, f32)) {
        let from = self.current;
        if from != to {
            self.segments.push([from.0, from.1, to.0, to.1]);
        }
        self.current = to;
    }
}

impl OutlineBuilder for SegmentSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.current = self.map(x, y);
        self.subpath_start = self.current;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let to = self.map(x, y);
        self.push(to);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p0 = self.current;
        let c = self.map(x1, y1);
        let p1 = self.map(x, y);
        for i in 1..=QUAD_STEPS {
            let t = i as f32 / QUAD_STEPS as f32;
            let u = 1.0 - t;
            let px = u * u * p0.0 + 2.0 * u * t * c.0 + t * t * p1.0;
            let py = u * u * p0.1 + 2.0 * u * t * c.1 + t * t * p1.1;
            self.push((px, py));
        }
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p0 = self.current;
        let c1 = self.map(x1, y1);
        let c2 = self.map(x2, y2);
        let p1 = self.map(x, y);
        for i in 1..=CUBIC_STEPS {
            let t = i as f32 / CUBIC_STEPS as f32;
            let u = 1.0 - t;
            let px = u * u * u * p0.0
                + 3.0 * u * u * t * c1.0
                + 3.0 * u * t * t * c2.0
                + t * t * t * p1.0;
            let py = u * u * u * p0.1
                + 3.0 * u * u * t * c1.1
                + 3.0 * u * t * t * c2.1
                + t * t * t * p1.1;
            self.push((px, py));
        }
    }

    fn close(&mut self) {
        let start = self.subpath_start;
        self.push(start);
    }
}

const SUBSAMPLES: u32 = 4;

/// Scanline fill with the nonzero winding rule.
///
/// Each pixel row is sampled at four vertical offsets; horizontal span ends
/// contribute fractional coverage, which gives a lightly anti-aliased mask.
fn fill_nonzero(mask: &mut GrayImage, segments: &[[f32; 4]]) {
    if segments.is_empty() {
        return;
    }
    let (w, h) = mask.dimensions();

    let mut y_min = f32::MAX;
    let mut y_max = f32::MIN;
    for s in segments {
        y_min = y_min.min(s[1]).min(s[3]);
        y_max = y_max.max(s[1]).max(s[3]);
    }
    let row_start = y_min.floor().max(0.0) as u32;
    let row_end = (y_max.ceil().max(0.0) as u32).min(h);

    let mut coverage = vec![0.0f32; w as usize];
    let mut crossings: Vec<(f32, i32)> = Vec::new();

    for y in row_start..row_end {
        coverage.iter_mut().for_each(|c| *c = 0.0);

        for sub in 0..SUBSAMPLES {
            let ys = y as f32 + (sub as f32 + 0.5) / SUBSAMPLES as f32;
            crossings.clear();

            for s in segments {
                let (y0, y1) = (s[1], s[3]);
                if y0 == y1 {
                    continue;
                }
                let (lo, hi) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
                if ys < lo || ys >= hi {
                    continue;
                }
                let t = (ys - y0) / (y1 - y0);
                let x = s[0] + t * (s[2] - s[0]);
                crossings.push((x, if y1 > y0 { 1 } else { -1 }));
            }

            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            let mut span_start = 0.0f32;
            for &(x, dir) in &crossings {
                let was = winding;
                winding += dir;
                if was == 0 && winding != 0 {
                    span_start = x;
                } else if was != 0 && winding == 0 {
                    add_span(&mut coverage, w, span_start, x);
                }
            }
        }

        for (x, cov) in coverage.iter().enumerate() {
            let value = (cov.clamp(0.0, 1.0) * 255.0).round() as u8;
            if value > 0 {
                let p = mask.get_pixel_mut(x as u32, y);
                p[0] = p[0].saturating_add(value);
            }
        }
    }
}

fn add_span(coverage: &mut [f32], width: u32, start: f32, end: f32) {
    let start = start.max(0.0);
    let end = end.min(width as f32);
    if end <= start {
        return;
    }
    let first = start.floor() as usize;
    let last = (end.ceil() as usize).min(width as usize);
    for (x, cov) in coverage.iter_mut().enumerate().take(last).skip(first) {
        let left = x as f32;
        let covered = (end.min(left + 1.0) - start.max(left)).clamp(0.0, 1.0);
        *cov += covered / SUBSAMPLES as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_falls_back() {
        let font = BrandFont::load("/no/such/font.ttf", 48.0);
        assert!(font.is_fallback());
    }

    #[test]
    fn test_invalid_bytes_are_rejected() {
        assert!(BrandFont::from_bytes(vec![0, 1, 2, 3], 32.0).is_err());
    }

    #[test]
    fn test_bitmap_mask_has_ink() {
        let font = BrandFont::fallback(64.0);
        let mut mask = GrayImage::new(400, 120);
        font.render_mask(&mut mask, "K", (10.0, 10.0));
        let ink: u32 = mask.pixels().filter(|p| p[0] > 0).count() as u32;
        assert!(ink > 0, "expected visible glyph coverage");
    }

    #[test]
    fn test_bitmap_mask_is_binary_and_bounded() {
        let font = BrandFont::fallback(64.0);
        let mut mask = GrayImage::new(400, 120);
        font.render_mask(&mut mask, "Kah", (20.0, 20.0));
        let (w, _) = font.measure("Kah");
        for (x, y, p) in mask.enumerate_pixels() {
            assert!(p[0] == 0 || p[0] == 255);
            if p[0] > 0 {
                assert!(x as f32 >= 19.0 && (x as f32) < 21.0 + w, "ink outside bounds");
                assert!(y >= 19);
            }
        }
    }

    #[test]
    fn test_measure_scales_with_size() {
        let small = BrandFont::fallback(32.0);
        let large = BrandFont::fallback(128.0);
        let (ws, _) = small.measure("Studio");
        let (wl, _) = large.measure("Studio");
        assert!(wl > ws * 2.0);
    }

    #[test]
    fn test_fill_nonzero_square() {
        // A 10x10 axis-aligned square, clockwise in pixel space.
        let segments = vec![
            [5.0, 5.0, 15.0, 5.0],
            [15.0, 5.0, 15.0, 15.0],
            [15.0, 15.0, 5.0, 15.0],
            [5.0, 15.0, 5.0, 5.0],
        ];
        let mut mask = GrayImage::new(20, 20);
        fill_nonzero(&mut mask, &segments);

        assert_eq!(mask.get_pixel(10, 10)[0], 255);
        assert_eq!(mask.get_pixel(2, 2)[0], 0);
        assert_eq!(mask.get_pixel(18, 10)[0], 0);
    }

    #[test]
    fn test_fill_nonzero_hole() {
        // Outer square clockwise, inner square counter-clockwise: the hole
        // must stay empty under the nonzero rule.
        let segments = vec![
            [2.0, 2.0, 18.0, 2.0],
            [18.0, 2.0, 18.0, 18.0],
            [18.0, 18.0, 2.0, 18.0],
            [2.0, 18.0, 2.0, 2.0],
            [6.0, 6.0, 6.0, 14.0],
            [6.0, 14.0, 14.0, 14.0],
            [14.0, 14.0, 14.0, 6.0],
            [14.0, 6.0, 6.0, 6.0],
        ];
        let mut mask = GrayImage::new(20, 20);
        fill_nonzero(&mut mask, &segments);

        assert_eq!(mask.get_pixel(4, 10)[0], 255);
        assert_eq!(mask.get_pixel(10, 10)[0], 0);
    }
}
