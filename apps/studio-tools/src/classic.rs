//! Classic logo concepts: flat gold on a transparent canvas.
//!
//! Three compositions, each emitted as PNG and SVG:
//!   A - ring with K monogram, wordmark and underline
//!   B - centered wordmark with underline and accent dot
//!   C - diamond crest with K monogram and two-line wordmark

use crate::palette::{CLASSIC_SIZE, GOLD, GOLD_DARK, OFFWHITE, SERIF_BOLD_FONTS};
use anyhow::Result;
use brand_raster::{draw, filters, text, BrandFont, Canvas};
use brand_vector::SvgDocument;
use std::path::Path;
use tracing::info;

const WORDMARK: &str = "Kah-Digital";
const TAGLINE: &str = "Creative Studio";
const SVG_FAMILY: &str = "Cambria, Times New Roman, serif";

struct Fonts {
    wordmark: BrandFont,
    wordmark_small: BrandFont,
    monogram: BrandFont,
}

impl Fonts {
    fn load() -> Self {
        Self {
            wordmark: BrandFont::load_any(SERIF_BOLD_FONTS, 140.0),
            wordmark_small: BrandFont::load_any(SERIF_BOLD_FONTS, 90.0),
            monogram: BrandFont::load_any(SERIF_BOLD_FONTS, 320.0),
        }
    }
}

fn blank_canvas() -> Canvas {
    let (w, h) = CLASSIC_SIZE;
    Canvas::new(w, h)
}

fn concept_a(fonts: &Fonts) -> Canvas {
    let mut img = blank_canvas();

    let (cx, cy, r) = (420.0, 500.0, 260.0);
    draw::stroke_circle(&mut img, (cx, cy), r, 8.0, GOLD);
    text::draw_text(&mut img, "K", (cx - 95.0, cy - 180.0), &fonts.monogram, GOLD);

    text::draw_text(&mut img, WORDMARK, (760.0, 430.0), &fonts.wordmark, GOLD);
    draw::draw_line(&mut img, (760.0, 610.0), (1500.0, 610.0), 4.0, GOLD_DARK);

    img
}

fn concept_b(fonts: &Fonts) -> Canvas {
    let mut img = blank_canvas();
    let (w, h) = CLASSIC_SIZE;

    let (tw, th) = fonts.wordmark.measure(WORDMARK);
    let x = ((w as f32 - tw) / 2.0).floor();
    let y = ((h as f32 - th) / 2.0).floor() - 40.0;
    text::draw_text(&mut img, WORDMARK, (x, y), &fonts.wordmark, GOLD);

    draw::draw_line(&mut img, (x, y + th + 20.0), (x + tw, y + th + 20.0), 4.0, GOLD_DARK);
    draw::fill_circle(&mut img, (x - 14.0, y), 10.0, GOLD);

    img
}

fn concept_c(fonts: &Fonts) -> Canvas {
    let mut img = blank_canvas();

    let (cx, cy, size) = (500.0, 450.0, 260.0);
    let diamond = [
        (cx, cy - size),
        (cx + size, cy),
        (cx, cy + size),
        (cx - size, cy),
    ];
    draw::stroke_polygon(&mut img, &diamond, 8.0, GOLD);
    text::draw_text(&mut img, "K", (cx - 85.0, cy - 170.0), &fonts.monogram, GOLD);

    text::draw_text(&mut img, WORDMARK, (900.0, 420.0), &fonts.wordmark_small, GOLD);
    text::draw_text(&mut img, TAGLINE, (900.0, 520.0), &fonts.wordmark_small, OFFWHITE);

    img
}

fn svg_a() -> SvgDocument {
    let mut doc = SvgDocument::new(CLASSIC_SIZE.0, CLASSIC_SIZE.1);
    doc.background("transparent")
        .circle_outline(420.0, 500.0, 260.0, "#D6B25E", 8.0)
        .text(325.0, 600.0, "K", SVG_FAMILY, 320, Some(700), "#D6B25E")
        .text(760.0, 560.0, WORDMARK, SVG_FAMILY, 140, Some(700), "#D6B25E")
        .line(760.0, 610.0, 1500.0, 610.0, "#B08C34", 4.0);
    doc
}

fn svg_b() -> SvgDocument {
    let mut doc = SvgDocument::new(CLASSIC_SIZE.0, CLASSIC_SIZE.1);
    doc.background("transparent")
        .text(520.0, 560.0, WORDMARK, SVG_FAMILY, 140, Some(700), "#D6B25E")
        .line(520.0, 610.0, 1480.0, 610.0, "#B08C34", 4.0)
        .circle_filled(480.0, 520.0, 10.0, "#D6B25E");
    doc
}

fn svg_c() -> SvgDocument {
    let mut doc = SvgDocument::new(CLASSIC_SIZE.0, CLASSIC_SIZE.1);
    doc.background("transparent")
        .polygon_outline(
            &[(500.0, 190.0), (760.0, 450.0), (500.0, 710.0), (240.0, 450.0)],
            "#D6B25E",
            8.0,
        )
        .text(415.0, 560.0, "K", SVG_FAMILY, 320, Some(700), "#D6B25E")
        .text(900.0, 520.0, WORDMARK, SVG_FAMILY, 90, Some(700), "#D6B25E")
        .text(900.0, 620.0, TAGLINE, SVG_FAMILY, 80, None, "#F0ECE4");
    doc
}

/// Generate the three classic concepts as PNG and SVG into `out_dir`.
pub fn generate(out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)?;
    let fonts = Fonts::load();

    filters::save_png(&concept_a(&fonts), out_dir.join("kah-digital-logo-a.png"))?;
    filters::save_png(&concept_b(&fonts), out_dir.join("kah-digital-logo-b.png"))?;
    filters::save_png(&concept_c(&fonts), out_dir.join("kah-digital-logo-c.png"))?;

    svg_a().write_to(out_dir.join("kah-digital-logo-a.svg"))?;
    svg_b().write_to(out_dir.join("kah-digital-logo-b.svg"))?;
    svg_c().write_to(out_dir.join("kah-digital-logo-c.svg"))?;

    info!("generated classic logos in {}", out_dir.display());
    Ok(())
}
