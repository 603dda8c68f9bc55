//! Lux logo concepts: gradient-filled wordmark with drop shadow, against a
//! near-black and a transparent background.

use crate::palette::{
    GOLD_BOT, GOLD_LINE, GOLD_MID, GOLD_TOP, IVORY, LUX_BLACK, LUX_SIZE, SERIF_BOLD_FONTS,
    TRANSPARENT,
};
use anyhow::Result;
use brand_raster::{draw, filters, gradient, text, BrandFont, Canvas};
use brand_vector::SvgDocument;
use image::Rgba;
use std::path::Path;
use tracing::info;

const WORDMARK: &str = "Kah-Digital";
const TAGLINE: &str = "Creative Studio";
const SVG_FAMILY: &str = "Times New Roman, serif";

const GRADIENT_STOPS: [(&str, &str); 3] =
    [("0%", "#FCE6A4"), ("50%", "#E2C478"), ("100%", "#9C6F22")];

struct Fonts {
    wordmark: BrandFont,
    wordmark_small: BrandFont,
    monogram: BrandFont,
}

impl Fonts {
    fn load() -> Self {
        Self {
            wordmark: BrandFont::load_any(SERIF_BOLD_FONTS, 150.0),
            wordmark_small: BrandFont::load_any(SERIF_BOLD_FONTS, 110.0),
            monogram: BrandFont::load_any(SERIF_BOLD_FONTS, 360.0),
        }
    }
}

fn canvas(bg: Rgba<u8>) -> Canvas {
    let (w, h) = LUX_SIZE;
    Canvas::from_pixel(w, h, bg)
}

fn gold_gradient() -> Canvas {
    let (w, h) = LUX_SIZE;
    gradient::vertical_gradient(w, h, GOLD_TOP, GOLD_MID, GOLD_BOT)
}

fn concept_a(fonts: &Fonts, bg: Rgba<u8>) -> Canvas {
    let mut img = canvas(bg);
    let grad = gold_gradient();

    let (cx, cy, r) = (520.0, 600.0, 300.0);
    draw::stroke_circle(&mut img, (cx, cy), r, 7.0, GOLD_LINE);
    text::draw_gradient_text(&mut img, "K", (cx - 120.0, cy - 215.0), &fonts.monogram, &grad);

    text::draw_gradient_text(&mut img, WORDMARK, (920.0, 520.0), &fonts.wordmark, &grad);
    draw::draw_line(&mut img, (920.0, 700.0), (1800.0, 700.0), 4.0, GOLD_LINE);

    img
}

fn concept_b(fonts: &Fonts, bg: Rgba<u8>) -> Canvas {
    let mut img = canvas(bg);
    let grad = gold_gradient();
    let (w, h) = LUX_SIZE;

    let (tw, th) = fonts.wordmark.measure(WORDMARK);
    let x = ((w as f32 - tw) / 2.0).floor();
    let y = ((h as f32 - th) / 2.0).floor() - 30.0;
    text::draw_gradient_text(&mut img, WORDMARK, (x, y), &fonts.wordmark, &grad);
    draw::draw_line(&mut img, (x, y + th + 30.0), (x + tw, y + th + 30.0), 3.0, GOLD_LINE);

    img
}

fn concept_c(fonts: &Fonts, bg: Rgba<u8>) -> Canvas {
    let mut img = canvas(bg);
    let grad = gold_gradient();

    let (cx, cy, size) = (520.0, 500.0, 300.0);
    let diamond = [
        (cx, cy - size),
        (cx + size, cy),
        (cx, cy + size),
        (cx - size, cy),
    ];
    draw::stroke_polygon(&mut img, &diamond, 6.0, GOLD_LINE);
    text::draw_gradient_text(&mut img, "K", (cx - 120.0, cy - 215.0), &fonts.monogram, &grad);

    text::draw_gradient_text(&mut img, WORDMARK, (900.0, 520.0), &fonts.wordmark_small, &grad);
    text::draw_text(&mut img, TAGLINE, (900.0, 650.0), &fonts.wordmark_small, IVORY);

    img
}

fn lux_svg() -> SvgDocument {
    let mut doc = SvgDocument::new(LUX_SIZE.0, LUX_SIZE.1);
    doc.vertical_gradient("gold", &GRADIENT_STOPS);
    doc.background("transparent");
    doc
}

fn svg_a() -> SvgDocument {
    let mut doc = lux_svg();
    doc.circle_outline(520.0, 600.0, 300.0, "#BC9234", 7.0)
        .text(400.0, 680.0, "K", SVG_FAMILY, 360, Some(700), "url(#gold)")
        .text(920.0, 650.0, WORDMARK, SVG_FAMILY, 150, Some(700), "url(#gold)")
        .line(920.0, 700.0, 1800.0, 700.0, "#BC9234", 4.0);
    doc
}

fn svg_b() -> SvgDocument {
    let mut doc = lux_svg();
    doc.text(650.0, 650.0, WORDMARK, SVG_FAMILY, 150, Some(700), "url(#gold)")
        .line(650.0, 710.0, 1750.0, 710.0, "#BC9234", 3.0);
    doc
}

fn svg_c() -> SvgDocument {
    let mut doc = lux_svg();
    doc.polygon_outline(
        &[(520.0, 200.0), (820.0, 500.0), (520.0, 800.0), (220.0, 500.0)],
        "#BC9234",
        6.0,
    )
    .text(400.0, 680.0, "K", SVG_FAMILY, 360, Some(700), "url(#gold)")
    .text(900.0, 620.0, WORDMARK, SVG_FAMILY, 110, Some(700), "url(#gold)")
    .text(900.0, 740.0, TAGLINE, SVG_FAMILY, 100, None, "#EBE5D9");
    doc
}

/// Generate the lux set into `out_dir`: three concepts against the dark and
/// transparent backgrounds (six PNGs) plus three SVGs.
pub fn generate(out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)?;
    let fonts = Fonts::load();

    for (suffix, bg) in [("dark", LUX_BLACK), ("transparent", TRANSPARENT)] {
        filters::save_png(
            &concept_a(&fonts, bg),
            out_dir.join(format!("kah-digital-lux-a-{}.png", suffix)),
        )?;
        filters::save_png(
            &concept_b(&fonts, bg),
            out_dir.join(format!("kah-digital-lux-b-{}.png", suffix)),
        )?;
        filters::save_png(
            &concept_c(&fonts, bg),
            out_dir.join(format!("kah-digital-lux-c-{}.png", suffix)),
        )?;
    }

    svg_a().write_to(out_dir.join("kah-digital-lux-a.svg"))?;
    svg_b().write_to(out_dir.join("kah-digital-lux-b.svg"))?;
    svg_c().write_to(out_dir.join("kah-digital-lux-c.svg"))?;

    info!("generated lux logos in {}", out_dir.display());
    Ok(())
}
