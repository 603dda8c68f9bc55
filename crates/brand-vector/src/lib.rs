//! Hand-assembled SVG documents for the vector logo variants.
//!
//! The logo SVGs are simple enough that they are built as XML strings
//! directly: a defs block with an optional vertical gradient, then shape and
//! text elements in document order. Only the elements the logo concepts need
//! are provided.

use std::fmt::Write as _;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Failed to write SVG: {0}")]
    WriteError(String),
}

/// An SVG document under construction.
pub struct SvgDocument {
    width: u32,
    height: u32,
    defs: Vec<String>,
    body: Vec<String>,
}

/// Format a coordinate without a trailing `.0` for whole values.
fn num(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Escape text content / attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            defs: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a top-to-bottom linear gradient with the given `(offset, color)`
    /// stops, referenced later as `url(#id)`.
    pub fn vertical_gradient(&mut self, id: &str, stops: &[(&str, &str)]) -> &mut Self {
        let mut def = format!(
            "    <linearGradient id=\"{}\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\n",
            escape(id)
        );
        for (offset, color) in stops {
            let _ = writeln!(
                def,
                "      <stop offset=\"{}\" stop-color=\"{}\"/>",
                escape(offset),
                escape(color)
            );
        }
        def.push_str("    </linearGradient>");
        self.defs.push(def);
        self
    }

    /// Full-canvas background rectangle.
    pub fn background(&mut self, fill: &str) -> &mut Self {
        self.body.push(format!(
            "  <rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width,
            self.height,
            escape(fill)
        ));
        self
    }

    pub fn circle_outline(
        &mut self,
        cx: f32,
        cy: f32,
        r: f32,
        stroke: &str,
        stroke_width: f32,
    ) -> &mut Self {
        self.body.push(format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            num(cx),
            num(cy),
            num(r),
            escape(stroke),
            num(stroke_width)
        ));
        self
    }

    pub fn circle_filled(&mut self, cx: f32, cy: f32, r: f32, fill: &str) -> &mut Self {
        self.body.push(format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            num(cx),
            num(cy),
            num(r),
            escape(fill)
        ));
        self
    }

    pub fn polygon_outline(
        &mut self,
        points: &[(f32, f32)],
        stroke: &str,
        stroke_width: f32,
    ) -> &mut Self {
        let points = points
            .iter()
            .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
            .collect::<Vec<_>>()
            .join(" ");
        self.body.push(format!(
            "  <polygon points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            points,
            escape(stroke),
            num(stroke_width)
        ));
        self
    }

    pub fn line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: &str,
        stroke_width: f32,
    ) -> &mut Self {
        self.body.push(format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            num(x1),
            num(y1),
            num(x2),
            num(y2),
            escape(stroke),
            num(stroke_width)
        ));
        self
    }

    /// Text element; `weight` is omitted when `None`.
    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        content: &str,
        family: &str,
        size: u32,
        weight: Option<u32>,
        fill: &str,
    ) -> &mut Self {
        let weight_attr = match weight {
            Some(w) => format!(" font-weight=\"{}\"", w),
            None => String::new(),
        };
        self.body.push(format!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\"{} fill=\"{}\">{}</text>",
            num(x),
            num(y),
            escape(family),
            size,
            weight_attr,
            escape(fill),
            escape(content)
        ));
        self
    }

    /// Assemble the final XML string.
    pub fn render(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        if !self.defs.is_empty() {
            svg.push_str("  <defs>\n");
            for def in &self.defs {
                svg.push_str(def);
                svg.push('\n');
            }
            svg.push_str("  </defs>\n");
        }
        for element in &self.body {
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), VectorError> {
        let path = path.as_ref();
        std::fs::write(path, self.render())
            .map_err(|e| VectorError::WriteError(format!("{}: {}", path.display(), e)))?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    #[test]
    fn test_document_skeleton() {
        let doc = SvgDocument::new(2000, 1000);
        let svg = doc.render();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("viewBox=\"0 0 2000 1000\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        // No defs block unless a gradient was added.
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn test_gradient_defs_and_reference() {
        let mut doc = SvgDocument::new(100, 100);
        doc.vertical_gradient(
            "gold",
            &[("0%", "#FCE6A4"), ("50%", "#E2C478"), ("100%", "#9C6F22")],
        );
        doc.text(10.0, 50.0, "K", "Times New Roman, serif", 36, Some(700), "url(#gold)");
        let svg = doc.render();

        assert!(svg.contains("<linearGradient id=\"gold\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">"));
        let stop = Regex::new("<stop offset=\"50%\" stop-color=\"#E2C478\"/>").unwrap();
        assert!(stop.is_match(&svg));
        assert!(svg.contains("fill=\"url(#gold)\""));
    }

    #[test]
    fn test_shape_elements() {
        let mut doc = SvgDocument::new(2000, 1000);
        doc.background("transparent")
            .circle_outline(420.0, 500.0, 260.0, "#D6B25E", 8.0)
            .line(760.0, 610.0, 1500.0, 610.0, "#B08C34", 4.0)
            .polygon_outline(
                &[(500.0, 190.0), (760.0, 450.0), (500.0, 710.0), (240.0, 450.0)],
                "#D6B25E",
                8.0,
            );
        let svg = doc.render();

        assert!(svg.contains("<rect width=\"2000\" height=\"1000\" fill=\"transparent\"/>"));
        assert!(svg.contains(
            "<circle cx=\"420\" cy=\"500\" r=\"260\" fill=\"none\" stroke=\"#D6B25E\" stroke-width=\"8\"/>"
        ));
        assert!(svg.contains("points=\"500,190 760,450 500,710 240,450\""));
    }

    #[test]
    fn test_text_escaping() {
        let mut doc = SvgDocument::new(10, 10);
        doc.text(0.0, 0.0, "A & B <C>", "serif", 12, None, "#000000");
        let svg = doc.render();
        assert!(svg.contains(">A &amp; B &lt;C&gt;</text>"));
    }

    #[test]
    fn test_whole_numbers_have_no_decimal_point() {
        assert_eq!(num(260.0), "260");
        assert_eq!(num(12.5), "12.5");
    }
}
