//! Flowables: the content a document is built from, in reading order.

use crate::style::{Color, ParagraphStyle};

/// One block of document content.
pub enum Flowable {
    Paragraph {
        text: String,
        style: ParagraphStyle,
        /// Bullet glyph drawn in the indent gutter, e.g. `•`.
        bullet: Option<String>,
    },
    /// Vertical gap in points.
    Spacer(f32),
    /// Full-width horizontal rule.
    HRule { thickness: f32, color: Color },
    Table(Table),
    /// Standalone image scaled to fit the given box, in points.
    Image {
        png: Vec<u8>,
        max_width: f32,
        max_height: f32,
    },
}

impl Flowable {
    pub fn paragraph(text: impl Into<String>, style: &ParagraphStyle) -> Self {
        Flowable::Paragraph {
            text: text.into(),
            style: style.clone(),
            bullet: None,
        }
    }

    pub fn bullet(text: impl Into<String>, style: &ParagraphStyle) -> Self {
        Flowable::Paragraph {
            text: text.into(),
            style: style.clone(),
            bullet: Some("•".to_string()),
        }
    }
}

/// Horizontal alignment inside a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Right,
}

pub enum CellContent {
    Text { text: String, style: ParagraphStyle },
    Image {
        png: Vec<u8>,
        max_width: f32,
        max_height: f32,
    },
    Empty,
}

pub struct Cell {
    pub content: CellContent,
    pub align: HAlign,
}

impl Cell {
    pub fn text(text: impl Into<String>, style: &ParagraphStyle) -> Self {
        Cell {
            content: CellContent::Text {
                text: text.into(),
                style: style.clone(),
            },
            align: HAlign::Left,
        }
    }

    pub fn text_right(text: impl Into<String>, style: &ParagraphStyle) -> Self {
        Cell {
            content: CellContent::Text {
                text: text.into(),
                style: style.clone(),
            },
            align: HAlign::Right,
        }
    }

    pub fn image(png: Vec<u8>, max_width: f32, max_height: f32) -> Self {
        Cell {
            content: CellContent::Image {
                png,
                max_width,
                max_height,
            },
            align: HAlign::Right,
        }
    }

    pub fn empty() -> Self {
        Cell {
            content: CellContent::Empty,
            align: HAlign::Left,
        }
    }
}

pub struct TableStyle {
    /// Grid line thickness and color, or no grid.
    pub grid: Option<(f32, Color)>,
    /// Background behind the first row.
    pub header_background: Option<Color>,
    /// Alternating backgrounds for the remaining rows.
    pub row_backgrounds: Option<(Color, Color)>,
    /// Padding inside each cell, points.
    pub cell_padding: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            grid: None,
            header_background: None,
            row_backgrounds: None,
            cell_padding: 2.0,
        }
    }
}

pub struct Table {
    /// Column widths in points; rows are clipped/wrapped to these.
    pub col_widths: Vec<f32>,
    pub rows: Vec<Vec<Cell>>,
    pub style: TableStyle,
}
