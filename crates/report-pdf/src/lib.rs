//! Flowing-layout PDF reports over `lopdf`.
//!
//! A document is a list of [`Flowable`]s laid out top-down on A4 pages:
//! wrapped paragraphs, spacers, rules, tables with backgrounds and grids,
//! and PNG images. Text is WinAnsi-encoded; fonts are either embedded
//! TrueType files or base-14 Helvetica.

pub mod encoding;
pub mod error;
pub mod fonts;
pub mod markdown;
pub mod render;
pub mod story;
pub mod style;

pub use error::ReportError;
pub use fonts::{Builtin, DocFont};
pub use render::{ReportDocument, A4_HEIGHT, A4_WIDTH, MM};
pub use story::{Cell, CellContent, Flowable, HAlign, Table, TableStyle};
pub use style::{Color, FontRole, ParagraphStyle, StyleSheet};
