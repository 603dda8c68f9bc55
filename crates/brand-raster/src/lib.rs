//! Raster drawing primitives for Kah-Digital branding assets.
//!
//! This crate provides the pixel-level building blocks the studio tools are
//! composed from:
//! - three-stop vertical gradients (`gradient`)
//! - glyph mask rendering with a bitmap fallback (`font`)
//! - gradient text compositing with a soft drop shadow (`text`)
//! - coverage-based shapes: rings, diamonds, lines, dots (`draw`)
//! - derivative filters: recolor and background knock-out (`filters`)

pub mod bitmap;
pub mod draw;
pub mod error;
pub mod filters;
pub mod font;
pub mod gradient;
pub mod text;

pub use error::RasterError;
pub use font::BrandFont;
pub use gradient::{gradient_color, vertical_gradient};
pub use text::{draw_gradient_text, draw_text};

/// Convenience alias used across the workspace.
pub type Canvas = image::RgbaImage;
