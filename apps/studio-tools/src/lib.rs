//! Kah-Digital studio tools.
//!
//! Shared building blocks for the asset and document binaries: the brand
//! palette, the classic and lux logo generators, and the story builders for
//! the DroPiPeche client PDFs. Each binary stays a thin wrapper around one
//! of these entry points.

pub mod classic;
pub mod lux;
pub mod palette;
pub mod reports;

use report_pdf::{Builtin, DocFont};

/// Default output directory for classic logo assets.
pub const LOGO_DIR: &str = "assets/kah-digital-logo";

/// Default output directory for the lux set.
pub const LUX_DIR: &str = "assets/kah-digital-logo/lux";

/// Initialize logging for a binary, honoring `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// The regular/bold pair used by the client PDFs.
pub fn document_fonts() -> (DocFont, DocFont) {
    (
        DocFont::load(palette::SANS_FONTS, Builtin::Helvetica),
        DocFont::load(palette::SANS_BOLD_FONTS, Builtin::HelveticaBold),
    )
}
