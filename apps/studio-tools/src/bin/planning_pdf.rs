//! Render the DroPiPeche delivery planning document to PDF, with the
//! transparent logo in the header when available.

use anyhow::Result;
use report_pdf::{ReportDocument, StyleSheet};
use std::path::Path;
use tracing::warn;

fn main() -> Result<()> {
    studio_tools::init_logging();

    let logo_path =
        Path::new(studio_tools::LOGO_DIR).join("Logo elegant Kah-Digital transparent.png");
    let out_path = Path::new("reports/DroPiPeche-Planning-Kah-Digital-2026-02-26-v4.pdf");
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let logo_png = match std::fs::read(&logo_path) {
        Ok(bytes) => Some(bytes),
        Err(_) => {
            warn!("logo {} unavailable, header stays text-only", logo_path.display());
            None
        }
    };

    let styles = StyleSheet::planning();
    let story = studio_tools::reports::planning_story(&styles, logo_png);

    let (regular, bold) = studio_tools::document_fonts();
    let doc = ReportDocument::new(
        "DroPiPeche — Planning de réalisation",
        "KAH-DIGITAL",
        regular,
        bold,
    );
    doc.render_to_file(&story, out_path)?;

    println!("Generated {}", out_path.display());
    Ok(())
}
