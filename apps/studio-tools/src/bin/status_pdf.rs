//! Render the DroPiPeche project status report to PDF.

use anyhow::Result;
use report_pdf::{ReportDocument, StyleSheet};
use std::path::Path;

fn main() -> Result<()> {
    studio_tools::init_logging();

    let out_path = Path::new("reports/DroPiPeche-Statut-2026-02-22.pdf");
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let styles = StyleSheet::dropipeche();
    let story = studio_tools::reports::status_story(&styles);

    let (regular, bold) = studio_tools::document_fonts();
    let doc = ReportDocument::new("DroPiPeche - Statut du projet", "DroPiPeche", regular, bold);
    doc.render_to_file(&story, out_path)?;

    println!("Generated {}", out_path.display());
    Ok(())
}
