//! Render the DroPiPeche operating note from its markdown source.

use anyhow::{bail, Result};
use report_pdf::{markdown, ReportDocument, StyleSheet};
use std::path::Path;

fn main() -> Result<()> {
    studio_tools::init_logging();

    let note_path = Path::new("reports/DroPiPeche-Note-Fonctionnement-2026-02-25.md");
    let out_path = Path::new("reports/DroPiPeche-Note-Fonctionnement-2026-02-25.pdf");
    if !note_path.exists() {
        bail!("File not found: {}", note_path.display());
    }

    let text = std::fs::read_to_string(note_path)?;
    let styles = StyleSheet::dropipeche();
    let story = markdown::to_story(&text, &styles);

    let (regular, bold) = studio_tools::document_fonts();
    let doc = ReportDocument::new(
        "DroPiPeche - Note de fonctionnement",
        "DroPiPeche",
        regular,
        bold,
    );
    doc.render_to_file(&story, out_path)?;

    println!("Generated {}", out_path.display());
    Ok(())
}
