//! Stamp the transparent logo onto every page of the client quote.

use anyhow::{bail, Result};
use pdf_compose::{stamp_document, Placement};
use std::path::Path;

fn main() -> Result<()> {
    studio_tools::init_logging();

    let logo_path =
        Path::new(studio_tools::LOGO_DIR).join("Logo elegant Kah-Digital transparent.png");
    let input_pdf = Path::new("DEVIS/DEVIS_DROPIPECHE-v1.pdf");
    let output_pdf = Path::new("DEVIS/DEVIS_DROPIPECHE-v1-logo-v4.pdf");

    if !logo_path.exists() {
        bail!("Logo not found: {}", logo_path.display());
    }
    if !input_pdf.exists() {
        bail!("PDF not found: {}", input_pdf.display());
    }

    let logo_png = std::fs::read(&logo_path)?;
    let pdf_bytes = std::fs::read(input_pdf)?;

    let stamped = stamp_document(&pdf_bytes, &logo_png, &Placement::default())?;
    std::fs::write(output_pdf, stamped)?;

    println!("Generated {}", output_pdf.display());
    Ok(())
}
