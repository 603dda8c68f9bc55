//! Generate the three classic logo concepts (PNG + SVG).

use anyhow::Result;
use std::path::Path;

fn main() -> Result<()> {
    studio_tools::init_logging();
    let out_dir = Path::new(studio_tools::LOGO_DIR);
    studio_tools::classic::generate(out_dir)?;
    println!("Generated logos in {}", out_dir.display());
    Ok(())
}
