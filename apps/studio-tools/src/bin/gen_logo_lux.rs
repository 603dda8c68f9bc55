//! Generate the lux logo set: three concepts against dark and transparent
//! backgrounds, plus SVG variants.

use anyhow::Result;
use std::path::Path;

fn main() -> Result<()> {
    studio_tools::init_logging();
    let out_dir = Path::new(studio_tools::LUX_DIR);
    studio_tools::lux::generate(out_dir)?;
    println!("Generated lux logos in {}", out_dir.display());
    Ok(())
}
