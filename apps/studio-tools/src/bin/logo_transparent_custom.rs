//! Remove the black background from the hand-picked elegant logo export.
//! Uses a softer threshold than the lux derivation.

use anyhow::{bail, Result};
use brand_raster::filters;
use std::path::Path;

const THRESHOLD: u8 = 22;

fn main() -> Result<()> {
    studio_tools::init_logging();

    let src = Path::new(studio_tools::LOGO_DIR).join("Logo elegant de Kah-Digital.png");
    if !src.exists() {
        bail!("File not found: {}", src.display());
    }

    let mut img = filters::load_rgba(&src)?;
    filters::knock_out_background(&mut img, THRESHOLD);

    let out = src.with_file_name("Logo elegant Kah-Digital transparent.png");
    filters::save_png(&img, &out)?;
    println!("Generated {}", out.display());
    Ok(())
}
