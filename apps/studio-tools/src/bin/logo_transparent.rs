//! Derive the transparent lux logo by knocking the near-black background
//! out of the dark variant.

use anyhow::{bail, Result};
use brand_raster::filters;
use std::path::Path;

const THRESHOLD: u8 = 18;

fn main() -> Result<()> {
    studio_tools::init_logging();

    let src = Path::new(studio_tools::LUX_DIR).join("kah-digital-lux-a-dark.png");
    if !src.exists() {
        bail!("File not found: {}", src.display());
    }

    let mut img = filters::load_rgba(&src)?;
    filters::knock_out_background(&mut img, THRESHOLD);

    let out = src.with_file_name("kah-digital-lux-a-transparent.png");
    filters::save_png(&img, &out)?;
    println!("Generated {}", out.display());
    Ok(())
}
