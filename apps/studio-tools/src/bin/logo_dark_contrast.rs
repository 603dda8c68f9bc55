//! Deep-gold variant of the transparent lux logo, for maximum contrast on
//! white.

use anyhow::{bail, Result};
use brand_raster::filters;
use std::path::Path;

// #5C3E12
const DARK_GOLD: [u8; 3] = [92, 62, 18];

fn main() -> Result<()> {
    studio_tools::init_logging();

    let src = Path::new(studio_tools::LUX_DIR).join("kah-digital-lux-a-transparent.png");
    if !src.exists() {
        bail!("File not found: {}", src.display());
    }

    let mut img = filters::load_rgba(&src)?;
    filters::recolor(&mut img, DARK_GOLD);

    let out = src.with_file_name("kah-digital-lux-a-transparent-dark.png");
    filters::save_png(&img, &out)?;
    println!("Generated {}", out.display());
    Ok(())
}
