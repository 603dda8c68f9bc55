//! Solid-black variant of the transparent lux logo, for light backgrounds.

use anyhow::{bail, Result};
use brand_raster::filters;
use std::path::Path;

fn main() -> Result<()> {
    studio_tools::init_logging();

    let src = Path::new(studio_tools::LUX_DIR).join("kah-digital-lux-a-transparent.png");
    if !src.exists() {
        bail!("File not found: {}", src.display());
    }

    let mut img = filters::load_rgba(&src)?;
    filters::recolor(&mut img, [0, 0, 0]);

    let out = src.with_file_name("kah-digital-lux-a-transparent-black.png");
    filters::save_png(&img, &out)?;
    println!("Generated {}", out.display());
    Ok(())
}
