//! Pixel filters for deriving logo variants from an existing PNG.

use crate::error::RasterError;
use image::RgbaImage;
use std::path::Path;
use tracing::debug;

/// Replace the RGB channels of every visible pixel, keeping alpha intact.
///
/// Used to produce the solid-black and high-contrast variants of the lux
/// logo: the rendered shapes keep their anti-aliased edges because only the
/// color channels change.
pub fn recolor(img: &mut RgbaImage, rgb: [u8; 3]) {
    for pixel in img.pixels_mut() {
        if pixel[3] == 0 {
            continue;
        }
        pixel[0] = rgb[0];
        pixel[1] = rgb[1];
        pixel[2] = rgb[2];
    }
}

/// Make every near-background pixel fully transparent.
///
/// A pixel is knocked out when all three of its color channels are at or
/// below `threshold`. Every other pixel keeps its alpha unchanged.
pub fn knock_out_background(img: &mut RgbaImage, threshold: u8) {
    let mut cleared = 0u64;
    for pixel in img.pixels_mut() {
        if pixel[0] <= threshold && pixel[1] <= threshold && pixel[2] <= threshold {
            pixel[3] = 0;
            cleared += 1;
        }
    }
    debug!(threshold, cleared, "background knock-out complete");
}

/// Load a PNG (or any supported raster file) as RGBA.
pub fn load_rgba(path: impl AsRef<Path>) -> Result<RgbaImage, RasterError> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|e| RasterError::ReadError(format!("{}: {}", path.display(), e)))?;
    Ok(img.to_rgba8())
}

/// Save an RGBA buffer as PNG.
pub fn save_png(img: &RgbaImage, path: impl AsRef<Path>) -> Result<(), RasterError> {
    let path = path.as_ref();
    img.save(path)
        .map_err(|e| RasterError::WriteError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_recolor_preserves_alpha() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([200, 180, 90, 255]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 128]));
        img.put_pixel(0, 1, Rgba([0, 0, 0, 0]));

        recolor(&mut img, [92, 62, 18]);

        assert_eq!(*img.get_pixel(0, 0), Rgba([92, 62, 18, 255]));
        assert_eq!(*img.get_pixel(1, 0), Rgba([92, 62, 18, 128]));
        // Fully transparent pixels are left alone.
        assert_eq!(*img.get_pixel(0, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_knock_out_clears_dark_pixels_only() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([5, 10, 17, 255])); // all below threshold
        img.put_pixel(1, 0, Rgba([5, 10, 40, 255])); // one channel above
        img.put_pixel(2, 0, Rgba([200, 180, 90, 200]));

        knock_out_background(&mut img, 18);

        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(1, 0)[3], 255);
        assert_eq!(*img.get_pixel(2, 0), Rgba([200, 180, 90, 200]));
    }

    #[test]
    fn test_knock_out_threshold_is_inclusive() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([18, 18, 18, 255]));
        img.put_pixel(1, 0, Rgba([19, 18, 18, 255]));

        knock_out_background(&mut img, 18);

        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(1, 0)[3], 255);
    }

    proptest! {
        #[test]
        fn prop_knock_out_alpha_contract(
            pixels in proptest::collection::vec(proptest::array::uniform4(0u8..=255), 16),
            threshold in 0u8..=64,
        ) {
            let mut img = RgbaImage::new(4, 4);
            for (i, p) in pixels.iter().enumerate() {
                img.put_pixel(i as u32 % 4, i as u32 / 4, Rgba(*p));
            }
            let before = img.clone();

            knock_out_background(&mut img, threshold);

            for (x, y, pixel) in img.enumerate_pixels() {
                let orig = before.get_pixel(x, y);
                let dark = orig[0] <= threshold && orig[1] <= threshold && orig[2] <= threshold;
                if dark {
                    prop_assert_eq!(pixel[3], 0);
                } else {
                    prop_assert_eq!(pixel[3], orig[3]);
                }
                // Color channels are never touched.
                prop_assert_eq!(&pixel.0[..3], &orig.0[..3]);
            }
        }
    }
}
