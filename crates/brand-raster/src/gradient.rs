//! Three-stop vertical gradient generation.
//!
//! The gradient interpolates top→mid over the upper half of the image and
//! mid→bottom over the lower half, replicated across every column.

use image::{Rgba, RgbaImage};

/// Linearly interpolate a single channel.
fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Color of the gradient at normalized position `t` in `[0, 1]`.
pub fn gradient_color(top: Rgba<u8>, mid: Rgba<u8>, bottom: Rgba<u8>, t: f32) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);
    let (from, to, tt) = if t < 0.5 {
        (top, mid, t / 0.5)
    } else {
        (mid, bottom, (t - 0.5) / 0.5)
    };
    Rgba([
        lerp(from[0], to[0], tt),
        lerp(from[1], to[1], tt),
        lerp(from[2], to[2], tt),
        255,
    ])
}

/// Build a fully opaque vertical gradient image.
///
/// Row 0 is `top`, the middle row is `mid` and the last row is `bottom`.
pub fn vertical_gradient(
    width: u32,
    height: u32,
    top: Rgba<u8>,
    mid: Rgba<u8>,
    bottom: Rgba<u8>,
) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    let span = height.saturating_sub(1).max(1) as f32;

    for y in 0..height {
        let color = gradient_color(top, mid, bottom, y as f32 / span);
        for x in 0..width {
            img.put_pixel(x, y, color);
        }
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const TOP: Rgba<u8> = Rgba([252, 230, 164, 255]);
    const MID: Rgba<u8> = Rgba([226, 196, 120, 255]);
    const BOT: Rgba<u8> = Rgba([156, 111, 34, 255]);

    #[test]
    fn test_first_row_is_top_color() {
        let img = vertical_gradient(4, 120, TOP, MID, BOT);
        assert_eq!(*img.get_pixel(0, 0), TOP);
        assert_eq!(*img.get_pixel(3, 0), TOP);
    }

    #[test]
    fn test_last_row_is_bottom_color() {
        let img = vertical_gradient(4, 120, TOP, MID, BOT);
        assert_eq!(*img.get_pixel(2, 119), BOT);
    }

    #[test]
    fn test_middle_row_is_mid_color() {
        // Odd height puts a row exactly at t = 0.5.
        let img = vertical_gradient(2, 121, TOP, MID, BOT);
        assert_eq!(*img.get_pixel(0, 60), MID);
    }

    #[test]
    fn test_rows_are_uniform() {
        let img = vertical_gradient(16, 33, TOP, MID, BOT);
        for y in 0..33 {
            let first = img.get_pixel(0, y);
            for x in 1..16 {
                assert_eq!(img.get_pixel(x, y), first, "row {} not uniform", y);
            }
        }
    }

    #[test]
    fn test_single_row_gradient_does_not_panic() {
        let img = vertical_gradient(3, 1, TOP, MID, BOT);
        assert_eq!(*img.get_pixel(0, 0), TOP);
    }

    proptest! {
        #[test]
        fn prop_gradient_endpoints(
            top in proptest::array::uniform3(0u8..=255),
            mid in proptest::array::uniform3(0u8..=255),
            bottom in proptest::array::uniform3(0u8..=255),
            height in 3u32..256,
        ) {
            let height = height | 1; // odd, so the center row lands on t = 0.5
            let top = Rgba([top[0], top[1], top[2], 255]);
            let mid = Rgba([mid[0], mid[1], mid[2], 255]);
            let bottom = Rgba([bottom[0], bottom[1], bottom[2], 255]);

            let img = vertical_gradient(1, height, top, mid, bottom);
            prop_assert_eq!(*img.get_pixel(0, 0), top);
            prop_assert_eq!(*img.get_pixel(0, (height - 1) / 2), mid);
            prop_assert_eq!(*img.get_pixel(0, height - 1), bottom);
        }
    }
}
