//! Brand palette and canvas constants shared by the logo generators.

use image::Rgba;

// Classic palette.
pub const GOLD: Rgba<u8> = Rgba([214, 178, 94, 255]); // #D6B25E
pub const GOLD_DARK: Rgba<u8> = Rgba([176, 140, 52, 255]); // #B08C34
pub const OFFWHITE: Rgba<u8> = Rgba([240, 236, 228, 255]); // #F0ECE4

// Lux palette.
pub const LUX_BLACK: Rgba<u8> = Rgba([9, 9, 9, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const GOLD_TOP: Rgba<u8> = Rgba([252, 230, 164, 255]); // #FCE6A4
pub const GOLD_MID: Rgba<u8> = Rgba([226, 196, 120, 255]); // #E2C478
pub const GOLD_BOT: Rgba<u8> = Rgba([156, 111, 34, 255]); // #9C6F22
pub const GOLD_LINE: Rgba<u8> = Rgba([188, 146, 52, 255]); // #BC9234
pub const IVORY: Rgba<u8> = Rgba([235, 229, 217, 255]); // #EBE5D9

// Canvas sizes.
pub const CLASSIC_SIZE: (u32, u32) = (2000, 1000);
pub const LUX_SIZE: (u32, u32) = (2400, 1200);

/// Serif bold candidates for the wordmark and monogram. The raster font
/// loader falls back to its built-in bitmap font when none is present.
pub const SERIF_BOLD_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSerif-Bold.ttf",
    "/Library/Fonts/Times New Roman Bold.ttf",
    "C:/Windows/Fonts/timesbd.ttf",
];

/// Sans candidates embedded in the client PDFs; Helvetica otherwise.
pub const SANS_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "C:/Windows/Fonts/segoeui.ttf",
];

pub const SANS_BOLD_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "C:/Windows/Fonts/segoeuib.ttf",
];
