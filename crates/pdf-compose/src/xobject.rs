//! PNG decoding into PDF image XObjects.
//!
//! Samples are stored as DeviceRGB with a separate DeviceGray soft mask for
//! the alpha channel, both FlateDecode-compressed.

use crate::error::ComposeError;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{dictionary, Stream};
use std::io::Write;

/// A decoded PNG ready to be embedded as an image XObject.
pub struct LogoImage {
    pub width: u32,
    pub height: u32,
    rgb: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

impl LogoImage {
    /// Decode PNG bytes. Palette and low-bit images are expanded, 16-bit
    /// channels are reduced to 8-bit.
    pub fn from_png(bytes: &[u8]) -> Result<Self, ComposeError> {
        let mut decoder = png::Decoder::new(bytes);
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder
            .read_info()
            .map_err(|e| ComposeError::PngError(e.to_string()))?;
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e| ComposeError::PngError(e.to_string()))?;
        buf.truncate(info.buffer_size());

        let pixels = (info.width as usize) * (info.height as usize);
        let (rgb, alpha) = match info.color_type {
            png::ColorType::Rgb => (buf, None),
            png::ColorType::Rgba => {
                let mut rgb = Vec::with_capacity(pixels * 3);
                let mut alpha = Vec::with_capacity(pixels);
                for px in buf.chunks_exact(4) {
                    rgb.extend_from_slice(&px[..3]);
                    alpha.push(px[3]);
                }
                (rgb, Some(alpha))
            }
            png::ColorType::Grayscale => {
                let mut rgb = Vec::with_capacity(pixels * 3);
                for &v in &buf {
                    rgb.extend_from_slice(&[v, v, v]);
                }
                (rgb, None)
            }
            png::ColorType::GrayscaleAlpha => {
                let mut rgb = Vec::with_capacity(pixels * 3);
                let mut alpha = Vec::with_capacity(pixels);
                for px in buf.chunks_exact(2) {
                    rgb.extend_from_slice(&[px[0], px[0], px[0]]);
                    alpha.push(px[1]);
                }
                (rgb, Some(alpha))
            }
            other => {
                return Err(ComposeError::PngError(format!(
                    "Unsupported color type after expansion: {:?}",
                    other
                )))
            }
        };

        Ok(Self {
            width: info.width,
            height: info.height,
            rgb,
            alpha,
        })
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Build the image stream and, when the source carried alpha, the soft
    /// mask stream. The `SMask` reference is wired up by the caller once the
    /// mask has an object id.
    pub fn into_streams(self) -> Result<(Stream, Option<Stream>), ComposeError> {
        let smask = match &self.alpha {
            Some(alpha) => {
                let dict = dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => self.width as i64,
                    "Height" => self.height as i64,
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8,
                    "Filter" => "FlateDecode",
                };
                Some(Stream::new(dict, deflate(alpha)?))
            }
            None => None,
        };

        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        };
        let image = Stream::new(dict, deflate(&self.rgb)?);

        Ok((image, smask))
    }
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, ComposeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| ComposeError::OperationError(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| ComposeError::OperationError(e.to_string()))
}
