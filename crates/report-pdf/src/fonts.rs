//! Document fonts: embedded TrueType with a base-14 Helvetica fallback.
//!
//! A `DocFont` is loaded from the first readable candidate path. When no
//! candidate parses, it degrades to Helvetica (or Helvetica-Bold), which
//! every PDF viewer ships; the run never fails on a missing font file.
//!
//! Embedded fonts carry a full WinAnsi width array and a FontDescriptor
//! with a FlateDecode FontFile2 stream, so measurements used for word
//! wrapping match what the viewer renders.

use crate::encoding::winansi_char;
use crate::error::ReportError;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};
use ttf_parser::Face;

const FIRST_CHAR: u8 = 32;

/// Base-14 font to fall back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Helvetica,
    HelveticaBold,
}

impl Builtin {
    fn base_name(self) -> &'static str {
        match self {
            Builtin::Helvetica => "Helvetica",
            Builtin::HelveticaBold => "Helvetica-Bold",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            Builtin::Helvetica => &HELVETICA_WIDTHS,
            Builtin::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

/// Width used for codes outside the builtin ASCII table.
const BUILTIN_DEFAULT_WIDTH: u16 = 556;

pub struct DocFont {
    kind: FontKind,
}

enum FontKind {
    Embedded {
        data: Vec<u8>,
        ps_name: String,
        /// Advances in 1/1000 em for WinAnsi codes 32..=255.
        widths: Vec<u16>,
        ascent: f32,
        descent: f32,
        cap_height: f32,
        bbox: [f32; 4],
    },
    Builtin(Builtin),
}

impl DocFont {
    /// Load the first parseable candidate, falling back to `builtin`.
    pub fn load<P: AsRef<Path>>(candidates: &[P], builtin: Builtin) -> Self {
        for path in candidates {
            let path = path.as_ref();
            match std::fs::read(path).map_err(|e| e.to_string()).and_then(|data| {
                Self::from_bytes(data).map_err(|e| e.to_string())
            }) {
                Ok(font) => {
                    debug!("embedded font {}", path.display());
                    return font;
                }
                Err(_) => continue,
            }
        }
        warn!("no usable font candidate, falling back to {}", builtin.base_name());
        Self::builtin(builtin)
    }

    pub fn builtin(builtin: Builtin) -> Self {
        Self {
            kind: FontKind::Builtin(builtin),
        }
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ReportError> {
        let face = Face::parse(&data, 0).map_err(|e| ReportError::FontError(e.to_string()))?;
        let upem = face.units_per_em() as f32;
        let to_milli = 1000.0 / upem;

        let mut widths = Vec::with_capacity(256 - FIRST_CHAR as usize);
        for code in FIRST_CHAR..=255 {
            let ch = winansi_char(code);
            let advance = face
                .glyph_index(ch)
                .and_then(|gid| face.glyph_hor_advance(gid))
                .map(|adv| (adv as f32 * to_milli).round() as u16)
                .unwrap_or(0);
            widths.push(advance);
        }

        let ps_name = face
            .names()
            .into_iter()
            .find(|n| n.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
            .and_then(|n| n.to_string())
            .unwrap_or_else(|| "Embedded".to_string());

        let gbox = face.global_bounding_box();
        let bbox = [
            gbox.x_min as f32 * to_milli,
            gbox.y_min as f32 * to_milli,
            gbox.x_max as f32 * to_milli,
            gbox.y_max as f32 * to_milli,
        ];
        let ascent = face.ascender() as f32 * to_milli;
        let descent = face.descender() as f32 * to_milli;
        let cap_height = face
            .capital_height()
            .map(|c| c as f32 * to_milli)
            .unwrap_or(ascent * 0.8);

        Ok(Self {
            kind: FontKind::Embedded {
                data,
                ps_name,
                widths,
                ascent,
                descent,
                cap_height,
                bbox,
            },
        })
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.kind, FontKind::Embedded { .. })
    }

    /// Advance of a WinAnsi code in 1/1000 em.
    fn advance_milli(&self, code: u8) -> u16 {
        match &self.kind {
            FontKind::Embedded { widths, .. } => {
                if code >= FIRST_CHAR {
                    widths[(code - FIRST_CHAR) as usize]
                } else {
                    0
                }
            }
            FontKind::Builtin(builtin) => {
                if (0x20..=0x7E).contains(&code) {
                    builtin.widths()[(code - 0x20) as usize]
                } else {
                    BUILTIN_DEFAULT_WIDTH
                }
            }
        }
    }

    /// Width of `text` in points at the given size.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let encoded = crate::encoding::encode(text);
        let milli: u32 = encoded.iter().map(|&c| self.advance_milli(c) as u32).sum();
        milli as f32 * size / 1000.0
    }

    /// Register the font in the document and return the font dictionary id.
    pub fn register(&self, doc: &mut Document) -> Result<ObjectId, ReportError> {
        match &self.kind {
            FontKind::Builtin(builtin) => {
                let id = doc.add_object(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => builtin.base_name(),
                    "Encoding" => "WinAnsiEncoding",
                });
                Ok(id)
            }
            FontKind::Embedded {
                data,
                ps_name,
                widths,
                ascent,
                descent,
                cap_height,
                bbox,
            } => {
                let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
                encoder
                    .write_all(data)
                    .map_err(|e| ReportError::FontError(e.to_string()))?;
                let compressed = encoder
                    .finish()
                    .map_err(|e| ReportError::FontError(e.to_string()))?;

                let file_id = doc.add_object(Object::Stream(Stream::new(
                    dictionary! {
                        "Filter" => "FlateDecode",
                        "Length1" => data.len() as i64,
                    },
                    compressed,
                )));

                let descriptor_id = doc.add_object(dictionary! {
                    "Type" => "FontDescriptor",
                    "FontName" => Object::Name(ps_name.as_bytes().to_vec()),
                    "Flags" => 32,
                    "FontBBox" => bbox.iter().map(|&v| Object::Real(v)).collect::<Vec<_>>(),
                    "ItalicAngle" => 0,
                    "Ascent" => Object::Real(*ascent),
                    "Descent" => Object::Real(*descent),
                    "CapHeight" => Object::Real(*cap_height),
                    "StemV" => 80,
                    "FontFile2" => Object::Reference(file_id),
                });

                let widths_array: Vec<Object> =
                    widths.iter().map(|&w| Object::Integer(w as i64)).collect();

                let id = doc.add_object(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "TrueType",
                    "BaseFont" => Object::Name(ps_name.as_bytes().to_vec()),
                    "FirstChar" => FIRST_CHAR as i64,
                    "LastChar" => 255,
                    "Widths" => widths_array,
                    "FontDescriptor" => Object::Reference(descriptor_id),
                    "Encoding" => "WinAnsiEncoding",
                });
                Ok(id)
            }
        }
    }
}

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_candidates_fall_back() {
        let font = DocFont::load(&["/no/such/font.ttf"], Builtin::Helvetica);
        assert!(!font.is_embedded());
    }

    #[test]
    fn test_builtin_text_width() {
        let font = DocFont::builtin(Builtin::Helvetica);
        // 'i' (222) is narrower than 'm' (833).
        assert!(font.text_width("iii", 10.0) < font.text_width("mmm", 10.0));
        // space = 278/1000 * 10pt
        assert!((font.text_width(" ", 10.0) - 2.78).abs() < 0.001);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let regular = DocFont::builtin(Builtin::Helvetica);
        let bold = DocFont::builtin(Builtin::HelveticaBold);
        let text = "Planning de réalisation";
        assert!(bold.text_width(text, 10.5) > regular.text_width(text, 10.5));
    }

    #[test]
    fn test_builtin_registration() {
        let mut doc = Document::with_version("1.5");
        let font = DocFont::builtin(Builtin::HelveticaBold);
        let id = font.register(&mut doc).unwrap();

        let dict = doc.get_object(id).unwrap().as_dict().unwrap();
        assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Type1");
        assert_eq!(
            dict.get(b"BaseFont").unwrap().as_name().unwrap(),
            b"Helvetica-Bold"
        );
        assert_eq!(
            dict.get(b"Encoding").unwrap().as_name().unwrap(),
            b"WinAnsiEncoding"
        );
    }

    #[test]
    fn test_invalid_font_bytes_error() {
        assert!(DocFont::from_bytes(vec![0xDE, 0xAD]).is_err());
    }
}
