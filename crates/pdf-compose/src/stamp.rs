//! Logo stamping: overlay an image onto every page of an existing PDF.
//!
//! The overlay is placed in the top-right corner of each page, scaled to
//! fit within a fraction of the page size while preserving aspect ratio.

use crate::error::ComposeError;
use crate::xobject::LogoImage;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use tracing::{debug, info};

const LOGO_RESOURCE_NAME: &str = "KDLogo";

/// Page-relative placement of the stamped logo.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    /// Maximum logo width as a fraction of page width.
    pub max_width_frac: f32,
    /// Maximum logo height as a fraction of page height.
    pub max_height_frac: f32,
    /// Margin from the top and right edges as a fraction of page width.
    pub margin_frac: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            max_width_frac: 0.22,
            max_height_frac: 0.08,
            margin_frac: 0.04,
        }
    }
}

/// Stamp `logo_png` onto every page of `pdf_bytes`.
///
/// The algorithm:
/// 1. Decode the logo and register it (and its soft mask) as XObjects.
/// 2. For each page: read the effective MediaBox, compute the scaled
///    top-right placement, materialize page-level Resources with the logo
///    registered, and append a `q cm Do Q` content stream.
/// 3. Save the document; the page count never changes.
pub fn stamp_document(
    pdf_bytes: &[u8],
    logo_png: &[u8],
    placement: &Placement,
) -> Result<Vec<u8>, ComposeError> {
    let mut doc =
        Document::load_mem(pdf_bytes).map_err(|e| ComposeError::ParseError(e.to_string()))?;

    let logo = LogoImage::from_png(logo_png)?;
    let ratio = logo.aspect_ratio();
    let (mut image, smask) = logo.into_streams()?;

    if let Some(smask) = smask {
        let smask_id = doc.add_object(Object::Stream(smask));
        image.dict.set("SMask", Object::Reference(smask_id));
    }
    let image_id = doc.add_object(Object::Stream(image));

    let page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();
    if page_ids.is_empty() {
        return Err(ComposeError::OperationError("PDF has no pages".into()));
    }

    for page_id in &page_ids {
        stamp_page(&mut doc, *page_id, image_id, ratio, placement)?;
    }

    doc.compress();
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ComposeError::OperationError(format!("Failed to save stamped PDF: {}", e)))?;

    info!(pages = page_ids.len(), "stamped logo onto document");
    Ok(buffer)
}

fn stamp_page(
    doc: &mut Document,
    page_id: ObjectId,
    image_id: ObjectId,
    ratio: f32,
    placement: &Placement,
) -> Result<(), ComposeError> {
    let [x0, y0, x1, y1] = effective_media_box(doc, page_id)?;
    let (page_w, page_h) = (x1 - x0, y1 - y0);

    let max_w = page_w * placement.max_width_frac;
    let max_h = page_h * placement.max_height_frac;
    let logo_w = max_w.min(max_h * ratio);
    let logo_h = logo_w / ratio;
    let margin = page_w * placement.margin_frac;
    let x = x1 - logo_w - margin;
    let y = y1 - logo_h - margin;

    register_logo_resource(doc, page_id, image_id)?;

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    logo_w.into(),
                    0.into(),
                    0.into(),
                    logo_h.into(),
                    x.into(),
                    y.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(LOGO_RESOURCE_NAME.into())]),
            Operation::new("Q", vec![]),
        ],
    };
    let encoded = content
        .encode()
        .map_err(|e| ComposeError::OperationError(e.to_string()))?;
    let overlay_id = doc.add_object(Object::Stream(Stream::new(Dictionary::new(), encoded)));

    append_page_content(doc, page_id, overlay_id)?;
    debug!(?page_id, x, y, logo_w, logo_h, "stamped page");
    Ok(())
}

/// Resolve the MediaBox for a page, walking up the page tree for inherited
/// values. Falls back to A4 if nothing declares one.
fn effective_media_box(doc: &Document, page_id: ObjectId) -> Result<[f32; 4], ComposeError> {
    let mut current = page_id;
    // Bounded walk so a malformed Parent cycle cannot hang us.
    for _ in 0..32 {
        let dict = doc
            .get_object(current)
            .and_then(Object::as_dict)
            .map_err(|e| ComposeError::ParseError(format!("Invalid page object: {}", e)))?;

        if let Ok(media_box) = dict.get(b"MediaBox") {
            let media_box = resolve(doc, media_box)?;
            let array = media_box
                .as_array()
                .map_err(|_| ComposeError::ParseError("MediaBox is not an array".into()))?;
            if array.len() != 4 {
                return Err(ComposeError::ParseError("MediaBox has wrong arity".into()));
            }
            let mut out = [0f32; 4];
            for (i, value) in array.iter().enumerate() {
                out[i] = value
                    .as_float()
                    .map_err(|_| ComposeError::ParseError("MediaBox entry not numeric".into()))?;
            }
            return Ok(out);
        }

        match dict.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent) => current = parent,
            Err(_) => break,
        }
    }
    Ok([0.0, 0.0, 595.276, 841.89])
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Result<&'a Object, ComposeError> {
    match obj {
        Object::Reference(id) => doc
            .get_object(*id)
            .map_err(|e| ComposeError::ParseError(e.to_string())),
        other => Ok(other),
    }
}

/// Give the page an inline Resources dictionary with the logo XObject
/// registered.
///
/// Inherited or shared Resources are cloned onto the page first so the
/// registration never leaks into unrelated pages.
fn register_logo_resource(
    doc: &mut Document,
    page_id: ObjectId,
    image_id: ObjectId,
) -> Result<(), ComposeError> {
    // Read phase: materialize the effective resources.
    let mut resources = effective_resources(doc, page_id)?;

    let mut xobjects = match resources.get(b"XObject") {
        Ok(existing) => resolve(doc, existing)?
            .as_dict()
            .map(Dictionary::clone)
            .unwrap_or_default(),
        Err(_) => Dictionary::new(),
    };
    xobjects.set(LOGO_RESOURCE_NAME, Object::Reference(image_id));
    resources.set("XObject", Object::Dictionary(xobjects));

    // Write phase.
    let page = doc
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| ComposeError::OperationError(format!("Invalid page dictionary: {}", e)))?;
    page.set("Resources", Object::Dictionary(resources));
    Ok(())
}

fn effective_resources(doc: &Document, page_id: ObjectId) -> Result<Dictionary, ComposeError> {
    let mut current = page_id;
    for _ in 0..32 {
        let dict = doc
            .get_object(current)
            .and_then(Object::as_dict)
            .map_err(|e| ComposeError::ParseError(format!("Invalid page object: {}", e)))?;

        if let Ok(resources) = dict.get(b"Resources") {
            return Ok(resolve(doc, resources)?
                .as_dict()
                .map(Dictionary::clone)
                .unwrap_or_default());
        }
        match dict.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent) => current = parent,
            Err(_) => break,
        }
    }
    Ok(Dictionary::new())
}

/// Append an overlay content stream after the page's existing content.
fn append_page_content(
    doc: &mut Document,
    page_id: ObjectId,
    overlay_id: ObjectId,
) -> Result<(), ComposeError> {
    let existing = {
        let dict = doc
            .get_object(page_id)
            .and_then(Object::as_dict)
            .map_err(|e| ComposeError::ParseError(format!("Invalid page object: {}", e)))?;
        dict.get(b"Contents").ok().cloned()
    };

    let contents = match existing {
        Some(Object::Array(mut items)) => {
            items.push(Object::Reference(overlay_id));
            Object::Array(items)
        }
        Some(Object::Reference(existing_id)) => Object::Array(vec![
            Object::Reference(existing_id),
            Object::Reference(overlay_id),
        ]),
        Some(other) => {
            // Direct stream object: move it behind a reference first.
            let moved = doc.add_object(other);
            Object::Array(vec![
                Object::Reference(moved),
                Object::Reference(overlay_id),
            ])
        }
        None => Object::Reference(overlay_id),
    };

    let page = doc
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| ComposeError::OperationError(format!("Invalid page dictionary: {}", e)))?;
    page.set("Contents", contents);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;
    use pretty_assertions::assert_eq;

    /// Minimal N-page PDF with an explicit MediaBox on each page.
    fn create_test_pdf(num_pages: u32) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut kids = Vec::new();
        for i in 0..num_pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Td", vec![50.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(format!("Page {}", i + 1))]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Object::Stream(Stream::new(
                Dictionary::new(),
                content.encode().unwrap(),
            )));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "Contents" => Object::Reference(content_id),
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(Object::Reference(page_id));
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Count" => num_pages as i64,
            "Kids" => kids,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    fn logo_png() -> Vec<u8> {
        let mut img = image::RgbaImage::new(20, 10);
        for p in img.pixels_mut() {
            *p = image::Rgba([214, 178, 94, 255]);
        }
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
        bytes
    }

    #[test]
    fn test_stamp_preserves_page_count() {
        for pages in [1u32, 3, 7] {
            let pdf = create_test_pdf(pages);
            let stamped = stamp_document(&pdf, &logo_png(), &Placement::default()).unwrap();
            let doc = Document::load_mem(&stamped).unwrap();
            assert_eq!(doc.get_pages().len() as u32, pages);
        }
    }

    #[test]
    fn test_every_page_references_the_logo() {
        let pdf = create_test_pdf(3);
        let stamped = stamp_document(&pdf, &logo_png(), &Placement::default()).unwrap();
        let doc = Document::load_mem(&stamped).unwrap();

        for (_, page_id) in doc.get_pages() {
            let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
            let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
            let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
            assert!(xobjects.has(LOGO_RESOURCE_NAME.as_bytes()));

            let content = doc.get_page_content(page_id).unwrap();
            let text = String::from_utf8_lossy(&content);
            assert!(text.contains("/KDLogo Do"), "missing overlay on page");
        }
    }

    #[test]
    fn test_placement_is_top_right() {
        let pdf = create_test_pdf(1);
        let stamped = stamp_document(&pdf, &logo_png(), &Placement::default()).unwrap();
        let doc = Document::load_mem(&stamped).unwrap();

        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let content = doc.get_page_content(page_id).unwrap();
        let decoded = Content::decode(&content).unwrap();

        let cm = decoded
            .operations
            .iter()
            .find(|op| op.operator == "cm")
            .expect("overlay must set a matrix");
        let nums: Vec<f32> = cm
            .operands
            .iter()
            .map(|o| o.as_float().unwrap())
            .collect();
        let (logo_w, logo_h, x, y) = (nums[0], nums[3], nums[4], nums[5]);

        // 20x10 logo on a 612x792 page: height-bound is 63.36pt, width-bound
        // is 134.64pt, so the width cap does not bind.
        assert!(logo_w <= 612.0 * 0.22 + 0.5);
        assert!(logo_h <= 792.0 * 0.08 + 0.5);
        assert!((logo_w / logo_h - 2.0).abs() < 0.01);

        let margin = 612.0 * 0.04;
        assert!((x - (612.0 - logo_w - margin)).abs() < 0.5);
        assert!((y - (792.0 - logo_h - margin)).abs() < 0.5);
    }

    #[test]
    fn test_missing_logo_alpha_still_stamps() {
        let mut img = image::RgbImage::new(8, 8);
        for p in img.pixels_mut() {
            *p = image::Rgb([0, 0, 0]);
        }
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();

        let pdf = create_test_pdf(2);
        let stamped = stamp_document(&pdf, &bytes, &Placement::default()).unwrap();
        assert_eq!(Document::load_mem(&stamped).unwrap().get_pages().len(), 2);
    }

    #[test]
    fn test_invalid_pdf_is_an_error() {
        let result = stamp_document(b"not a pdf", &logo_png(), &Placement::default());
        assert!(result.is_err());
    }
}
