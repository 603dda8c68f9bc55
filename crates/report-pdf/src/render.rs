//! A4 page layout: greedy word wrap, pagination, tables and images.
//!
//! The renderer walks the story top-down with a cursor measured from the
//! page top. Each flowable reserves the vertical room it needs; when the
//! cursor would pass the bottom margin the current page is flushed and a
//! fresh one started. All geometry is in PDF points, y-up.

use crate::error::ReportError;
use crate::fonts::DocFont;
use crate::story::{Cell, CellContent, Flowable, HAlign, Table};
use crate::style::{Color, FontRole, ParagraphStyle};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::path::Path;
use tracing::info;

/// Points per millimeter.
pub const MM: f32 = 72.0 / 25.4;

pub const A4_WIDTH: f32 = 595.276;
pub const A4_HEIGHT: f32 = 841.89;

const MARGIN_LEFT: f32 = 18.0 * MM;
const MARGIN_RIGHT: f32 = 18.0 * MM;
const MARGIN_TOP: f32 = 16.0 * MM;
const MARGIN_BOTTOM: f32 = 16.0 * MM;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

/// An A4 report document with a regular/bold font pair.
pub struct ReportDocument {
    title: String,
    author: String,
    regular: DocFont,
    bold: DocFont,
}

impl ReportDocument {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        regular: DocFont,
        bold: DocFont,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            regular,
            bold,
        }
    }

    fn font(&self, role: FontRole) -> (&DocFont, &'static str) {
        match role {
            FontRole::Regular => (&self.regular, FONT_REGULAR),
            FontRole::Bold => (&self.bold, FONT_BOLD),
        }
    }

    /// Render the story to PDF bytes.
    pub fn render(&self, story: &[Flowable]) -> Result<Vec<u8>, ReportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();

        let regular_id = self.regular.register(&mut doc)?;
        let bold_id = self.bold.register(&mut doc)?;

        let mut ctx = RenderCtx {
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            ops: Vec::new(),
            y: A4_HEIGHT - MARGIN_TOP,
            xobjects: Vec::new(),
        };

        for flowable in story {
            self.emit(&mut ctx, flowable)?;
        }
        ctx.flush_page(true);

        ctx.finish(&self.title, &self.author, regular_id, bold_id)
    }

    pub fn render_to_file(
        &self,
        story: &[Flowable],
        path: impl AsRef<Path>,
    ) -> Result<(), ReportError> {
        let path = path.as_ref();
        let bytes = self.render(story)?;
        std::fs::write(path, bytes)
            .map_err(|e| ReportError::RenderError(format!("{}: {}", path.display(), e)))?;
        info!("generated {}", path.display());
        Ok(())
    }

    fn emit(&self, ctx: &mut RenderCtx, flowable: &Flowable) -> Result<(), ReportError> {
        match flowable {
            Flowable::Spacer(height) => {
                ctx.y -= height;
                if ctx.y < MARGIN_BOTTOM {
                    ctx.flush_page(false);
                }
            }
            Flowable::HRule { thickness, color } => {
                ctx.ensure_room(thickness + 2.0);
                ctx.stroke_line(
                    MARGIN_LEFT,
                    ctx.y,
                    A4_WIDTH - MARGIN_RIGHT,
                    ctx.y,
                    *thickness,
                    *color,
                );
                ctx.y -= thickness;
            }
            Flowable::Paragraph {
                text,
                style,
                bullet,
            } => self.emit_paragraph(ctx, text, style, bullet.as_deref()),
            Flowable::Image {
                png,
                max_width,
                max_height,
            } => {
                let (name, ratio) = ctx.add_image(png)?;
                let width = max_width.min(max_height * ratio);
                let height = width / ratio;
                ctx.ensure_room(height);
                ctx.y -= height;
                ctx.draw_image(&name, MARGIN_LEFT, ctx.y, width, height);
            }
            Flowable::Table(table) => self.emit_table(ctx, table)?,
        }
        Ok(())
    }

    fn emit_paragraph(
        &self,
        ctx: &mut RenderCtx,
        text: &str,
        style: &ParagraphStyle,
        bullet: Option<&str>,
    ) {
        ctx.y -= style.space_before;
        let (font, font_name) = self.font(style.font);
        let max_width = A4_WIDTH - MARGIN_LEFT - MARGIN_RIGHT - style.left_indent;
        let lines = wrap(font, text, style.size, max_width);

        for (i, line) in lines.iter().enumerate() {
            ctx.ensure_room(style.leading);
            ctx.y -= style.leading;
            let baseline = ctx.y + style.leading - style.size;

            if i == 0 {
                if let Some(bullet) = bullet {
                    ctx.show_text(
                        bullet,
                        font_name,
                        style.size,
                        style.color,
                        MARGIN_LEFT + style.bullet_indent,
                        baseline,
                    );
                }
            }
            if !line.is_empty() {
                ctx.show_text(
                    line,
                    font_name,
                    style.size,
                    style.color,
                    MARGIN_LEFT + style.left_indent,
                    baseline,
                );
            }
        }
    }

    fn emit_table(&self, ctx: &mut RenderCtx, table: &Table) -> Result<(), ReportError> {
        let padding = table.style.cell_padding;
        let total_width: f32 = table.col_widths.iter().sum();

        for (row_index, row) in table.rows.iter().enumerate() {
            // Measure the row first.
            let mut row_height = 0.0f32;
            let mut prepared: Vec<PreparedCell> = Vec::with_capacity(row.len());
            for (col, cell) in row.iter().enumerate() {
                let width = table.col_widths.get(col).copied().unwrap_or(0.0);
                let prep = self.prepare_cell(ctx, cell, width - 2.0 * padding)?;
                row_height = row_height.max(prep.height + 2.0 * padding);
                prepared.push(prep);
            }

            ctx.ensure_room(row_height);
            let top = ctx.y;
            let bottom = top - row_height;

            // Backgrounds under content.
            let background = if row_index == 0 {
                table.style.header_background
            } else {
                table
                    .style
                    .row_backgrounds
                    .map(|(even, odd)| if (row_index - 1) % 2 == 0 { even } else { odd })
            };
            if let Some(color) = background {
                ctx.fill_rect(MARGIN_LEFT, bottom, total_width, row_height, color);
            }

            // Content.
            let mut x = MARGIN_LEFT;
            for (col, cell) in row.iter().enumerate() {
                let width = table.col_widths.get(col).copied().unwrap_or(0.0);
                self.draw_cell(ctx, &prepared[col], cell, x, top, width, padding);
                x += width;
            }

            // Grid on top.
            if let Some((thickness, color)) = table.style.grid {
                let mut x = MARGIN_LEFT;
                for col in 0..row.len() {
                    let width = table.col_widths.get(col).copied().unwrap_or(0.0);
                    ctx.stroke_rect(x, bottom, width, row_height, thickness, color);
                    x += width;
                }
            }

            ctx.y = bottom;
        }
        Ok(())
    }

    fn prepare_cell(
        &self,
        ctx: &mut RenderCtx,
        cell: &Cell,
        inner_width: f32,
    ) -> Result<PreparedCell, ReportError> {
        match &cell.content {
            CellContent::Empty => Ok(PreparedCell {
                height: 0.0,
                lines: Vec::new(),
                image: None,
            }),
            CellContent::Text { text, style } => {
                let (font, _) = self.font(style.font);
                let lines = wrap(font, text, style.size, inner_width.max(1.0));
                Ok(PreparedCell {
                    height: lines.len() as f32 * style.leading,
                    lines,
                    image: None,
                })
            }
            CellContent::Image {
                png,
                max_width,
                max_height,
            } => {
                let (name, ratio) = ctx.add_image(png)?;
                let width = max_width.min(inner_width).min(max_height * ratio);
                let height = width / ratio;
                Ok(PreparedCell {
                    height,
                    lines: Vec::new(),
                    image: Some((name, width, height)),
                })
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        ctx: &mut RenderCtx,
        prepared: &PreparedCell,
        cell: &Cell,
        x: f32,
        top: f32,
        width: f32,
        padding: f32,
    ) {
        match &cell.content {
            CellContent::Empty => {}
            CellContent::Text { style, .. } => {
                let (font, font_name) = self.font(style.font);
                let mut line_top = top - padding;
                for line in &prepared.lines {
                    let baseline = line_top - style.size;
                    let text_x = match cell.align {
                        HAlign::Left => x + padding,
                        HAlign::Right => {
                            x + width - padding - font.text_width(line, style.size)
                        }
                    };
                    ctx.show_text(line, font_name, style.size, style.color, text_x, baseline);
                    line_top -= style.leading;
                }
            }
            CellContent::Image { .. } => {
                if let Some((name, img_w, img_h)) = &prepared.image {
                    let img_x = match cell.align {
                        HAlign::Left => x + padding,
                        HAlign::Right => x + width - padding - img_w,
                    };
                    ctx.draw_image(name, img_x, top - padding - img_h, *img_w, *img_h);
                }
            }
        }
    }
}

struct PreparedCell {
    height: f32,
    lines: Vec<String>,
    image: Option<(String, f32, f32)>,
}

/// Greedy word wrap against measured widths.
fn wrap(font: &DocFont, text: &str, size: f32, max_width: f32) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if font.text_width(&candidate, size) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

struct RenderCtx {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    ops: Vec<Operation>,
    y: f32,
    /// Registered image XObjects: resource name and object id.
    xobjects: Vec<(String, ObjectId)>,
}

impl RenderCtx {
    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < MARGIN_BOTTOM {
            self.flush_page(false);
        }
    }

    /// Emit the accumulated operations as a page. With `last`, an empty
    /// operation list still yields a page when the document has none yet.
    fn flush_page(&mut self, last: bool) {
        if self.ops.is_empty() && !(last && self.page_ids.is_empty()) {
            self.y = A4_HEIGHT - MARGIN_TOP;
            return;
        }
        let content = Content {
            operations: std::mem::take(&mut self.ops),
        };
        let encoded = content.encode().unwrap_or_default();
        let content_id = self
            .doc
            .add_object(Object::Stream(Stream::new(Dictionary::new(), encoded)));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(self.pages_id),
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(A4_WIDTH),
                Object::Real(A4_HEIGHT),
            ],
            "Resources" => Object::Reference(self.resources_id),
            "Contents" => Object::Reference(content_id),
        });
        self.page_ids.push(page_id);
        self.y = A4_HEIGHT - MARGIN_TOP;
    }

    fn show_text(
        &mut self,
        text: &str,
        font_name: &str,
        size: f32,
        color: Color,
        x: f32,
        baseline: f32,
    ) {
        let encoded = crate::encoding::encode(text);
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![Object::Name(font_name.into()), size.into()],
        ));
        self.ops.push(Operation::new(
            "rg",
            vec![color.r.into(), color.g.into(), color.b.into()],
        ));
        self.ops.push(Operation::new(
            "Tm",
            vec![
                1.into(),
                0.into(),
                0.into(),
                1.into(),
                x.into(),
                baseline.into(),
            ],
        ));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(encoded, StringFormat::Hexadecimal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    #[allow(clippy::too_many_arguments)]
    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color) {
        self.ops.push(Operation::new(
            "RG",
            vec![color.r.into(), color.g.into(), color.b.into()],
        ));
        self.ops
            .push(Operation::new("w", vec![thickness.into()]));
        self.ops
            .push(Operation::new("m", vec![x0.into(), y0.into()]));
        self.ops
            .push(Operation::new("l", vec![x1.into(), y1.into()]));
        self.ops.push(Operation::new("S", vec![]));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(Operation::new(
            "rg",
            vec![color.r.into(), color.g.into(), color.b.into()],
        ));
        self.ops.push(Operation::new(
            "re",
            vec![x.into(), y.into(), width.into(), height.into()],
        ));
        self.ops.push(Operation::new("f", vec![]));
    }

    #[allow(clippy::too_many_arguments)]
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, thickness: f32, color: Color) {
        self.ops.push(Operation::new(
            "RG",
            vec![color.r.into(), color.g.into(), color.b.into()],
        ));
        self.ops
            .push(Operation::new("w", vec![thickness.into()]));
        self.ops.push(Operation::new(
            "re",
            vec![x.into(), y.into(), width.into(), height.into()],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    fn draw_image(&mut self, name: &str, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(Operation::new("q", vec![]));
        self.ops.push(Operation::new(
            "cm",
            vec![
                width.into(),
                0.into(),
                0.into(),
                height.into(),
                x.into(),
                y.into(),
            ],
        ));
        self.ops
            .push(Operation::new("Do", vec![Object::Name(name.into())]));
        self.ops.push(Operation::new("Q", vec![]));
    }

    /// Register a PNG as an image XObject, returning its resource name and
    /// aspect ratio.
    fn add_image(&mut self, png: &[u8]) -> Result<(String, f32), ReportError> {
        let logo = pdf_compose::LogoImage::from_png(png)?;
        let ratio = logo.aspect_ratio();
        let (mut image, smask) = logo.into_streams()?;
        if let Some(smask) = smask {
            let smask_id = self.doc.add_object(Object::Stream(smask));
            image.dict.set("SMask", Object::Reference(smask_id));
        }
        let image_id = self.doc.add_object(Object::Stream(image));
        let name = format!("Im{}", self.xobjects.len() + 1);
        self.xobjects.push((name.clone(), image_id));
        Ok((name, ratio))
    }

    fn finish(
        mut self,
        title: &str,
        author: &str,
        regular_id: ObjectId,
        bold_id: ObjectId,
    ) -> Result<Vec<u8>, ReportError> {
        let mut fonts = Dictionary::new();
        fonts.set(FONT_REGULAR, Object::Reference(regular_id));
        fonts.set(FONT_BOLD, Object::Reference(bold_id));

        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts));
        if !self.xobjects.is_empty() {
            let mut xobjects = Dictionary::new();
            for (name, id) in &self.xobjects {
                xobjects.set(name.as_bytes(), Object::Reference(*id));
            }
            resources.set("XObject", Object::Dictionary(xobjects));
        }
        self.doc
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|&id| Object::Reference(id))
            .collect();
        let count = kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Count" => count,
                "Kids" => kids,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(self.pages_id),
        });
        self.doc.trailer.set("Root", Object::Reference(catalog_id));

        let info_id = self.doc.add_object(dictionary! {
            "Title" => pdf_text_string(title),
            "Author" => pdf_text_string(author),
            "Producer" => Object::string_literal("report-pdf"),
        });
        self.doc.trailer.set("Info", Object::Reference(info_id));

        self.doc.compress();
        let mut buffer = Vec::new();
        self.doc
            .save_to(&mut buffer)
            .map_err(|e| ReportError::RenderError(e.to_string()))?;
        Ok(buffer)
    }
}

/// PDF text string: plain literal for ASCII, UTF-16BE with BOM otherwise.
fn pdf_text_string(text: &str) -> Object {
    if text.is_ascii() {
        Object::string_literal(text)
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes, StringFormat::Hexadecimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::Builtin;
    use crate::story::TableStyle;
    use crate::style::StyleSheet;
    use pretty_assertions::assert_eq;

    fn test_document() -> ReportDocument {
        ReportDocument::new(
            "Statut du projet",
            "DroPiPeche",
            DocFont::builtin(Builtin::Helvetica),
            DocFont::builtin(Builtin::HelveticaBold),
        )
    }

    fn page_count(bytes: &[u8]) -> usize {
        Document::load_mem(bytes).unwrap().get_pages().len()
    }

    #[test]
    fn test_empty_story_yields_one_page() {
        let bytes = test_document().render(&[]).unwrap();
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_simple_story_renders() {
        let styles = StyleSheet::dropipeche();
        let story = vec![
            Flowable::paragraph("DroPiPeche - Statut du projet", &styles.title),
            Flowable::Spacer(6.0),
            Flowable::HRule {
                thickness: 1.0,
                color: styles.rule_color,
            },
            Flowable::paragraph("Le prototype fonctionnel est prêt.", &styles.body),
            Flowable::bullet("Parcours création de compte.", &styles.bullet),
        ];
        let bytes = test_document().render(&story).unwrap();
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_long_story_paginates() {
        let styles = StyleSheet::dropipeche();
        let mut story = Vec::new();
        for i in 0..200 {
            story.push(Flowable::paragraph(
                format!("Ligne de contenu numéro {} pour forcer la pagination.", i),
                &styles.body,
            ));
        }
        let bytes = test_document().render(&story).unwrap();
        assert!(page_count(&bytes) > 1);
    }

    #[test]
    fn test_info_dictionary() {
        let bytes = test_document().render(&[]).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let info_ref = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_object(info_ref).unwrap().as_dict().unwrap();
        let title = info.get(b"Title").unwrap().as_str().unwrap();
        assert_eq!(title, b"Statut du projet");
    }

    #[test]
    fn test_table_renders_with_grid() {
        let styles = StyleSheet::dropipeche();
        let table = Table {
            col_widths: vec![62.0 * MM, 45.0 * MM, 75.0 * MM],
            rows: vec![
                vec![
                    Cell::text("Phase", &styles.body),
                    Cell::text("Période", &styles.body),
                    Cell::text("Livrables clés", &styles.body),
                ],
                vec![
                    Cell::text("Cadrage & specs finales", &styles.body),
                    Cell::text("S1–S2", &styles.body),
                    Cell::text("Spécifications validées.", &styles.body),
                ],
            ],
            style: TableStyle {
                grid: Some((0.5, styles.rule_color)),
                header_background: Some(Color::hex("#EEF2F7")),
                row_backgrounds: Some((Color::WHITE, Color::hex("#FAFBFD"))),
                cell_padding: 2.0,
            },
        };
        let bytes = test_document().render(&[Flowable::Table(table)]).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);

        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let content = doc.get_page_content(page_id).unwrap();
        let decoded = Content::decode(&content).unwrap();
        // Backgrounds and grid produce rectangle operators.
        assert!(decoded.operations.iter().any(|op| op.operator == "re"));
        assert!(decoded.operations.iter().any(|op| op.operator == "Tj"));
    }

    #[test]
    fn test_image_flowable_registers_xobject() {
        let mut img = image::RgbaImage::new(10, 5);
        for p in img.pixels_mut() {
            *p = image::Rgba([214, 178, 94, 255]);
        }
        let mut png = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let story = vec![Flowable::Image {
            png,
            max_width: 60.0 * MM,
            max_height: 28.0 * MM,
        }];
        let bytes = test_document().render(&story).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();

        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
        let resources_id = page.get(b"Resources").unwrap().as_reference().unwrap();
        let resources = doc.get_object(resources_id).unwrap().as_dict().unwrap();
        let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
        assert!(xobjects.has(b"Im1"));
    }

    #[test]
    fn test_wrap_respects_width() {
        let font = DocFont::builtin(Builtin::Helvetica);
        let text = "Ajouter deux semaines de marge pour retours client et aléas fournisseurs.";
        let lines = wrap(&font, text, 10.5, 120.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(font.text_width(line, 10.5) <= 120.0 + 0.01, "line too wide: {}", line);
        }
        // No words lost.
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_single_overlong_word() {
        let font = DocFont::builtin(Builtin::Helvetica);
        let lines = wrap(&font, "incompressible", 12.0, 10.0);
        assert_eq!(lines, vec!["incompressible".to_string()]);
    }
}
