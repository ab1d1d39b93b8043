//! PDF serialization of a page layout using `lopdf`
//!
//! Each layout page becomes one PDF page. Text uses the base-14 Helvetica
//! faces so no fonts are embedded. Layout coordinates are millimetres from the
//! top-left corner; PDF user space is points from the bottom-left.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::info;

use crate::error::RenderError;
use crate::layout::metrics::MM_PER_POINT;
use crate::layout::{Align, DrawText, FontMetrics, PageGeometry, PageLayout, TextStyle};

fn to_pt(mm: f64) -> f32 {
    (mm / MM_PER_POINT) as f32
}

fn font_resource(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Normal => "F1",
        TextStyle::Bold => "F2",
    }
}

/// Encode text for a WinAnsi Type1 font; characters outside Latin-1 become `?`
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

struct PdfWriter {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    width_pt: f32,
    height_pt: f32,
    metrics: FontMetrics,
}

impl PdfWriter {
    fn new(geometry: &PageGeometry) -> Self {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();

        let regular_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = document.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            width_pt: to_pt(geometry.page_width),
            height_pt: to_pt(geometry.page_height),
            metrics: FontMetrics::helvetica(),
        }
    }

    fn text_ops(&self, draw: &DrawText, ops: &mut Vec<Operation>) {
        if draw.text.is_empty() {
            return;
        }
        let x_mm = match draw.align {
            Align::Left => draw.x,
            Align::Center => {
                draw.x - self.metrics.measure(&draw.text, draw.style, draw.font_size) / 2.0
            }
        };
        let x = to_pt(x_mm);
        let y = self.height_pt - to_pt(draw.y);

        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![font_resource(draw.style).into(), (draw.font_size as f32).into()],
        ));
        ops.push(Operation::new("Td", vec![x.into(), y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(&draw.text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    fn add_page(&mut self, draws: &[&DrawText]) -> Result<(), RenderError> {
        let mut operations = Vec::new();
        for draw in draws {
            self.text_ops(draw, &mut operations);
        }
        let content = Content { operations };
        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), content.encode()?));

        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), self.width_pt.into(), self.height_pt.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        let count = kids.len() as i64;
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        self.document.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

/// Serialize a layout to PDF bytes, pages in layout order
pub fn render_pdf(layout: &PageLayout, geometry: &PageGeometry) -> Result<Vec<u8>, RenderError> {
    let mut writer = PdfWriter::new(geometry);
    for draws in layout.pages() {
        writer.add_page(&draws)?;
    }
    let bytes = writer.finish()?;
    info!(pages = layout.page_count(), bytes = bytes.len(), "pdf written");
    Ok(bytes)
}
