//! Draws a [`LaidOutDocument`] into PDF bytes with `lopdf`.
//!
//! Only the standard Type1 fonts are referenced, never embedded, and no
//! Info dictionary or file id is written, so identical input yields identical
//! bytes.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use tracing::debug;

use crate::errors::AppError;
use crate::layout::font_metrics::{get_metrics, win_ansi_code, FontFamily, PageConfig};
use crate::layout::paginate::{LaidOutDocument, PlacedBlock};
use crate::templates::{BorderSides, Rgb, StyleRule, Template, TextAlign};

/// Ascent of the standard fonts as a fraction of the font size.
const ASCENT: f32 = 0.8;
const FOOTER_FONT: FontFamily = FontFamily::Helvetica;
const FOOTER_SIZE: f32 = 9.0;
const FOOTER_COLOR: Rgb = Rgb::new(0x7F, 0x8C, 0x8D);
const ACCENT_BAR_WIDTH: f32 = 12.0;

pub fn write_pdf(
    doc: &LaidOutDocument,
    template: &Template,
    page: &PageConfig,
) -> Result<Vec<u8>, AppError> {
    let mut document = Document::with_version("1.7");
    let pages_id = document.new_object_id();

    let mut fonts = Dictionary::new();
    for family in FontFamily::ALL {
        let font_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => family.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(family.resource_name(), font_id);
    }
    let resources_id = document.add_object(dictionary! { "Font" => fonts });

    let total = doc.page_count();
    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(total);
    for laid_out in &doc.pages {
        let mut canvas = Canvas::new(page);
        if let Some(color) = template.decoration.accent_bar {
            canvas.accent_bar(color);
        }
        for placed in &laid_out.blocks {
            canvas.draw_block(placed, template.style_for(placed.kind));
        }
        if template.decoration.page_numbers {
            canvas.footer(&format!("{} / {}", laid_out.number, total));
        }

        let encoded = canvas
            .content
            .encode()
            .map_err(|e| AppError::Render(format!("encoding page {}: {e}", laid_out.number)))?;
        let content_id = document.add_object(Stream::new(Dictionary::new(), encoded));
        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page.width_pt.into(), page.height_pt.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::from(*id)).collect();
    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => total as i64,
        }),
    );
    let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    document.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    document
        .save_to(&mut bytes)
        .map_err(|e| AppError::Render(format!("writing PDF: {e}")))?;

    debug!(pages = total, bytes = bytes.len(), "PDF written");
    Ok(bytes)
}

/// Content-stream builder for one page. Works in PDF space (origin bottom-left).
struct Canvas<'a> {
    page: &'a PageConfig,
    content: Content,
}

impl<'a> Canvas<'a> {
    fn new(page: &'a PageConfig) -> Self {
        Canvas {
            page,
            content: Content { operations: Vec::new() },
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn fill_color(&mut self, color: Rgb) {
        let [r, g, b] = color.components();
        self.push("rg", vec![r.into(), g.into(), b.into()]);
    }

    fn stroke_color(&mut self, color: Rgb) {
        let [r, g, b] = color.components();
        self.push("RG", vec![r.into(), g.into(), b.into()]);
    }

    fn draw_block(&mut self, placed: &PlacedBlock, style: &StyleRule) {
        let x = self.page.margin_left_pt;
        let width = self.page.content_width();
        let box_top = self.page.height_pt - self.page.margin_top_pt - placed.top;
        let box_bottom = box_top - placed.height;

        if let Some(background) = style.background {
            self.fill_color(background);
            self.push("re", vec![x.into(), box_bottom.into(), width.into(), placed.height.into()]);
            self.push("f", vec![]);
        }

        if let Some(border) = style.border {
            self.push("w", vec![border.width.into()]);
            self.stroke_color(border.color);
            match border.sides {
                BorderSides::Box => {
                    self.push("re", vec![x.into(), box_bottom.into(), width.into(), placed.height.into()]);
                }
                BorderSides::Bottom => {
                    self.push("m", vec![x.into(), box_bottom.into()]);
                    self.push("l", vec![(x + width).into(), box_bottom.into()]);
                }
            }
            self.push("S", vec![]);
        }

        let metrics = get_metrics(&style.font);
        let line_height = style.line_height();
        let half_leading = (line_height - style.font_size) / 2.0;
        let inner_width = width - 2.0 * style.padding;

        for (i, line) in placed.lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let line_top = box_top - style.padding - i as f32 * line_height;
            let baseline = line_top - half_leading - style.font_size * ASCENT;
            let line_x = match style.align {
                TextAlign::Left => x + style.padding,
                TextAlign::Center => {
                    let line_width = metrics.measure_pt(line, style.font_size);
                    x + style.padding + ((inner_width - line_width) / 2.0).max(0.0)
                }
            };
            self.text(style.font, style.font_size, style.color, line_x, baseline, line);
        }
    }

    fn text(&mut self, font: FontFamily, size: f32, color: Rgb, x: f32, y: f32, text: &str) {
        self.push("BT", vec![]);
        self.push("Tf", vec![Object::Name(font.resource_name().into_bytes()), size.into()]);
        self.fill_color(color);
        self.push("Td", vec![x.into(), y.into()]);
        self.push("Tj", vec![Object::string_literal(to_win_ansi(text))]);
        self.push("ET", vec![]);
    }

    fn footer(&mut self, label: &str) {
        let width = get_metrics(&FOOTER_FONT).measure_pt(label, FOOTER_SIZE);
        let x = (self.page.width_pt - width) / 2.0;
        let y = self.page.margin_bottom_pt / 2.0;
        self.text(FOOTER_FONT, FOOTER_SIZE, FOOTER_COLOR, x, y, label);
    }

    fn accent_bar(&mut self, color: Rgb) {
        self.fill_color(color);
        self.push(
            "re",
            vec![0.into(), 0.into(), ACCENT_BAR_WIDTH.into(), self.page.height_pt.into()],
        );
        self.push("f", vec![]);
    }
}

/// Encodes text for a WinAnsiEncoding font; characters without a code become `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_code(c).unwrap_or(b'?'))
        .collect()
}
