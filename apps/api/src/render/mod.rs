// Output stage: paginated PDF, Markdown preview and download naming.

pub mod pdf;
pub mod preview;

use chrono::NaiveDate;
use serde::Serialize;

use crate::compose::Block;
use crate::errors::AppError;
use crate::layout::font_metrics::PageConfig;
use crate::layout::paginate::paginate;
use crate::templates::Template;

pub use pdf::to_win_ansi;
pub use preview::to_markdown;

/// A finished document ready to hand to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedCv {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub page_count: usize,
}

/// Paginates `blocks` under `template` and serializes them to PDF.
///
/// Returns the bytes and the number of pages.
pub fn render(
    blocks: &[Block],
    template: &Template,
    page: &PageConfig,
) -> Result<(Vec<u8>, usize), AppError> {
    let laid_out = paginate(blocks, template, page);
    let bytes = pdf::write_pdf(&laid_out, template, page)?;
    Ok((bytes, laid_out.page_count()))
}

/// `CV_<name>_<YYYYMMDD>.pdf`, with `CV` standing in for a blank name.
pub fn suggested_file_name(name: Option<&str>, date: NaiveDate) -> String {
    let stem = name.map(sanitize_file_stem).unwrap_or_default();
    let stem = if stem.is_empty() { "CV".to_string() } else { stem };
    format!("CV_{}_{}.pdf", stem, date.format("%Y%m%d"))
}

/// Joins whitespace runs with `_` and drops characters that are unsafe in
/// file names on common platforms.
fn sanitize_file_stem(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| !c.is_control() && !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{default_page_config, PageSize};
    use crate::templates::TemplateRegistry;
    use lopdf::content::Content;
    use lopdf::{Document, Object};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    /// Strings drawn with `Tj`, per page.
    fn page_texts(bytes: &[u8]) -> Vec<Vec<Vec<u8>>> {
        let doc = Document::load_mem(bytes).unwrap();
        doc.get_pages()
            .values()
            .map(|page_id| {
                let raw = doc.get_page_content(*page_id).unwrap();
                Content::decode(&raw)
                    .unwrap()
                    .operations
                    .into_iter()
                    .filter(|op| op.operator == "Tj")
                    .filter_map(|op| match op.operands.first() {
                        Some(Object::String(s, _)) => Some(s.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_file_name_uses_sanitized_name() {
        assert_eq!(suggested_file_name(Some("Jane  Doe"), date()), "CV_Jane_Doe_20240309.pdf");
        assert_eq!(
            suggested_file_name(Some(" a/b:c*?\"<>| d "), date()),
            "CV_abc_d_20240309.pdf"
        );
    }

    #[test]
    fn test_file_name_placeholder_for_blank_name() {
        assert_eq!(suggested_file_name(None, date()), "CV_CV_20240309.pdf");
        assert_eq!(suggested_file_name(Some("   "), date()), "CV_CV_20240309.pdf");
        assert_eq!(suggested_file_name(Some("///"), date()), "CV_CV_20240309.pdf");
    }

    #[test]
    fn test_render_draws_blocks_in_order() {
        let registry = TemplateRegistry::builtin().unwrap();
        let classic = registry.get_template("classic").unwrap();
        let blocks = vec![
            Block::Title("Jane Doe".to_string()),
            Block::ContactLine(vec!["jane@example.com".to_string(), "555".to_string()]),
            Block::Spacer(12.0),
            Block::SectionHeading("Skills".to_string()),
            Block::BodyText("Go (Expert) • Rust (Advanced)".to_string()),
        ];
        let (bytes, pages) = render(&blocks, classic, &default_page_config(PageSize::A4)).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(pages, 1);

        let texts = page_texts(&bytes);
        assert_eq!(texts.len(), 1);
        assert_eq!(
            texts[0],
            vec![
                b"Jane Doe".to_vec(),
                b"jane@example.com | 555".to_vec(),
                b"Skills".to_vec(),
                to_win_ansi("Go (Expert) • Rust (Advanced)"),
            ]
        );
    }

    #[test]
    fn test_render_is_byte_stable() {
        let registry = TemplateRegistry::builtin().unwrap();
        let creative = registry.get_template("creative").unwrap();
        let blocks = vec![
            Block::Title("Jane Doe".to_string()),
            Block::BodyText("Same input, same bytes.".to_string()),
        ];
        let page = default_page_config(PageSize::Letter);
        let first = render(&blocks, creative, &page).unwrap();
        let second = render(&blocks, creative, &page).unwrap();
        assert_eq!(first.0, second.0);
    }

    #[test]
    fn test_page_numbers_drawn_on_every_page() {
        let registry = TemplateRegistry::builtin().unwrap();
        let modern = registry.get_template("modern").unwrap();
        let long = vec!["Delivered the quarterly roadmap on time."; 120].join("\n");
        let blocks = vec![Block::BodyText(long.clone()), Block::BodyText(long)];
        let (bytes, pages) = render(&blocks, modern, &default_page_config(PageSize::A4)).unwrap();
        assert!(pages >= 2);

        let texts = page_texts(&bytes);
        assert_eq!(texts.len(), pages);
        for (i, page) in texts.iter().enumerate() {
            let footer = format!("{} / {}", i + 1, pages).into_bytes();
            assert_eq!(page.last(), Some(&footer));
        }
    }

    #[test]
    fn test_empty_blocks_render_single_blank_page() {
        let registry = TemplateRegistry::builtin().unwrap();
        let classic = registry.get_template("classic").unwrap();
        let (bytes, pages) = render(&[], classic, &default_page_config(PageSize::A4)).unwrap();
        assert_eq!(pages, 1);
        assert!(page_texts(&bytes)[0].is_empty());
    }
}
