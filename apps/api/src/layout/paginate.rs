//! Places styled blocks onto fixed-size pages.
//!
//! Blocks are never split across pages. Positions are measured in points
//! downward from the top of the content area.

use serde::Serialize;
use tracing::{debug, warn};

use crate::compose::{Block, BlockKind};
use crate::layout::font_metrics::{get_metrics, PageConfig};
use crate::layout::wrap::wrap_text;
use crate::templates::Template;

/// Slack for float comparisons when checking whether a block fits.
const EPSILON: f32 = 0.01;

/// One block after line breaking and placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedBlock {
    /// Position of the source block in the composed sequence.
    pub block_index: usize,
    pub kind: BlockKind,
    /// Text lines after the template's text transform and wrapping.
    pub lines: Vec<String>,
    /// Top edge of the block's box, below the content top.
    pub top: f32,
    /// Box height including padding.
    pub height: f32,
    /// Content was clipped horizontally or vertically.
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub blocks: Vec<PlacedBlock>,
}

/// The full pagination result, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaidOutDocument {
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn truncated_blocks(&self) -> impl Iterator<Item = &PlacedBlock> {
        self.pages
            .iter()
            .flat_map(|p| p.blocks.iter())
            .filter(|b| b.truncated)
    }
}

/// Lays `blocks` out in order under `template`.
///
/// A block that does not fit in the space left on a page that already holds
/// content moves whole to a fresh page, where its `space_before` applies again.
/// `space_after` only moves the cursor. A spacer that does not fit is dropped
/// and ends the page. A block taller than an empty page keeps the lines that
/// fit. The result always has at least one page.
pub fn paginate(blocks: &[Block], template: &Template, page: &PageConfig) -> LaidOutDocument {
    let content_height = page.content_height();
    let content_width = page.content_width();

    let mut pages: Vec<Page> = Vec::new();
    let mut current: Vec<PlacedBlock> = Vec::new();
    let mut cursor = 0.0_f32;

    for (index, block) in blocks.iter().enumerate() {
        let style = template.style_for(block.kind());

        if let Block::Spacer(gap) = block {
            let needed = style.space_before + gap + style.space_after;
            if cursor + needed > content_height + EPSILON {
                debug!(block_index = index, "spacer dropped at page break");
                cursor = cursor.max(content_height);
            } else {
                cursor += needed;
            }
            continue;
        }

        let text = style.transform(&block.text().unwrap_or_default());
        let metrics = get_metrics(&style.font);
        let inner_width = content_width - 2.0 * style.padding;
        let wrapped = wrap_text(&text, metrics, style.font_size, inner_width);

        let line_height = style.line_height();
        let mut lines = wrapped.lines;
        let mut truncated = wrapped.truncated;

        let room = content_height - style.space_before - 2.0 * style.padding;
        let max_lines = ((room + EPSILON) / line_height).floor().max(0.0) as usize;
        if lines.len() > max_lines {
            warn!(
                block_index = index,
                kind = ?block.kind(),
                lines = lines.len(),
                kept = max_lines,
                "block taller than a page, truncating"
            );
            lines.truncate(max_lines);
            truncated = true;
        } else if truncated {
            warn!(
                block_index = index,
                kind = ?block.kind(),
                "word wider than the content area, clipping"
            );
        }

        let height = lines.len() as f32 * line_height + 2.0 * style.padding;
        let needed = style.space_before + height;

        if cursor > 0.0 && cursor + needed > content_height + EPSILON {
            if !current.is_empty() {
                pages.push(Page {
                    number: pages.len() + 1,
                    blocks: std::mem::take(&mut current),
                });
            }
            cursor = 0.0;
        }

        let top = cursor + style.space_before;
        current.push(PlacedBlock {
            block_index: index,
            kind: block.kind(),
            lines,
            top,
            height,
            truncated,
        });
        cursor = top + height + style.space_after;
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(Page {
            number: pages.len() + 1,
            blocks: current,
        });
    }

    debug!(
        template = template.id(),
        blocks = blocks.len(),
        pages = pages.len(),
        "pagination complete"
    );

    LaidOutDocument { pages }
}
