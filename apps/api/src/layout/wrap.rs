//! Greedy line breaking against the static font metrics.

use crate::layout::font_metrics::FontMetricTable;

/// Lines produced for one block of text.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedText {
    pub lines: Vec<String>,
    /// Set when a word wider than the line had to be clipped.
    pub truncated: bool,
}

/// Breaks `text` into lines no wider than `max_width` points.
///
/// Words are packed greedily, one space apart. A `\n` always ends the current
/// line; blank lines between paragraphs are kept. A single word that cannot
/// fit on an empty line is clipped at the right edge and the result is marked
/// truncated.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    font_size: f32,
    max_width: f32,
) -> WrappedText {
    let mut lines = Vec::new();
    let mut truncated = false;
    let space_w = metrics.space_width * font_size;

    for paragraph in text.trim_end_matches(|c: char| c == '\n' || c == '\r').split('\n') {
        let first_line = lines.len();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_w = metrics.measure_pt(word, font_size);

            if word_w > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0.0;
                }
                lines.push(clip_to_width(word, metrics, font_size, max_width));
                truncated = true;
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space_w + word_w > max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
            }
        }

        // An empty paragraph still occupies a line when it sits between others.
        if !current.is_empty() || lines.len() == first_line {
            lines.push(current);
        }
    }

    if lines.len() == 1 && lines[0].is_empty() {
        lines.clear();
    }

    WrappedText { lines, truncated }
}

/// Longest prefix of `word` that fits in `max_width` points.
fn clip_to_width(word: &str, metrics: &FontMetricTable, font_size: f32, max_width: f32) -> String {
    let mut width = 0.0_f32;
    word.chars()
        .take_while(|&c| {
            width += metrics.char_width(c) * font_size;
            width <= max_width
        })
        .collect()
}
