use crate::compose::{Block, CONTACT_SEPARATOR};

/// Renders the block sequence as Markdown, in the same order as the PDF.
///
/// Consecutive spacers collapse into one blank line.
pub fn to_markdown(blocks: &[Block]) -> String {
    let mut paragraphs: Vec<String> = Vec::new();

    for block in blocks {
        let paragraph = match block {
            Block::Title(name) => format!("# {name}"),
            Block::ContactLine(parts) => parts.join(CONTACT_SEPARATOR),
            Block::SectionHeading(label) => format!("## {label}"),
            Block::EmphasisLine(text) => format!("**{text}**"),
            Block::BodyText(text) => text.clone(),
            Block::Spacer(_) => continue,
        };
        paragraphs.push(paragraph);
    }

    if paragraphs.is_empty() {
        return String::new();
    }
    let mut out = paragraphs.join("\n\n");
    out.push('\n');
    out
}
