use serde::{Deserialize, Serialize};

/// A style-free unit of document content.
///
/// Blocks only say *what* is on the page; how each kind looks is decided at
/// render time by the active template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    Title(String),
    ContactLine(Vec<String>),
    SectionHeading(String),
    BodyText(String),
    EmphasisLine(String),
    /// Vertical gap in points.
    Spacer(f32),
}

/// Field-less discriminant of [`Block`], used to look up style rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Title,
    ContactLine,
    SectionHeading,
    BodyText,
    EmphasisLine,
    Spacer,
}

/// Separator between contact parts when a contact line is flattened to text.
pub const CONTACT_SEPARATOR: &str = " | ";

impl BlockKind {
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Title,
        BlockKind::ContactLine,
        BlockKind::SectionHeading,
        BlockKind::BodyText,
        BlockKind::EmphasisLine,
        BlockKind::Spacer,
    ];

    /// Position of this kind in [`BlockKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Title(_) => BlockKind::Title,
            Block::ContactLine(_) => BlockKind::ContactLine,
            Block::SectionHeading(_) => BlockKind::SectionHeading,
            Block::BodyText(_) => BlockKind::BodyText,
            Block::EmphasisLine(_) => BlockKind::EmphasisLine,
            Block::Spacer(_) => BlockKind::Spacer,
        }
    }

    /// The block's printable text; `None` for spacers.
    pub fn text(&self) -> Option<String> {
        match self {
            Block::Title(t) | Block::SectionHeading(t) | Block::BodyText(t) | Block::EmphasisLine(t) => {
                Some(t.clone())
            }
            Block::ContactLine(parts) => Some(parts.join(CONTACT_SEPARATOR)),
            Block::Spacer(_) => None,
        }
    }
}
