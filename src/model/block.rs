use super::code::Code;
use crate::types::{Line, Ply};
use serde::{Deserialize, Serialize};

/// Inline piece of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    Text(String),
    Code(Code),
}

/// Top-level unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    NewLine(String),
    HeadLine(String),
    Paragraph(Vec<Fragment>),
    /// A diagram of the position reached on `line` after `ply` half-moves.
    Board { line: Line, ply: Ply },
}

impl Block {
    /// Get block type name
    pub fn block_type(&self) -> &'static str {
        match self {
            Block::NewLine(_) => "new_line",
            Block::HeadLine(_) => "head_line",
            Block::Paragraph(_) => "paragraph",
            Block::Board { .. } => "board",
        }
    }

    /// Code fragments of a paragraph; empty for every other block.
    pub fn codes(&self) -> impl Iterator<Item = &Code> {
        let fragments: &[Fragment] = match self {
            Block::Paragraph(fragments) => fragments,
            _ => &[],
        };
        fragments.iter().filter_map(|fragment| match fragment {
            Fragment::Code(code) => Some(code),
            Fragment::Text(_) => None,
        })
    }
}
