//! The annotated chess document tree.
//!
//! Documents are produced by an external parser and are immutable once built.
//! The fold engine only reads them.

mod block;
mod code;
mod moves;

pub use block::{Block, Fragment};
pub use code::{Code, RawCode};
pub use moves::{Castles, ContinueMove, Glyphs, Move, MoveNotation, Moves, OneMove, TwoMove};

use crate::move_table::MoveTable;
use serde::{Deserialize, Serialize};

/// An ordered sequence of blocks: one whole document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content {
    pub blocks: Vec<Block>,
}

impl Content {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Every code fragment in document order.
    pub fn codes(&self) -> impl Iterator<Item = &Code> {
        self.blocks.iter().flat_map(|block| block.codes())
    }
}

/// A parsed document together with the resolved positions of its lines.
///
/// This is the on-disk exchange format read by the CLI.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChessDocument {
    pub content: Content,
    #[serde(default)]
    pub positions: MoveTable,
}

impl ChessDocument {
    pub fn new(content: Content, positions: MoveTable) -> Self {
        Self { content, positions }
    }
}
