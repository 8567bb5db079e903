// src/analytics/mod.rs
//! Content measurement and statistics for chess documents.
//!
//! Statistics are computed by folding the document through [`CountingAlgebra`],
//! so they count exactly what every other algebra sees.

use crate::algebras::DocumentAlgebra;
use crate::error::FoldError;
use crate::fold::fold;
use crate::model::Content;
use crate::types::Ply;
use std::collections::BTreeSet;

/// Detailed content breakdown for diagnostics and logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub blocks: usize,
    pub headlines: usize,
    pub paragraphs: usize,
    pub boards: usize,
    pub fens: usize,
    /// Elements produced by code fragments: move groups and bare positions.
    pub code_elements: usize,
    pub moves: usize,
    /// Every line referenced by a move or board.
    pub lines: BTreeSet<String>,
    /// Lines played as sub-variations of another line.
    pub branch_lines: BTreeSet<String>,
    pub highest_ply: Ply,
}

impl DocumentStats {
    fn merge(mut self, other: DocumentStats) -> Self {
        self.blocks += other.blocks;
        self.headlines += other.headlines;
        self.paragraphs += other.paragraphs;
        self.boards += other.boards;
        self.fens += other.fens;
        self.code_elements += other.code_elements;
        self.moves += other.moves;
        self.lines.extend(other.lines);
        self.branch_lines.extend(other.branch_lines);
        self.highest_ply = self.highest_ply.max(other.highest_ply);
        self
    }

    fn sum(children: Vec<DocumentStats>) -> Self {
        children
            .into_iter()
            .fold(DocumentStats::default(), DocumentStats::merge)
    }

    fn at(ply: Ply, line: &str) -> Self {
        DocumentStats {
            lines: BTreeSet::from([line.to_string()]),
            highest_ply: ply,
            ..DocumentStats::default()
        }
    }
}

/// Algebra whose output is the statistics of the folded subtree.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingAlgebra;

impl DocumentAlgebra for CountingAlgebra {
    type Output = DocumentStats;

    fn fen(&self, _fen: &str) -> DocumentStats {
        DocumentStats {
            fens: 1,
            ..DocumentStats::default()
        }
    }

    fn newline(&self, _text: &str) -> DocumentStats {
        DocumentStats::default()
    }

    fn headline(&self, _text: &str) -> DocumentStats {
        DocumentStats {
            headlines: 1,
            ..DocumentStats::default()
        }
    }

    fn text(&self, _text: &str) -> DocumentStats {
        DocumentStats::default()
    }

    fn line(&self, line: &str) -> DocumentStats {
        DocumentStats {
            lines: BTreeSet::from([line.to_string()]),
            ..DocumentStats::default()
        }
    }

    fn san(&self, _san: &str) -> DocumentStats {
        DocumentStats::default()
    }

    fn zero_turn(&self, _label: &str) -> DocumentStats {
        DocumentStats::default()
    }

    fn one_turn(&self, _label: &str) -> DocumentStats {
        DocumentStats::default()
    }

    fn content(&self, children: Vec<DocumentStats>) -> DocumentStats {
        let blocks = children.len();
        DocumentStats {
            blocks,
            ..DocumentStats::sum(children)
        }
    }

    fn paragraph(&self, children: Vec<DocumentStats>) -> DocumentStats {
        let mut stats = DocumentStats::sum(children);
        stats.paragraphs += 1;
        stats
    }

    fn one_move(&self, children: Vec<DocumentStats>) -> DocumentStats {
        DocumentStats::sum(children)
    }

    fn two_move(&self, children: Vec<DocumentStats>) -> DocumentStats {
        DocumentStats::sum(children)
    }

    fn c_move(&self, children: Vec<DocumentStats>) -> DocumentStats {
        DocumentStats::sum(children)
    }

    fn expand_code(&self, mut code: DocumentStats) -> Vec<DocumentStats> {
        code.code_elements += 1;
        vec![code]
    }

    fn board(&self, ply: Ply, line: &str) -> DocumentStats {
        DocumentStats {
            boards: 1,
            ..DocumentStats::at(ply, line)
        }
    }

    fn move_at(
        &self,
        ply: Ply,
        san: DocumentStats,
        glyphs: Vec<DocumentStats>,
        line: &str,
        parent_line: Option<&str>,
    ) -> DocumentStats {
        let mut stats = DocumentStats::sum(glyphs)
            .merge(san)
            .merge(DocumentStats::at(ply, line));
        stats.moves += 1;
        if parent_line.is_some() {
            stats.branch_lines.insert(line.to_string());
        }
        stats
    }
}

/// Measures a document by folding it through [`CountingAlgebra`].
pub fn measure_document(content: &Content) -> Result<DocumentStats, FoldError> {
    fold(&CountingAlgebra, content)
}
