// src/fold/mod.rs
//! The document fold engine.
//!
//! [`DocumentFolder`] walks a [`Content`] tree depth-first in reading order
//! and rebuilds it bottom-up through a [`DocumentAlgebra`]. Along the way it
//! turns turn labels into plies and threads the variation context (the
//! current line and, inside sub-variations, the parent line) down to every
//! move. It never resolves positions itself.

use crate::algebras::DocumentAlgebra;
use crate::error::{FoldError, TurnKind};
use crate::model::{Block, Code, Content, ContinueMove, Fragment, Move, Moves, OneMove, TwoMove};
use crate::types::{Line, Ply};

/// The line a move belongs to, and the line it branched from if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariationContext<'c> {
    pub line: &'c str,
    pub parent_line: Option<&'c str>,
}

impl<'c> VariationContext<'c> {
    /// Context of a top-level line.
    pub fn main(line: &'c Line) -> Self {
        Self {
            line: line.as_str(),
            parent_line: None,
        }
    }

    /// Context of a sub-variation of `parent_line`.
    pub fn branch(line: &'c Line, parent_line: &'c Line) -> Self {
        Self {
            line: line.as_str(),
            parent_line: Some(parent_line.as_str()),
        }
    }
}

/// Folds documents through a borrowed algebra.
///
/// The folder holds no state besides the algebra reference, so one folder
/// can fold any number of documents, and folds on distinct documents may
/// run on different threads whenever the algebra is `Sync`.
pub struct DocumentFolder<'a, G: DocumentAlgebra + ?Sized> {
    algebra: &'a G,
}

impl<'a, G: DocumentAlgebra + ?Sized> DocumentFolder<'a, G> {
    pub fn new(algebra: &'a G) -> Self {
        Self { algebra }
    }

    /// Folds a whole document into one output value.
    ///
    /// A malformed turn label aborts the fold; nothing partial is returned.
    pub fn fold(&self, content: &Content) -> Result<G::Output, FoldError> {
        log::debug!("Folding document with {} blocks", content.len());
        self.content(content)
    }

    /// Folds a bare line label.
    ///
    /// No document node reaches this through [`fold`](Self::fold); it exists
    /// for callers captioning a variation by its line.
    pub fn line(&self, line: &Line) -> G::Output {
        self.algebra.line(line.as_str())
    }

    fn content(&self, content: &Content) -> Result<G::Output, FoldError> {
        let children = content
            .blocks
            .iter()
            .map(|block| self.block(block))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.algebra.content(children))
    }

    fn block(&self, block: &Block) -> Result<G::Output, FoldError> {
        match block {
            Block::NewLine(text) => Ok(self.algebra.newline(text)),
            Block::HeadLine(text) => Ok(self.algebra.headline(text)),
            Block::Paragraph(fragments) => self.paragraph(fragments),
            Block::Board { line, ply } => Ok(self.algebra.board(*ply, line.as_str())),
        }
    }

    fn paragraph(&self, fragments: &[Fragment]) -> Result<G::Output, FoldError> {
        let mut children = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            match fragment {
                Fragment::Text(text) => children.push(self.algebra.text(text)),
                Fragment::Code(code) => {
                    for element in self.code(code)? {
                        children.extend(self.algebra.expand_code(element));
                    }
                }
            }
        }
        Ok(self.algebra.paragraph(children))
    }

    /// Folds one code fragment into zero or more elements.
    fn code(&self, code: &Code) -> Result<Vec<G::Output>, FoldError> {
        log::trace!(
            "Folding {} fragment on line '{}'",
            code.shape_name(),
            code.line()
        );
        match code {
            // The line of a bare position is not needed to show it.
            Code::LineAndFen { fen, .. } => Ok(vec![self.algebra.fen(fen)]),
            Code::LineAndMoves { line, moves } => self.moves(moves, VariationContext::main(line)),
            Code::LineLineMoves {
                parent_line,
                line,
                moves,
            } => self.moves(moves, VariationContext::branch(line, parent_line)),
        }
    }

    /// Folds a move set into `[continue?, ...two_moves, one?]`.
    fn moves(
        &self,
        moves: &Moves,
        context: VariationContext<'_>,
    ) -> Result<Vec<G::Output>, FoldError> {
        let mut children = Vec::with_capacity(moves.element_count());

        if let Some(continue_move) = &moves.continue_move {
            children.push(self.c_move(continue_move, context)?);
        }

        for two_move in &moves.two_moves {
            children.push(self.two_move(two_move, context)?);
        }

        if let Some(one_move) = &moves.one_move {
            children.push(self.one_move(one_move, context)?);
        }

        Ok(children)
    }

    fn one_move(
        &self,
        one_move: &OneMove,
        context: VariationContext<'_>,
    ) -> Result<G::Output, FoldError> {
        let ply = one_move.turn.ply()?;
        let turn = self.algebra.zero_turn(&ply.show_turn());
        let played = self.move_at(ply, &one_move.played, context);
        Ok(self.algebra.one_move(vec![turn, played]))
    }

    fn c_move(
        &self,
        continue_move: &ContinueMove,
        context: VariationContext<'_>,
    ) -> Result<G::Output, FoldError> {
        let ply = continue_move.turn.ply()?;
        let turn = self.algebra.one_turn(&ply.show_turn());
        let played = self.move_at(ply, &continue_move.played, context);
        Ok(self.algebra.c_move(vec![turn, played]))
    }

    fn two_move(
        &self,
        two_move: &TwoMove,
        context: VariationContext<'_>,
    ) -> Result<G::Output, FoldError> {
        let first = self.one_move(&two_move.first, context)?;
        let first_ply = two_move.first.turn.ply()?;
        let reply_ply = first_ply.next().ok_or_else(|| FoldError::PlyOutOfRange {
            label: two_move.first.turn.as_str().to_string(),
            turn: TurnKind::Zero,
        })?;
        let reply = self.move_at(reply_ply, &two_move.reply, context);
        Ok(self.algebra.two_move(vec![first, reply]))
    }

    fn move_at(&self, ply: Ply, played: &Move, context: VariationContext<'_>) -> G::Output {
        let san = self.algebra.san(played.notation.san());
        let glyphs = self.algebra.glyphs();
        self.algebra.move_at(ply, san, glyphs, context.line, context.parent_line)
    }
}

/// Folds `content` through `algebra`.
pub fn fold<G: DocumentAlgebra + ?Sized>(
    algebra: &G,
    content: &Content,
) -> Result<G::Output, FoldError> {
    DocumentFolder::new(algebra).fold(content)
}
