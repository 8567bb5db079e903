//! Construction algebra for folding documents.
//!
//! This module defines the [`DocumentAlgebra`] capability trait: one
//! constructor per node kind of the document tree. The fold engine decides
//! *when* each constructor runs; an implementation decides *what* it builds.

use crate::types::Ply;

/// Construction functions mapping every document node kind to `Output`.
///
/// The output type carries no bounds. The fold engine never inspects,
/// clones, or compares outputs; it only hands them from one constructor
/// to the next.
///
/// # Laws
///
/// All implementations must satisfy these laws:
///
/// - **L1 (Purity)**: A constructor's result depends only on its arguments
///   (and on whatever read-only capability the implementation closes over,
///   such as a [`MoveTreeBuilder`](super::MoveTreeBuilder)).
///   ```text
///   san("e4") == a1
///   san("e4") == a2
///   a1 ≅ a2
///   ```
///
/// - **L2 (Order-Preservation)**: Combinators receive children in document
///   reading order and must not reorder them.
///   ```text
///   content([b1, b2]) renders b1 before b2
///   ```
///
/// - **L3 (Expansion-Flatness)**: `expand_code` returns the elements that
///   replace one folded code element in its paragraph; the engine splices
///   them in flat.
///   ```text
///   expand_code(x) == [x]   // identity expansion leaves paragraphs unchanged
///   ```
///
/// # Context-aware constructors
///
/// [`board`](Self::board) and [`move_at`](Self::move_at) are the only
/// constructors receiving metadata beyond folded children: the ply and the
/// line (plus, for sub-variations, the parent line). Resolving an actual
/// position from that context is left entirely to the implementation.
pub trait DocumentAlgebra {
    type Output;

    // -----------------------------------------------------------------------
    // Leaf constructors
    // -----------------------------------------------------------------------

    fn fen(&self, fen: &str) -> Self::Output;
    fn newline(&self, text: &str) -> Self::Output;
    fn headline(&self, text: &str) -> Self::Output;
    fn text(&self, text: &str) -> Self::Output;
    fn line(&self, line: &str) -> Self::Output;
    fn san(&self, san: &str) -> Self::Output;

    /// Turn marker of a White move, already formatted for display (`"3."`).
    fn zero_turn(&self, label: &str) -> Self::Output;

    /// Turn marker of a continuation, already formatted for display (`"3..."`).
    fn one_turn(&self, label: &str) -> Self::Output;

    /// Annotation glyphs of a move.
    ///
    /// Reserved for glyph rendering; the default renders nothing.
    fn glyphs(&self) -> Vec<Self::Output> {
        Vec::new()
    }

    // -----------------------------------------------------------------------
    // Combinators over folded children
    // -----------------------------------------------------------------------

    fn content(&self, children: Vec<Self::Output>) -> Self::Output;
    fn paragraph(&self, children: Vec<Self::Output>) -> Self::Output;
    fn one_move(&self, children: Vec<Self::Output>) -> Self::Output;
    fn two_move(&self, children: Vec<Self::Output>) -> Self::Output;
    fn c_move(&self, children: Vec<Self::Output>) -> Self::Output;

    /// Post-processes one folded code element into the elements that take
    /// its place in the enclosing paragraph.
    fn expand_code(&self, code: Self::Output) -> Vec<Self::Output> {
        vec![code]
    }

    // -----------------------------------------------------------------------
    // Context-aware constructors
    // -----------------------------------------------------------------------

    /// A diagram of the position reached on `line` after `ply` half-moves.
    fn board(&self, ply: Ply, line: &str) -> Self::Output;

    /// A single move played at `ply` on `line`.
    fn move_at(
        &self,
        ply: Ply,
        san: Self::Output,
        glyphs: Vec<Self::Output>,
        line: &str,
        parent_line: Option<&str>,
    ) -> Self::Output;
}
