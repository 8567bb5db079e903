//! Move-tree resolution port.
//!
//! This module defines the [`MoveTreeBuilder`] capability trait for looking
//! up the positions a document's lines lead to. The fold engine never calls
//! it; algebra implementations that need positions close over one.

use crate::types::Ply;
use serde::{Deserialize, Serialize};

/// A board position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub fen: String,
}

impl Position {
    pub fn new(fen: impl Into<String>) -> Self {
        Self { fen: fen.into() }
    }
}

/// A resolved move: the position after it plus its two notations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveView {
    pub after: Position,
    pub uci: String,
    pub san: String,
}

/// Position resolution capability for document lines.
///
/// # Laws
///
/// All implementations must satisfy these laws:
///
/// - **L1 (Determinism)**: Resolving the same line and ply twice returns
///   identical results.
///   ```text
///   ply_move(line, ply) == v1
///   ply_move(line, ply) == v2
///   assert_eq!(v1, v2)
///   ```
///
/// - **L2 (Absence-Is-Not-Failure)**: An unknown line or ply resolves to
///   `None` / an empty error list, never a panic.
///   ```text
///   ply_move("no such line", 1) == None
///   ply_errors("no such line", 1) == []
///   ```
///
/// This trait is **object-safe** and can be used as `&dyn MoveTreeBuilder`.
pub trait MoveTreeBuilder: Send + Sync {
    /// Position at the start of a line, before any of its moves.
    fn zero_ply(&self, line: &str) -> Option<Position>;

    /// The move played at `ply` on `line`.
    fn ply_move(&self, line: &str, ply: Ply) -> Option<MoveView>;

    /// Diagnostics (illegal move, divergence, ...) for `line` at `ply`.
    fn ply_errors(&self, line: &str, ply: Ply) -> Vec<String>;
}

/// Convenience lookups built from the base [`MoveTreeBuilder`] operations.
pub trait MoveTreeBuilderExt: MoveTreeBuilder {
    /// Position on `line` after `ply` half-moves; ply 0 is the line's start.
    fn position_at(&self, line: &str, ply: Ply) -> Option<Position> {
        if ply.is_zero() {
            self.zero_ply(line)
        } else {
            self.ply_move(line, ply).map(|view| view.after)
        }
    }

    /// The first diagnostic reported for `line` at `ply`, if any.
    fn first_error(&self, line: &str, ply: Ply) -> Option<String> {
        self.ply_errors(line, ply).into_iter().next()
    }
}

impl<T: MoveTreeBuilder + ?Sized> MoveTreeBuilderExt for T {}

/// A builder that knows no lines at all.
///
/// Binding an algebra to it renders documents without any position data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPositions;

impl MoveTreeBuilder for NoPositions {
    fn zero_ply(&self, _line: &str) -> Option<Position> {
        None
    }

    fn ply_move(&self, _line: &str, _ply: Ply) -> Option<MoveView> {
        None
    }

    fn ply_errors(&self, _line: &str, _ply: Ply) -> Vec<String> {
        Vec::new()
    }
}
