//! In-memory move tree: resolved positions keyed by line and ply.
//!
//! Move legality and FEN computation happen upstream; this table only
//! stores their results so that algebras can look them up while folding.

use crate::algebras::{MoveTreeBuilder, MoveView, Position};
use crate::types::Ply;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything known about one line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub moves: BTreeMap<Ply, MoveView>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<Ply, Vec<String>>,
}

/// Resolved positions for every line of a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveTable {
    lines: BTreeMap<String, LineRecord>,
}

impl MoveTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, line: &str) -> Option<&LineRecord> {
        self.lines.get(line)
    }

    fn record_mut(&mut self, line: &str) -> &mut LineRecord {
        self.lines.entry(line.to_string()).or_default()
    }

    pub fn with_start(mut self, line: &str, start: Position) -> Self {
        self.record_mut(line).start = Some(start);
        self
    }

    pub fn with_move(mut self, line: &str, ply: Ply, view: MoveView) -> Self {
        self.record_mut(line).moves.insert(ply, view);
        self
    }

    pub fn with_error(mut self, line: &str, ply: Ply, error: impl Into<String>) -> Self {
        self.record_mut(line)
            .errors
            .entry(ply)
            .or_default()
            .push(error.into());
        self
    }
}

impl MoveTreeBuilder for MoveTable {
    fn zero_ply(&self, line: &str) -> Option<Position> {
        self.lines.get(line)?.start.clone()
    }

    fn ply_move(&self, line: &str, ply: Ply) -> Option<MoveView> {
        self.lines.get(line)?.moves.get(&ply).cloned()
    }

    fn ply_errors(&self, line: &str, ply: Ply) -> Vec<String> {
        self.lines
            .get(line)
            .and_then(|record| record.errors.get(&ply))
            .cloned()
            .unwrap_or_default()
    }
}
