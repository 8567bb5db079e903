// src/types/turns.rs
//! Ply numbering and turn labels.
//!
//! A ply is a single half-move. Turn labels arrive from the document parser
//! as numeric strings holding the ply they stand for, so converting a label
//! is a plain integer parse. Display labels are derived from the ply:
//! odd plies are White's moves (`"3."`), even plies are Black's (`"3..."`).

use crate::error::{FoldError, TurnKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;

/// A half-move index, numbered from 0 (the position before any move).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ply(u32);

impl Ply {
    pub const ZERO: Ply = Ply(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The ply of the reply to this move, or `None` past the last ply.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Full-move number shown to a reader: `ceil(ply / 2)`.
    pub fn move_number(self) -> u32 {
        self.0.div_ceil(2)
    }

    /// Reader-facing turn label, `"N."` for odd plies and `"N..."` for even ones.
    pub fn show_turn(self) -> String {
        let suffix = if self.0 % 2 == 1 { "." } else { "..." };
        format!("{}{}", self.move_number(), suffix)
    }
}

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Ply {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Parses a numeric turn label into the ply it names.
fn parse_label(label: &str, turn: TurnKind) -> Result<Ply, FoldError> {
    label
        .trim()
        .parse::<u32>()
        .map(Ply)
        .map_err(|source| match source.kind() {
            IntErrorKind::PosOverflow => FoldError::PlyOutOfRange {
                label: label.to_string(),
                turn,
            },
            _ => FoldError::MalformedLabel {
                label: label.to_string(),
                turn,
                source,
            },
        })
}

/// Turn marker opening a White move (`OneMove`, or the first half of a `TwoMove`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZeroTurn(String);

impl ZeroTurn {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn ply(&self) -> Result<Ply, FoldError> {
        parse_label(&self.0, TurnKind::Zero)
    }
}

/// Turn marker of a move continuing a line already in progress.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OneTurn(String);

impl OneTurn {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn ply(&self) -> Result<Ply, FoldError> {
        parse_label(&self.0, TurnKind::One)
    }
}
