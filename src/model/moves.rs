use crate::types::{OneTurn, ZeroTurn};
use serde::{Deserialize, Serialize};

/// Annotation glyphs attached to a move.
///
/// Carried through the model untouched; the fold only signals their presence
/// to the algebra.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Glyphs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_glyph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_glyph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation_glyph: Option<String>,
}

impl Glyphs {
    pub fn is_empty(&self) -> bool {
        self.move_glyph.is_none()
            && self.position_glyph.is_none()
            && self.observation_glyph.is_none()
    }
}

/// Castling move as produced by the parser: a record with a distinguished `san`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Castles {
    pub san: String,
}

/// The written notation of a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoveNotation {
    San(String),
    Castles(Castles),
}

impl MoveNotation {
    /// The SAN text, unwrapping castles records.
    pub fn san(&self) -> &str {
        match self {
            MoveNotation::San(san) => san,
            MoveNotation::Castles(castles) => &castles.san,
        }
    }
}

/// A single written move with its glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    #[serde(rename = "san")]
    pub notation: MoveNotation,
    #[serde(default, skip_serializing_if = "Glyphs::is_empty")]
    pub glyphs: Glyphs,
}

impl Move {
    pub fn san(san: impl Into<String>) -> Self {
        Self {
            notation: MoveNotation::San(san.into()),
            glyphs: Glyphs::default(),
        }
    }

    pub fn castles(san: impl Into<String>) -> Self {
        Self {
            notation: MoveNotation::Castles(Castles { san: san.into() }),
            glyphs: Glyphs::default(),
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }
}

/// White's move labelled with a zero turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneMove {
    pub turn: ZeroTurn,
    #[serde(rename = "move")]
    pub played: Move,
}

impl OneMove {
    pub fn new(turn: impl Into<String>, played: Move) -> Self {
        Self {
            turn: ZeroTurn::new(turn),
            played,
        }
    }
}

/// A full move pair: White's move followed by Black's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoMove {
    pub first: OneMove,
    pub reply: Move,
}

impl TwoMove {
    pub fn new(first: OneMove, reply: Move) -> Self {
        Self { first, reply }
    }
}

/// A move continuing a line already in progress, labelled with a one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueMove {
    pub turn: OneTurn,
    #[serde(rename = "move")]
    pub played: Move,
}

impl ContinueMove {
    pub fn new(turn: impl Into<String>, played: Move) -> Self {
        Self {
            turn: OneTurn::new(turn),
            played,
        }
    }
}

/// The moves of one code fragment, in reading order:
/// optional continuation, full pairs, optional trailing White move.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Moves {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continue_move: Option<ContinueMove>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub two_moves: Vec<TwoMove>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_move: Option<OneMove>,
}

impl Moves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_continue(mut self, continue_move: ContinueMove) -> Self {
        self.continue_move = Some(continue_move);
        self
    }

    pub fn with_two_move(mut self, two_move: TwoMove) -> Self {
        self.two_moves.push(two_move);
        self
    }

    pub fn with_one_move(mut self, one_move: OneMove) -> Self {
        self.one_move = Some(one_move);
        self
    }

    /// Number of elements this set folds into.
    pub fn element_count(&self) -> usize {
        usize::from(self.continue_move.is_some())
            + self.two_moves.len()
            + usize::from(self.one_move.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }
}
