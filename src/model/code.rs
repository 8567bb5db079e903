use super::moves::Moves;
use crate::types::Line;
use serde::{Deserialize, Serialize};

/// An embedded chess fragment inside a paragraph.
///
/// Serialized as a loose record (see [`RawCode`]) and classified on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCode", into = "RawCode")]
pub enum Code {
    /// A position given directly as FEN.
    LineAndFen { line: Line, fen: String },
    /// Moves of a top-level line.
    LineAndMoves { line: Line, moves: Moves },
    /// Moves of a sub-variation branching off `parent_line`.
    LineLineMoves {
        parent_line: Line,
        line: Line,
        moves: Moves,
    },
}

impl Code {
    pub fn line(&self) -> &Line {
        match self {
            Code::LineAndFen { line, .. }
            | Code::LineAndMoves { line, .. }
            | Code::LineLineMoves { line, .. } => line,
        }
    }

    pub fn shape_name(&self) -> &'static str {
        match self {
            Code::LineAndFen { .. } => "line_and_fen",
            Code::LineAndMoves { .. } => "line_and_moves",
            Code::LineLineMoves { .. } => "line_line_moves",
        }
    }
}

/// Code record as emitted by the document parser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawCode {
    pub line: Line,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_line: Option<Line>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moves: Option<Moves>,
}

impl RawCode {
    /// Whether the record is exactly one of the three known shapes.
    pub fn is_recognized(&self) -> bool {
        matches!(
            (&self.parent_line, &self.fen, &self.moves),
            (None, Some(_), None) | (None, None, Some(_)) | (Some(_), None, Some(_))
        )
    }
}

impl From<RawCode> for Code {
    fn from(raw: RawCode) -> Self {
        if !raw.is_recognized() {
            // Unknown shapes are read as plain moves.
            log::warn!(
                "Unrecognized code shape for line '{}' (parent line: {}, fen: {}, moves: {}); \
                 falling back to line_and_moves",
                raw.line,
                raw.parent_line.is_some(),
                raw.fen.is_some(),
                raw.moves.is_some()
            );
        }

        match raw {
            RawCode {
                line,
                fen: Some(fen),
                ..
            } => Code::LineAndFen { line, fen },
            RawCode {
                line,
                parent_line: Some(parent_line),
                moves: Some(moves),
                ..
            } => Code::LineLineMoves {
                parent_line,
                line,
                moves,
            },
            RawCode { line, moves, .. } => Code::LineAndMoves {
                line,
                moves: moves.unwrap_or_default(),
            },
        }
    }
}

impl From<Code> for RawCode {
    fn from(code: Code) -> Self {
        match code {
            Code::LineAndFen { line, fen } => RawCode {
                line,
                fen: Some(fen),
                ..Default::default()
            },
            Code::LineAndMoves { line, moves } => RawCode {
                line,
                moves: Some(moves),
                ..Default::default()
            },
            Code::LineLineMoves {
                parent_line,
                line,
                moves,
            } => RawCode {
                line,
                parent_line: Some(parent_line),
                moves: Some(moves),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Move, OneMove};

    fn some_moves() -> Moves {
        Moves::new().with_one_move(OneMove::new("1", Move::san("e4")))
    }

    #[test]
    fn fen_record_is_line_and_fen() {
        let raw = RawCode {
            line: Line::new("main"),
            fen: Some("8/8/8/8/8/8/8/8 w - - 0 1".to_string()),
            ..Default::default()
        };
        assert!(raw.is_recognized());
        assert!(matches!(Code::from(raw), Code::LineAndFen { .. }));
    }

    #[test]
    fn parent_line_record_is_sub_variation() {
        let raw = RawCode {
            line: Line::new("e4 e5"),
            parent_line: Some(Line::new("e4")),
            moves: Some(some_moves()),
            ..Default::default()
        };
        match Code::from(raw) {
            Code::LineLineMoves {
                parent_line, line, ..
            } => {
                assert_eq!(parent_line.as_str(), "e4");
                assert_eq!(line.as_str(), "e4 e5");
            }
            other => panic!("expected sub-variation, got {:?}", other),
        }
    }

    #[test]
    fn unknown_shape_falls_back_to_line_and_moves() {
        let raw = RawCode {
            line: Line::new("main"),
            parent_line: Some(Line::new("root")),
            ..Default::default()
        };
        assert!(!raw.is_recognized());
        assert_eq!(
            Code::from(raw),
            Code::LineAndMoves {
                line: Line::new("main"),
                moves: Moves::default()
            }
        );
    }

    #[test]
    fn fen_wins_over_moves_in_ambiguous_records() {
        let raw = RawCode {
            line: Line::new("main"),
            fen: Some("startpos".to_string()),
            moves: Some(some_moves()),
            ..Default::default()
        };
        assert!(!raw.is_recognized());
        assert!(matches!(Code::from(raw), Code::LineAndFen { .. }));
    }

    #[test]
    fn code_serializes_as_loose_record() {
        let code = Code::LineLineMoves {
            parent_line: Line::new("a"),
            line: Line::new("b"),
            moves: some_moves(),
        };
        let json = serde_json::to_value(&code).unwrap();
        assert_eq!(json["parent_line"], "a");
        assert_eq!(json["line"], "b");
        assert!(json.get("fen").is_none());
        let back: Code = serde_json::from_value(json).unwrap();
        assert_eq!(back, code);
    }
}
