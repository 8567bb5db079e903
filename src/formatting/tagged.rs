// src/formatting/tagged.rs
//! Identity algebra: every constructor wraps its inputs in a tagged node.
//!
//! The resulting tree shows exactly which constructors the fold invoked, with
//! which arguments and in which order. [`unfold`] inverts it back into a
//! document, which makes the pair a structural check on the fold itself.
//!
//! What the fold drops cannot come back: the castles record around a SAN,
//! glyph payloads and the line of a `LineAndFen` fragment. A code fragment
//! with no moves folds to no nodes at all, so it vanishes from the rebuilt
//! paragraph. Consecutive move elements sharing a line are regrouped into one
//! code fragment.

use crate::algebras::DocumentAlgebra;
use crate::model::{Block, Code, Content, ContinueMove, Fragment, Move, Moves, OneMove, TwoMove};
use crate::types::{Line, Ply};
use serde::Serialize;
use thiserror::Error;

/// One constructor call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tagged {
    Fen {
        fen: String,
    },
    NewLine {
        text: String,
    },
    HeadLine {
        text: String,
    },
    Text {
        text: String,
    },
    Line {
        line: String,
    },
    San {
        san: String,
    },
    ZeroTurn {
        label: String,
    },
    OneTurn {
        label: String,
    },
    Content {
        children: Vec<Tagged>,
    },
    Paragraph {
        children: Vec<Tagged>,
    },
    OneMove {
        children: Vec<Tagged>,
    },
    TwoMove {
        children: Vec<Tagged>,
    },
    CMove {
        children: Vec<Tagged>,
    },
    Board {
        ply: Ply,
        line: String,
    },
    Move {
        ply: Ply,
        san: Box<Tagged>,
        glyphs: Vec<Tagged>,
        line: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        parent_line: Option<String>,
    },
}

impl Tagged {
    pub fn kind(&self) -> &'static str {
        match self {
            Tagged::Fen { .. } => "fen",
            Tagged::NewLine { .. } => "new_line",
            Tagged::HeadLine { .. } => "head_line",
            Tagged::Text { .. } => "text",
            Tagged::Line { .. } => "line",
            Tagged::San { .. } => "san",
            Tagged::ZeroTurn { .. } => "zero_turn",
            Tagged::OneTurn { .. } => "one_turn",
            Tagged::Content { .. } => "content",
            Tagged::Paragraph { .. } => "paragraph",
            Tagged::OneMove { .. } => "one_move",
            Tagged::TwoMove { .. } => "two_move",
            Tagged::CMove { .. } => "c_move",
            Tagged::Board { .. } => "board",
            Tagged::Move { .. } => "move",
        }
    }
}

/// The identity-tagging algebra.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedAlgebra;

impl DocumentAlgebra for TaggedAlgebra {
    type Output = Tagged;

    fn fen(&self, fen: &str) -> Tagged {
        Tagged::Fen { fen: fen.into() }
    }

    fn newline(&self, text: &str) -> Tagged {
        Tagged::NewLine { text: text.into() }
    }

    fn headline(&self, text: &str) -> Tagged {
        Tagged::HeadLine { text: text.into() }
    }

    fn text(&self, text: &str) -> Tagged {
        Tagged::Text { text: text.into() }
    }

    fn line(&self, line: &str) -> Tagged {
        Tagged::Line { line: line.into() }
    }

    fn san(&self, san: &str) -> Tagged {
        Tagged::San { san: san.into() }
    }

    fn zero_turn(&self, label: &str) -> Tagged {
        Tagged::ZeroTurn {
            label: label.into(),
        }
    }

    fn one_turn(&self, label: &str) -> Tagged {
        Tagged::OneTurn {
            label: label.into(),
        }
    }

    fn content(&self, children: Vec<Tagged>) -> Tagged {
        Tagged::Content { children }
    }

    fn paragraph(&self, children: Vec<Tagged>) -> Tagged {
        Tagged::Paragraph { children }
    }

    fn one_move(&self, children: Vec<Tagged>) -> Tagged {
        Tagged::OneMove { children }
    }

    fn two_move(&self, children: Vec<Tagged>) -> Tagged {
        Tagged::TwoMove { children }
    }

    fn c_move(&self, children: Vec<Tagged>) -> Tagged {
        Tagged::CMove { children }
    }

    fn board(&self, ply: Ply, line: &str) -> Tagged {
        Tagged::Board {
            ply,
            line: line.into(),
        }
    }

    fn move_at(
        &self,
        ply: Ply,
        san: Tagged,
        glyphs: Vec<Tagged>,
        line: &str,
        parent_line: Option<&str>,
    ) -> Tagged {
        Tagged::Move {
            ply,
            san: Box::new(san),
            glyphs,
            line: line.into(),
            parent_line: parent_line.map(str::to_string),
        }
    }
}

/// Why a tagged tree could not be turned back into a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnfoldError {
    #[error("Expected {expected} node, found {found}")]
    UnexpectedNode {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Expected {expected} children under {parent}, found {found}")]
    ChildCount {
        parent: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Turn label '{label}' does not match ply {ply}")]
    TurnMismatch { label: String, ply: Ply },

    #[error("Reply at ply {found} does not follow its move at ply {first}")]
    ReplyOutOfSequence { first: Ply, found: Ply },

    #[error("Move pair mixes lines '{first}' and '{reply}'")]
    MixedLines { first: String, reply: String },
}

/// Rebuilds the document a [`TaggedAlgebra`] fold was computed from.
pub fn unfold(tagged: Tagged) -> Result<Content, UnfoldError> {
    match tagged {
        Tagged::Content { children } => Ok(Content::new(
            children
                .into_iter()
                .map(unfold_block)
                .collect::<Result<Vec<_>, _>>()?,
        )),
        other => Err(unexpected("content", &other)),
    }
}

fn unexpected(expected: &'static str, found: &Tagged) -> UnfoldError {
    UnfoldError::UnexpectedNode {
        expected,
        found: found.kind(),
    }
}

fn unfold_block(tagged: Tagged) -> Result<Block, UnfoldError> {
    match tagged {
        Tagged::NewLine { text } => Ok(Block::NewLine(text)),
        Tagged::HeadLine { text } => Ok(Block::HeadLine(text)),
        Tagged::Board { ply, line } => Ok(Block::Board {
            line: Line::new(line),
            ply,
        }),
        Tagged::Paragraph { children } => Ok(Block::Paragraph(unfold_fragments(children)?)),
        other => Err(unexpected("block", &other)),
    }
}

/// Line and parent line a move element was folded under.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Origin {
    line: String,
    parent_line: Option<String>,
}

/// One folded move element, already converted back to the model.
enum MoveElement {
    Continue(ContinueMove),
    Two(TwoMove),
    One(OneMove),
}

/// Move elements collected for the code fragment being rebuilt.
struct PendingCode {
    origin: Origin,
    moves: Moves,
}

impl PendingCode {
    /// Whether `element` from `origin` can extend this fragment while keeping
    /// `[continue?, ...two_moves, one?]` order.
    fn accepts(&self, origin: &Origin, element: &MoveElement) -> bool {
        if &self.origin != origin || self.moves.one_move.is_some() {
            return false;
        }
        match element {
            MoveElement::Continue(_) => self.moves.is_empty(),
            MoveElement::Two(_) | MoveElement::One(_) => true,
        }
    }

    fn push(&mut self, element: MoveElement) {
        match element {
            MoveElement::Continue(continue_move) => self.moves.continue_move = Some(continue_move),
            MoveElement::Two(two_move) => self.moves.two_moves.push(two_move),
            MoveElement::One(one_move) => self.moves.one_move = Some(one_move),
        }
    }

    fn into_fragment(self) -> Fragment {
        let line = Line::new(self.origin.line);
        Fragment::Code(match self.origin.parent_line {
            Some(parent_line) => Code::LineLineMoves {
                parent_line: Line::new(parent_line),
                line,
                moves: self.moves,
            },
            None => Code::LineAndMoves {
                line,
                moves: self.moves,
            },
        })
    }
}

fn unfold_fragments(children: Vec<Tagged>) -> Result<Vec<Fragment>, UnfoldError> {
    let mut fragments = Vec::new();
    let mut pending: Option<PendingCode> = None;

    for child in children {
        let (origin, element) = match child {
            Tagged::Text { text } => {
                fragments.extend(pending.take().map(PendingCode::into_fragment));
                fragments.push(Fragment::Text(text));
                continue;
            }
            Tagged::Fen { fen } => {
                fragments.extend(pending.take().map(PendingCode::into_fragment));
                fragments.push(Fragment::Code(Code::LineAndFen {
                    line: Line::default(),
                    fen,
                }));
                continue;
            }
            Tagged::CMove { children } => {
                let (origin, continue_move) = unfold_c_move(children)?;
                (origin, MoveElement::Continue(continue_move))
            }
            Tagged::TwoMove { children } => {
                let (origin, two_move) = unfold_two_move(children)?;
                (origin, MoveElement::Two(two_move))
            }
            Tagged::OneMove { children } => {
                let (origin, _, one_move) = unfold_one_move(children)?;
                (origin, MoveElement::One(one_move))
            }
            other => return Err(unexpected("paragraph fragment", &other)),
        };

        match pending.as_mut() {
            Some(code) if code.accepts(&origin, &element) => code.push(element),
            _ => {
                fragments.extend(pending.take().map(PendingCode::into_fragment));
                let mut code = PendingCode {
                    origin,
                    moves: Moves::new(),
                };
                code.push(element);
                pending = Some(code);
            }
        }
    }

    fragments.extend(pending.map(PendingCode::into_fragment));
    Ok(fragments)
}

fn exactly_two(parent: &'static str, children: Vec<Tagged>) -> Result<[Tagged; 2], UnfoldError> {
    let found = children.len();
    <[Tagged; 2]>::try_from(children).map_err(|_| UnfoldError::ChildCount {
        parent,
        expected: 2,
        found,
    })
}

/// Splits a tagged move back into its ply, origin and model move.
fn unfold_move(tagged: Tagged) -> Result<(Ply, Origin, Move), UnfoldError> {
    match tagged {
        Tagged::Move {
            ply,
            san,
            line,
            parent_line,
            ..
        } => match *san {
            Tagged::San { san } => Ok((ply, Origin { line, parent_line }, Move::san(san))),
            other => Err(unexpected("san", &other)),
        },
        other => Err(unexpected("move", &other)),
    }
}

fn check_turn(label: String, ply: Ply) -> Result<(), UnfoldError> {
    if label == ply.show_turn() {
        Ok(())
    } else {
        Err(UnfoldError::TurnMismatch { label, ply })
    }
}

fn unfold_one_move(children: Vec<Tagged>) -> Result<(Origin, Ply, OneMove), UnfoldError> {
    let [turn, played] = exactly_two("one_move", children)?;
    let (ply, origin, played) = unfold_move(played)?;
    match turn {
        Tagged::ZeroTurn { label } => check_turn(label, ply)?,
        other => return Err(unexpected("zero_turn", &other)),
    }
    Ok((origin, ply, OneMove::new(ply.to_string(), played)))
}

fn unfold_c_move(children: Vec<Tagged>) -> Result<(Origin, ContinueMove), UnfoldError> {
    let [turn, played] = exactly_two("c_move", children)?;
    let (ply, origin, played) = unfold_move(played)?;
    match turn {
        Tagged::OneTurn { label } => check_turn(label, ply)?,
        other => return Err(unexpected("one_turn", &other)),
    }
    Ok((origin, ContinueMove::new(ply.to_string(), played)))
}

fn unfold_two_move(children: Vec<Tagged>) -> Result<(Origin, TwoMove), UnfoldError> {
    let [first, reply] = exactly_two("two_move", children)?;
    let (origin, first_ply, first) = match first {
        Tagged::OneMove { children } => unfold_one_move(children)?,
        other => return Err(unexpected("one_move", &other)),
    };
    let (reply_ply, reply_origin, reply) = unfold_move(reply)?;

    if first_ply.next() != Some(reply_ply) {
        return Err(UnfoldError::ReplyOutOfSequence {
            first: first_ply,
            found: reply_ply,
        });
    }
    if reply_origin != origin {
        return Err(UnfoldError::MixedLines {
            first: origin.line,
            reply: reply_origin.line,
        });
    }
    Ok((origin, TwoMove::new(first, reply)))
}
