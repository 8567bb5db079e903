// tests/fold_properties.rs
//! Structural properties of the fold, checked through a probe algebra that
//! records every constructor call as a node.

use chessdoc::{
    fold, Block, Code, Content, ContinueMove, DocumentAlgebra, FoldError, Fragment, Line, Move,
    Moves, OneMove, OneTurn, Ply, TurnKind, TwoMove, ZeroTurn,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf(&'static str, String),
    Group(&'static str, Vec<Node>),
    Move {
        ply: u32,
        san: String,
        line: String,
        parent_line: Option<String>,
    },
    Board(u32, String),
}

/// Records calls; `expand` copies of every folded code element are spliced
/// into its paragraph.
struct Probe {
    expand: usize,
}

impl Probe {
    fn identity() -> Self {
        Self { expand: 1 }
    }
}

impl DocumentAlgebra for Probe {
    type Output = Node;

    fn fen(&self, fen: &str) -> Node {
        Node::Leaf("fen", fen.to_string())
    }
    fn newline(&self, text: &str) -> Node {
        Node::Leaf("newline", text.to_string())
    }
    fn headline(&self, text: &str) -> Node {
        Node::Leaf("headline", text.to_string())
    }
    fn text(&self, text: &str) -> Node {
        Node::Leaf("text", text.to_string())
    }
    fn line(&self, line: &str) -> Node {
        Node::Leaf("line", line.to_string())
    }
    fn san(&self, san: &str) -> Node {
        Node::Leaf("san", san.to_string())
    }
    fn zero_turn(&self, label: &str) -> Node {
        Node::Leaf("zero_turn", label.to_string())
    }
    fn one_turn(&self, label: &str) -> Node {
        Node::Leaf("one_turn", label.to_string())
    }
    fn content(&self, children: Vec<Node>) -> Node {
        Node::Group("content", children)
    }
    fn paragraph(&self, children: Vec<Node>) -> Node {
        Node::Group("paragraph", children)
    }
    fn one_move(&self, children: Vec<Node>) -> Node {
        Node::Group("one_move", children)
    }
    fn two_move(&self, children: Vec<Node>) -> Node {
        Node::Group("two_move", children)
    }
    fn c_move(&self, children: Vec<Node>) -> Node {
        Node::Group("c_move", children)
    }
    fn expand_code(&self, code: Node) -> Vec<Node> {
        vec![code; self.expand]
    }
    fn board(&self, ply: Ply, line: &str) -> Node {
        Node::Board(ply.value(), line.to_string())
    }
    fn move_at(
        &self,
        ply: Ply,
        san: Node,
        _glyphs: Vec<Node>,
        line: &str,
        parent_line: Option<&str>,
    ) -> Node {
        let san = match san {
            Node::Leaf("san", san) => san,
            other => panic!("move_at received {:?} as san", other),
        };
        Node::Move {
            ply: ply.value(),
            san,
            line: line.to_string(),
            parent_line: parent_line.map(str::to_string),
        }
    }
}

fn paragraph_of(codes: Vec<Code>) -> Content {
    Content::new(vec![Block::Paragraph(
        codes.into_iter().map(Fragment::Code).collect(),
    )])
}

fn paragraph_children(node: Node) -> Vec<Node> {
    match node {
        Node::Group("content", mut blocks) => match blocks.remove(0) {
            Node::Group("paragraph", children) => children,
            other => panic!("expected paragraph, got {:?}", other),
        },
        other => panic!("expected content, got {:?}", other),
    }
}

fn move_of(node: &Node) -> &Node {
    match node {
        Node::Group("one_move" | "c_move", children) => &children[1],
        Node::Group("two_move", children) => move_of(&children[0]),
        other => panic!("not a move group: {:?}", other),
    }
}

fn full_moves() -> Moves {
    Moves::new()
        .with_continue(ContinueMove::new("4", Move::san("Nf6")))
        .with_two_move(TwoMove::new(
            OneMove::new("5", Move::san("Nc3")),
            Move::san("a6"),
        ))
        .with_two_move(TwoMove::new(
            OneMove::new("7", Move::san("Be3")),
            Move::castles("O-O"),
        ))
        .with_one_move(OneMove::new("9", Move::san("f3")))
}

#[test]
fn show_turn_matches_the_formula() {
    for p in 0u32..500 {
        let suffix = if p % 2 == 1 { "." } else { "..." };
        assert_eq!(Ply::new(p).show_turn(), format!("{}{}", p.div_ceil(2), suffix));
    }
}

#[test]
fn zero_and_one_turn_labels_parse_alike() {
    for s in ["0", "1", "2", "17", "0042", "4294967295"] {
        let expected: u32 = s.parse().unwrap();
        assert_eq!(ZeroTurn::new(s).ply().unwrap(), Ply::new(expected));
        assert_eq!(OneTurn::new(s).ply().unwrap(), Ply::new(expected));
    }
}

#[test]
fn moves_fold_in_continue_pairs_trailing_order() {
    let content = paragraph_of(vec![Code::LineAndMoves {
        line: Line::new("main"),
        moves: full_moves(),
    }]);

    let children = paragraph_children(fold(&Probe::identity(), &content).unwrap());
    let kinds: Vec<&str> = children
        .iter()
        .map(|child| match child {
            Node::Group(kind, _) => *kind,
            other => panic!("unexpected {:?}", other),
        })
        .collect();
    assert_eq!(kinds, vec!["c_move", "two_move", "two_move", "one_move"]);

    let plies: Vec<u32> = children
        .iter()
        .map(|child| match move_of(child) {
            Node::Move { ply, .. } => *ply,
            other => panic!("unexpected {:?}", other),
        })
        .collect();
    assert_eq!(plies, vec![4, 5, 7, 9]);
}

#[test]
fn two_move_reply_is_one_ply_later_and_castles_are_unwrapped() {
    let content = paragraph_of(vec![Code::LineAndMoves {
        line: Line::new("main"),
        moves: full_moves(),
    }]);
    let children = paragraph_children(fold(&Probe::identity(), &content).unwrap());

    match &children[2] {
        Node::Group("two_move", pair) => {
            assert_eq!(
                pair[1],
                Node::Move {
                    ply: 8,
                    san: "O-O".to_string(),
                    line: "main".to_string(),
                    parent_line: None,
                }
            );
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn expansion_is_spliced_flat_in_document_order() {
    for expand in 0..4 {
        let content = Content::new(vec![Block::Paragraph(vec![
            Fragment::Text("a".to_string()),
            Fragment::Code(Code::LineAndMoves {
                line: Line::new("main"),
                moves: full_moves(),
            }),
            Fragment::Text("b".to_string()),
            Fragment::Code(Code::LineAndFen {
                line: Line::new("main"),
                fen: "8/8/8/8/8/8/8/8 w - - 0 1".to_string(),
            }),
        ])]);

        let probe = Probe { expand };
        let children = paragraph_children(fold(&probe, &content).unwrap());

        // 4 move elements and 1 fen element, each expanded, plus 2 texts.
        assert_eq!(children.len(), 2 + 5 * expand);
        assert_eq!(children[0], Node::Leaf("text", "a".to_string()));
        assert_eq!(children[1 + 4 * expand], Node::Leaf("text", "b".to_string()));
        assert!(children
            .iter()
            .all(|child| !matches!(child, Node::Group("paragraph", _))));
    }
}

#[test]
fn sub_variation_context_reaches_every_move() {
    let content = paragraph_of(vec![Code::LineLineMoves {
        parent_line: Line::new("e4"),
        line: Line::new("e4 e5"),
        moves: full_moves(),
    }]);
    let children = paragraph_children(fold(&Probe::identity(), &content).unwrap());

    let mut seen = 0;
    let mut check = |node: &Node| match node {
        Node::Move {
            line, parent_line, ..
        } => {
            assert_eq!(line, "e4 e5");
            assert_eq!(parent_line.as_deref(), Some("e4"));
            seen += 1;
        }
        other => panic!("unexpected {:?}", other),
    };
    for child in &children {
        match child {
            Node::Group("two_move", pair) => {
                check(move_of(child));
                check(&pair[1]);
            }
            _ => check(move_of(child)),
        }
    }
    assert_eq!(seen, 6);
}

#[test]
fn turn_labels_render_from_their_ply() {
    let content = paragraph_of(vec![
        Code::LineAndMoves {
            line: Line::new("main"),
            moves: Moves::new().with_one_move(OneMove::new("4", Move::san("d4"))),
        },
        Code::LineAndMoves {
            line: Line::new("main"),
            moves: Moves::new().with_continue(ContinueMove::new("7", Move::san("Nf6"))),
        },
    ]);
    let children = paragraph_children(fold(&Probe::identity(), &content).unwrap());

    match (&children[0], &children[1]) {
        (Node::Group("one_move", first), Node::Group("c_move", second)) => {
            assert_eq!(first[0], Node::Leaf("zero_turn", "2...".to_string()));
            assert_eq!(second[0], Node::Leaf("one_turn", "4.".to_string()));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn lone_continuation_folds_to_one_move_at_its_ply() {
    let content = paragraph_of(vec![Code::LineAndMoves {
        line: Line::new("main"),
        moves: Moves::new().with_continue(ContinueMove::new("3", Move::san("Nf3"))),
    }]);
    let children = paragraph_children(fold(&Probe::identity(), &content).unwrap());

    assert_eq!(children.len(), 1);
    assert_eq!(
        move_of(&children[0]),
        &Node::Move {
            ply: 3,
            san: "Nf3".to_string(),
            line: "main".to_string(),
            parent_line: None,
        }
    );
}

#[test]
fn malformed_label_aborts_the_whole_fold() {
    let content = Content::new(vec![
        Block::HeadLine("fine".to_string()),
        Block::Paragraph(vec![Fragment::Code(Code::LineAndMoves {
            line: Line::new("main"),
            moves: Moves::new().with_one_move(OneMove::new("three", Move::san("Nf3"))),
        })]),
    ]);

    match fold(&Probe::identity(), &content) {
        Err(FoldError::MalformedLabel { label, turn, .. }) => {
            assert_eq!(label, "three");
            assert_eq!(turn, TurnKind::Zero);
        }
        other => panic!("expected a malformed label, got {:?}", other),
    }
}

#[test]
fn boards_carry_their_ply_and_line() {
    let content = Content::new(vec![Block::Board {
        line: Line::new("main.2"),
        ply: Ply::new(12),
    }]);
    assert_eq!(
        fold(&Probe::identity(), &content).unwrap(),
        Node::Group("content", vec![Node::Board(12, "main.2".to_string())])
    );
}
