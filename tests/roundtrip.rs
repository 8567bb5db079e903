// tests/roundtrip.rs
//! Folding through the tagging algebra and unfolding again must give back
//! the document, so no node kind or ordering rule is lost by the fold.

use chessdoc::{
    fold, unfold, Block, ChessDocument, Code, Content, ContinueMove, DocumentAlgebra, Fragment,
    Glyphs, Line, Move, Moves, OneMove, Ply, Tagged, TaggedAlgebra, TwoMove, UnfoldError,
};
use pretty_assertions::assert_eq;

/// A document using every node kind, written the way `unfold` writes it back.
fn canonical_document() -> Content {
    Content::new(vec![
        Block::HeadLine("Queen's Gambit".to_string()),
        Block::NewLine("\n".to_string()),
        Block::Paragraph(vec![
            Fragment::Text("After ".to_string()),
            Fragment::Code(Code::LineAndMoves {
                line: Line::new("main"),
                moves: Moves::new()
                    .with_two_move(TwoMove::new(
                        OneMove::new("1", Move::san("d4")),
                        Move::san("d5"),
                    ))
                    .with_one_move(OneMove::new("3", Move::san("c4"))),
            }),
            Fragment::Text(" Black may accept with ".to_string()),
            Fragment::Code(Code::LineLineMoves {
                parent_line: Line::new("main"),
                line: Line::new("main.1"),
                moves: Moves::new()
                    .with_continue(ContinueMove::new("4", Move::san("dxc4")))
                    .with_two_move(TwoMove::new(
                        OneMove::new("5", Move::san("e3")),
                        Move::san("Nf6"),
                    )),
            }),
            Fragment::Code(Code::LineAndFen {
                line: Line::default(),
                fen: "rnbqkb1r/ppp1pppp/5n2/8/2pP4/4P3/PP3PPP/RNBQKBNR w KQkq - 1 4".to_string(),
            }),
        ]),
        Block::Board {
            line: Line::new("main.1"),
            ply: Ply::new(6),
        },
        Block::Paragraph(Vec::new()),
    ])
}

#[test]
fn canonical_document_survives_fold_and_unfold() {
    let content = canonical_document();
    let tagged = fold(&TaggedAlgebra, &content).unwrap();
    assert_eq!(unfold(tagged).unwrap(), content);
}

#[test]
fn fixture_tree_is_stable_under_a_second_pass() {
    let bundle: ChessDocument =
        serde_json::from_str(include_str!("fixtures/najdorf.json")).unwrap();

    let first = fold(&TaggedAlgebra, &bundle.content).unwrap();
    let rebuilt = unfold(first.clone()).unwrap();
    let second = fold(&TaggedAlgebra, &rebuilt).unwrap();

    assert_eq!(first, second);
}

#[test]
fn discarded_details_are_normalized() {
    let written = Content::new(vec![Block::Paragraph(vec![
        Fragment::Code(Code::LineAndMoves {
            line: Line::new("main"),
            moves: Moves::new().with_two_move(TwoMove::new(
                OneMove::new(
                    "07",
                    Move::castles("O-O").with_glyphs(Glyphs {
                        move_glyph: Some("!".to_string()),
                        ..Glyphs::default()
                    }),
                ),
                Move::san("Re8"),
            )),
        }),
        Fragment::Code(Code::LineAndFen {
            line: Line::new("main"),
            fen: "8/8/8/8/8/8/8/8 w - - 0 1".to_string(),
        }),
    ])]);

    let expected = Content::new(vec![Block::Paragraph(vec![
        Fragment::Code(Code::LineAndMoves {
            line: Line::new("main"),
            moves: Moves::new().with_two_move(TwoMove::new(
                OneMove::new("7", Move::san("O-O")),
                Move::san("Re8"),
            )),
        }),
        Fragment::Code(Code::LineAndFen {
            line: Line::default(),
            fen: "8/8/8/8/8/8/8/8 w - - 0 1".to_string(),
        }),
    ])]);

    let tagged = fold(&TaggedAlgebra, &written).unwrap();
    assert_eq!(unfold(tagged).unwrap(), expected);
}

#[test]
fn adjacent_fragments_on_one_line_merge() {
    let split = Content::new(vec![Block::Paragraph(vec![
        Fragment::Code(Code::LineAndMoves {
            line: Line::new("main"),
            moves: Moves::new().with_two_move(TwoMove::new(
                OneMove::new("1", Move::san("e4")),
                Move::san("e5"),
            )),
        }),
        Fragment::Code(Code::LineAndMoves {
            line: Line::new("main"),
            moves: Moves::new().with_one_move(OneMove::new("3", Move::san("Nf3"))),
        }),
    ])]);

    let rebuilt = unfold(fold(&TaggedAlgebra, &split).unwrap()).unwrap();
    match &rebuilt.blocks[0] {
        Block::Paragraph(fragments) => {
            assert_eq!(fragments.len(), 1);
            match &fragments[0] {
                Fragment::Code(Code::LineAndMoves { moves, .. }) => {
                    assert_eq!(moves.element_count(), 2);
                }
                other => panic!("unexpected fragment {:?}", other),
            }
        }
        other => panic!("unexpected block {:?}", other),
    }
    assert_eq!(
        fold(&TaggedAlgebra, &rebuilt).unwrap(),
        fold(&TaggedAlgebra, &split).unwrap()
    );
}

#[test]
fn out_of_sequence_reply_is_rejected() {
    let algebra = TaggedAlgebra;
    let first = algebra.one_move(vec![
        algebra.zero_turn("1."),
        algebra.move_at(Ply::new(1), algebra.san("e4"), Vec::new(), "main", None),
    ]);
    let reply = algebra.move_at(Ply::new(3), algebra.san("e5"), Vec::new(), "main", None);
    let tree = algebra.content(vec![algebra.paragraph(vec![algebra.two_move(vec![first, reply])])]);

    assert_eq!(
        unfold(tree),
        Err(UnfoldError::ReplyOutOfSequence {
            first: Ply::new(1),
            found: Ply::new(3),
        })
    );
}

#[test]
fn tree_serializes_every_node_kind() {
    let tagged = fold(&TaggedAlgebra, &canonical_document()).unwrap();
    let json = serde_json::to_string(&tagged).unwrap();
    for kind in [
        "content",
        "head_line",
        "new_line",
        "paragraph",
        "text",
        "two_move",
        "one_move",
        "c_move",
        "zero_turn",
        "one_turn",
        "move",
        "san",
        "fen",
        "board",
    ] {
        assert!(
            json.contains(&format!("\"kind\":\"{}\"", kind)),
            "missing {}",
            kind
        );
    }
    assert!(matches!(tagged, Tagged::Content { .. }));
}

#[test]
fn code_without_moves_vanishes() {
    let written = Content::new(vec![Block::Paragraph(vec![
        Fragment::Text("Odd record: ".to_string()),
        Fragment::Code(Code::LineAndMoves {
            line: Line::new("main"),
            moves: Moves::new(),
        }),
        Fragment::Code(Code::LineLineMoves {
            parent_line: Line::new("main"),
            line: Line::new("main.1"),
            moves: Moves::new(),
        }),
        Fragment::Text("ends here".to_string()),
    ])]);

    let expected = Content::new(vec![Block::Paragraph(vec![
        Fragment::Text("Odd record: ".to_string()),
        Fragment::Text("ends here".to_string()),
    ])]);

    let tagged = fold(&TaggedAlgebra, &written).unwrap();
    assert_eq!(unfold(tagged).unwrap(), expected);
}

#[test]
fn unrecognized_fixture_record_vanishes_from_the_tree() {
    let bundle: ChessDocument =
        serde_json::from_str(include_str!("fixtures/unrecognized_code.json")).unwrap();

    let rebuilt = unfold(fold(&TaggedAlgebra, &bundle.content).unwrap()).unwrap();
    assert_eq!(rebuilt.codes().count(), 0);
    assert_eq!(bundle.content.codes().count(), 1);
}
