use super::*;
use crate::state::GameState;

#[test]
fn test_square_names() {
    assert_eq!(Square { row: 7, col: 0 }.name(), "a1");
    assert_eq!(Square { row: 0, col: 0 }.name(), "a8");
    assert_eq!(Square { row: 6, col: 4 }.name(), "e2");
    assert_eq!(Square { row: 0, col: 7 }.name(), "h8");
}

#[test]
fn test_square_parse_round_trip() {
    for row in 0..8u8 {
        for col in 0..8u8 {
            let sq = Square { row, col };
            assert_eq!(Square::parse(&sq.name()), Some(sq));
        }
    }
    assert_eq!(Square::parse("i1"), None);
    assert_eq!(Square::parse("a9"), None);
    assert_eq!(Square::parse("e"), None);
}

#[test]
fn test_square_bounds() {
    assert!(square(-1, 0).is_none());
    assert!(square(0, 8).is_none());
    assert_eq!(square(3, 4), Some(Square { row: 3, col: 4 }));
}

#[test]
fn test_move_key_encodes_coordinates() {
    let state = GameState::new();
    let mv = Move::new(
        Square { row: 6, col: 4 },
        Square { row: 4, col: 4 },
        &state.board,
    );
    assert_eq!(mv.key(), 6444);
    assert_eq!(mv.notation(), "e2e4");
}

#[test]
fn test_move_equality_is_key_only() {
    let state = GameState::new();
    let from = Square { row: 6, col: 4 };
    let to = Square { row: 5, col: 4 };
    let a = Move::new(from, to, &state.board);
    let mut b = Move::new(from, to, &state.board);
    b.is_en_passant = true;
    assert_eq!(a, b);

    let c = Move::new(from, Square { row: 4, col: 4 }, &state.board);
    assert_ne!(a, c);
}

#[test]
fn test_move_snapshots_capture() {
    let state = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - -");
    let mv = Move::new(
        Square { row: 4, col: 4 },
        Square { row: 3, col: 3 },
        &state.board,
    );
    assert_eq!(
        mv.piece_captured,
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::Pawn
        })
    );
    // Construction must not touch the board.
    assert!(state.board[Square { row: 3, col: 3 }.index()].is_some());
}

#[test]
fn test_promotion_flag() {
    let state = GameState::from_fen("8/P6k/8/8/8/8/p7/K7 w - -");
    let white = Move::new(
        Square { row: 1, col: 0 },
        Square { row: 0, col: 0 },
        &state.board,
    );
    assert!(white.is_promotion);

    let black = Move::new(
        Square { row: 6, col: 0 },
        Square { row: 7, col: 1 },
        &state.board,
    );
    // Black pawn lands on row 7: promotion even as a capture.
    assert!(black.is_promotion);
}

#[test]
fn test_en_passant_constructor_snapshots_adjacent_pawn() {
    // White pawn e5, black pawn just pushed d7-d5; capture lands on d6.
    let state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6");
    let mv = Move::en_passant(
        Square { row: 3, col: 4 },
        Square { row: 2, col: 3 },
        &state.board,
    );
    assert!(mv.is_en_passant);
    assert_eq!(
        mv.piece_captured,
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::Pawn
        })
    );
}
