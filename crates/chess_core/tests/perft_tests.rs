//! Perft counts double as a make/undo stress test: every node is reached by
//! applying a legal move and left by undoing it on the same state.
//!
//! Expected values are the standard perft numbers; they only apply at depths
//! where castling and multi-piece promotion cannot occur, since neither is
//! modeled here.

use rayon::prelude::*;

use chess_core::{perft, GameState};

const CASES: &[(&str, &str, &[(u8, u64)])] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    ),
    (
        "position-6",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
        &[(1, 46), (2, 2_079)],
    ),
];

#[test]
fn perft_matches_reference_counts() {
    CASES.par_iter().for_each(|(name, fen, depths)| {
        for &(depth, expected) in depths.iter() {
            let mut state = GameState::from_fen(fen);
            let got = perft(&mut state, depth);
            assert_eq!(
                got, expected,
                "perft mismatch for {} at depth {}: expected {}, got {}",
                name, depth, expected, got
            );
        }
    });
}

#[test]
fn perft_leaves_state_untouched() {
    let mut state = GameState::new();
    let before = state.clone();
    let _ = perft(&mut state, 3);
    assert_eq!(state.board, before.board);
    assert_eq!(state.side_to_move, before.side_to_move);
    assert_eq!(state.en_passant, before.en_passant);
    assert_eq!(state.moves_played(), 0);
}
