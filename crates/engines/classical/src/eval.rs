//! Material-based position evaluation.

use chess_core::{Color, Evaluator, GameState, PieceKind};

/// Score of a delivered checkmate; dominates any material total.
pub const CHECKMATE: i32 = 1000;
/// Score of a stalemate draw.
pub const STALEMATE: i32 = 0;

const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Scores the position from white's perspective.
///
/// Terminal flags win over material: a checkmated side-to-move scores the
/// full `CHECKMATE` for the opponent, stalemate scores zero. The flags are
/// whatever the last `valid_moves` call computed, which is why the search
/// refreshes them on every visited position.
pub fn evaluate(state: &GameState) -> i32 {
    if state.checkmate {
        // The side to move has just been mated.
        return match state.side_to_move {
            Color::White => -CHECKMATE,
            Color::Black => CHECKMATE,
        };
    }
    if state.stalemate {
        return STALEMATE;
    }

    let mut score = 0i32;
    for sq in &state.board {
        if let Some(pc) = sq {
            let v = piece_value(pc.kind);
            score += if pc.color == Color::White { v } else { -v };
        }
    }
    score
}

/// Plain material count packaged as an `Evaluator`, the default strategy
/// for `ClassicalEngine`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEval;

impl Evaluator for MaterialEval {
    fn evaluate(&self, state: &GameState) -> i32 {
        evaluate(state)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
