//! Negamax search with alpha-beta pruning.
//!
//! Fixed shallow depth: no transposition table, no quiescence, no ordering
//! heuristic beyond a root shuffle that varies play among equal-scoring
//! moves. Every `make_move` pairs with exactly one `undo_move` before the
//! enclosing call returns, including on cutoffs and time stops, so the
//! search leaves its working copy balanced.

use chess_core::{Color, Evaluator, GameState, Move, TimeControl};
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::eval::CHECKMATE;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// Result from `find_best_move`: the root move with the best negated child
/// score, threaded back explicitly instead of through shared state.
pub struct SearchOutcome {
    /// Best move and its score (None when the position has no legal moves)
    pub best_move: Option<(Move, i32)>,
    /// True if search was stopped early by the time control
    pub stopped: bool,
}

/// Searches the position and returns the best root move with its score.
/// The caller's state is cloned; all make/undo happens on the copy.
pub fn find_best_move(
    state: &GameState,
    depth: u8,
    evaluator: &dyn Evaluator,
    nodes: &mut u64,
    tc: &TimeControl,
) -> SearchOutcome {
    let mut tmp = state.clone();
    let mut moves = tmp.valid_moves();
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    }
    moves.shuffle(&mut thread_rng());

    let turn = match tmp.side_to_move {
        Color::White => 1,
        Color::Black => -1,
    };
    let mut best = moves[0];
    let mut best_score = -CHECKMATE;
    let mut alpha = -CHECKMATE;
    let beta = CHECKMATE;
    let mut stopped = false;

    for mv in moves {
        if tc.should_check_time(*nodes) && tc.check_time() {
            stopped = true;
            break;
        }

        tmp.make_move(mv);
        *nodes += 1;
        let replies = tmp.valid_moves();
        let (score, was_stopped) = negamax(
            &mut tmp,
            &replies,
            depth.saturating_sub(1),
            -beta,
            -alpha,
            -turn,
            evaluator,
            nodes,
            tc,
        );
        let score = -score;
        tmp.undo_move();

        if was_stopped {
            stopped = true;
            break;
        }
        if score > best_score {
            best_score = score;
            best = mv;
        }
        if best_score > alpha {
            alpha = best_score;
        }
        if alpha >= beta {
            break;
        }
    }

    SearchOutcome {
        best_move: Some((best, best_score)),
        stopped,
    }
}

/// Recursive negamax over the caller-supplied legal-move list.
///
/// Returns `(score, stopped)`; the score is from the perspective of `turn`
/// (+1 white, -1 black). `moves` must be the legal moves of the current
/// position, freshly generated so the terminal flags read by the evaluator
/// are in force.
#[allow(clippy::too_many_arguments)]
pub(crate) fn negamax(
    state: &mut GameState,
    moves: &[Move],
    depth: u8,
    mut alpha: i32,
    beta: i32,
    turn: i32,
    evaluator: &dyn Evaluator,
    nodes: &mut u64,
    tc: &TimeControl,
) -> (i32, bool) {
    if tc.should_check_time(*nodes) && tc.check_time() {
        return (0, true);
    }
    if depth == 0 {
        return (turn * evaluator.evaluate(state), false);
    }

    let mut max_score = -CHECKMATE;
    for &mv in moves {
        state.make_move(mv);
        *nodes += 1;
        let replies = state.valid_moves();
        let (score, stopped) = negamax(
            state,
            &replies,
            depth - 1,
            -beta,
            -alpha,
            -turn,
            evaluator,
            nodes,
            tc,
        );
        let score = -score;
        state.undo_move();

        if stopped {
            return (max_score, true);
        }
        if score > max_score {
            max_score = score;
        }
        if max_score > alpha {
            alpha = max_score;
        }
        if alpha >= beta {
            break;
        }
    }
    (max_score, false)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
