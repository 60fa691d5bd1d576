//! Classical Chess Engine
//!
//! Negamax search with alpha-beta pruning over a pluggable evaluator;
//! plain material evaluation by default.

mod eval;
mod search;

use chess_core::{Engine, Evaluator, GameState, SearchLimits, SearchResult};

pub use eval::{evaluate, MaterialEval, CHECKMATE, STALEMATE};
pub use search::{find_best_move, SearchOutcome, DEFAULT_DEPTH};

/// Classical chess engine using negamax with alpha-beta pruning.
///
/// The evaluation function is swappable: hand `with_evaluator` anything
/// implementing `Evaluator` (a learned model, say) and the search machinery
/// stays untouched.
pub struct ClassicalEngine {
    evaluator: Box<dyn Evaluator>,
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::with_evaluator(Box::new(MaterialEval))
    }

    pub fn with_evaluator(evaluator: Box<dyn Evaluator>) -> Self {
        Self { evaluator, nodes: 0 }
    }
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let outcome = search::find_best_move(
            state,
            limits.depth,
            self.evaluator.as_ref(),
            &mut self.nodes,
            &limits.time_control,
        );

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
