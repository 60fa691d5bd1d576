//! Random Move Chess Engine
//!
//! Picks uniformly among the legal moves. Serves as the baseline opponent
//! and as the documented fallback when a caller holds a non-empty legal
//! list but no searched move.

use chess_core::{Engine, GameState, Move, SearchLimits, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// Uniform pick from an already-computed legal-move list; `None` iff the
/// list is empty.
pub fn random_move(moves: &[Move]) -> Option<Move> {
    moves.choose(&mut thread_rng()).copied()
}

/// A chess engine that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState, _limits: SearchLimits) -> SearchResult {
        let mut copy = state.clone();
        let moves = copy.valid_moves();
        self.nodes = 1;

        SearchResult {
            best_move: random_move(&moves),
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
