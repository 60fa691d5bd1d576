pub mod analysis;
pub mod movegen;
pub mod perft;
pub mod state;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use analysis::{Check, Pin};
pub use perft::perft;
pub use state::GameState;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine and Evaluator traits — implemented by all engines and evaluators
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score from white's perspective (units decided by the evaluator)
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early due to the time limit
    pub stopped: bool,
}

/// A position evaluation strategy.
///
/// Scores are absolute, from white's perspective: positive favors white.
/// Implementations may read the `checkmate`/`stalemate` flags, which the
/// search keeps fresh by calling `valid_moves` on every visited position.
/// Swapping this out is how an external (e.g. learned) evaluator plugs into
/// the classical search without touching the core.
pub trait Evaluator: Send {
    fn evaluate(&self, state: &GameState) -> i32;
}

/// Trait implemented by all chess engines.
///
/// Allows swapping between the classical alpha-beta engine, the random
/// baseline, and external implementations.
pub trait Engine: Send {
    /// Search the position within the given limits and report the outcome.
    /// Must leave no trace: `state` is taken by shared reference and any
    /// internal make/undo happens on a clone.
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult;

    /// Engine name for identification in logs and match reports.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
