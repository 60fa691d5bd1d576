use crate::state::GameState;

/// Pure perft node count: number of leaf positions reachable in exactly
/// `depth` plies. Doubles as a make/undo stress test, since every visited
/// move is applied and reverted on the same `GameState`.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = state.valid_moves();
    let mut nodes = 0u64;
    for mv in moves {
        state.make_move(mv);
        nodes += perft(state, depth - 1);
        state.undo_move();
    }
    nodes
}
