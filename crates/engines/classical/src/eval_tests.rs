use super::*;

#[test]
fn test_startpos_is_balanced() {
    let state = GameState::new();
    assert_eq!(evaluate(&state), 0);
}

#[test]
fn test_material_sum_is_signed() {
    // White: 3 pawns + rook = 8. Black: 4 pawns = 4. Net +4 for white.
    let state = GameState::from_fen("4k3/pppp4/8/8/8/8/PPP5/R3K3 w - -");
    assert_eq!(evaluate(&state), 4);
}

#[test]
fn test_checkmate_dominates_material() {
    let mut state =
        GameState::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq -");
    let moves = state.valid_moves();
    assert!(moves.is_empty());
    // Black to move and mated: white wins regardless of material.
    assert_eq!(evaluate(&state), CHECKMATE);
}

#[test]
fn test_stalemate_is_a_draw() {
    let mut state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - -");
    let moves = state.valid_moves();
    assert!(moves.is_empty());
    assert_eq!(evaluate(&state), STALEMATE);
}
