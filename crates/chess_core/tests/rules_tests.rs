//! End-to-end rules scenarios played through the public GameState API.

use chess_core::{Color, GameState, Move, PieceKind, Square};

fn play(state: &mut GameState, notation: &str) {
    let moves = state.valid_moves();
    let mv = moves
        .iter()
        .copied()
        .find(|m| m.notation() == notation)
        .unwrap_or_else(|| panic!("{} is not legal here", notation));
    state.make_move(mv);
}

#[test]
fn test_fools_mate() {
    let mut state = GameState::new();
    play(&mut state, "f2f3");
    play(&mut state, "e7e5");
    play(&mut state, "g2g4");
    play(&mut state, "d8h4");

    let moves = state.valid_moves();
    assert!(moves.is_empty());
    assert!(state.in_check);
    assert!(state.checkmate);
    assert!(!state.stalemate);
}

#[test]
fn test_unwinding_a_game_restores_the_start() {
    let mut state = GameState::new();
    let start = state.clone();
    for notation in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        play(&mut state, notation);
    }
    for _ in 0..4 {
        state.undo_move();
    }
    assert_eq!(state.board, start.board);
    assert_eq!(state.side_to_move, Color::White);
    assert_eq!(state.en_passant, None);
    assert_eq!(state.moves_played(), 0);
    // Mate was detected mid-game; after unwinding the flags must not stick.
    let moves = state.valid_moves();
    assert_eq!(moves.len(), 20);
    assert!(!state.checkmate);
}

#[test]
fn test_checkmate_flag_from_fen() {
    // Scholar's mate delivered: black has no reply.
    let mut state = GameState::from_fen(
        "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq -",
    );
    let moves = state.valid_moves();
    assert!(moves.is_empty());
    assert!(state.checkmate);
}

#[test]
fn test_stalemate_flag() {
    let mut state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - -");
    let moves = state.valid_moves();
    assert!(moves.is_empty());
    assert!(!state.in_check);
    assert!(state.stalemate);
    assert!(!state.checkmate);
}

#[test]
fn test_en_passant_window_is_one_reply() {
    let mut state = GameState::new();
    play(&mut state, "e2e4");
    play(&mut state, "a7a6");
    play(&mut state, "e4e5");
    play(&mut state, "d7d5");

    // The capture is available right now...
    let moves = state.valid_moves();
    let ep = moves.iter().find(|m| m.notation() == "e5d6");
    assert!(ep.is_some());
    assert!(ep.unwrap().is_en_passant);

    // ...but vanishes if white plays something else first.
    play(&mut state, "h2h3");
    play(&mut state, "a6a5");
    let moves = state.valid_moves();
    assert!(!moves.iter().any(|m| m.notation() == "e5d6"));
}

#[test]
fn test_en_passant_capture_executes_correctly() {
    let mut state = GameState::new();
    play(&mut state, "e2e4");
    play(&mut state, "a7a6");
    play(&mut state, "e4e5");
    play(&mut state, "d7d5");
    play(&mut state, "e5d6");

    assert_eq!(state.piece_at(Square::parse("d5").unwrap()), None);
    assert_eq!(
        state.piece_at(Square::parse("d6").unwrap()).map(|p| p.kind),
        Some(PieceKind::Pawn)
    );
    assert_eq!(
        state.piece_at(Square::parse("d6").unwrap()).map(|p| p.color),
        Some(Color::White)
    );
}

#[test]
fn test_candidate_move_matching_by_key() {
    // The input-handler contract: a move built from two squares is accepted
    // iff it equals (by identity key) a listed legal move.
    let mut state = GameState::new();
    let legal = state.valid_moves();

    let candidate = Move::new(
        Square::parse("e2").unwrap(),
        Square::parse("e4").unwrap(),
        &state.board,
    );
    assert!(legal.contains(&candidate));

    let illegal = Move::new(
        Square::parse("e2").unwrap(),
        Square::parse("e5").unwrap(),
        &state.board,
    );
    assert!(!legal.contains(&illegal));
}

#[test]
fn test_kings_survive_deep_play() {
    // No legal line ever captures a king; both stay on the board.
    let mut state = GameState::new();
    fn walk(state: &mut GameState, depth: u8) {
        if depth == 0 {
            return;
        }
        for mv in state.valid_moves() {
            assert!(mv.piece_captured.map(|p| p.kind) != Some(PieceKind::King));
            state.make_move(mv);
            walk(state, depth - 1);
            state.undo_move();
        }
    }
    walk(&mut state, 3);
}
