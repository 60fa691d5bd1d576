use crate::analysis::{Check, Pin};
use crate::types::*;

/// Move-log entry. Besides the move itself it records the en-passant target
/// that was in force before the move, so undo restores true prior
/// availability even across repeated undo/redo.
#[derive(Clone, Copy, Debug)]
struct LogEntry {
    mv: Move,
    prev_en_passant: Option<Square>,
}

/// Owns the board, the side to move, and the move log. Check, pin, and mate
/// information is recomputed from scratch inside each `valid_moves` call,
/// never incrementally; the public flags describe the state as of the last
/// such call.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    /// Square a pawn just passed over, capturable en passant this move only.
    pub en_passant: Option<Square>,
    pub(crate) king_sq: [Square; 2],
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
    move_log: Vec<LogEntry>,
}

impl GameState {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut board: Board = [None; 64];
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (c, &kind) in back.iter().enumerate() {
            board[c] = Some(Piece {
                color: Color::Black,
                kind,
            });
            board[56 + c] = Some(Piece {
                color: Color::White,
                kind,
            });
        }
        for c in 0..8 {
            board[8 + c] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
            board[48 + c] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
        }
        GameState {
            board,
            side_to_move: Color::White,
            in_check: false,
            checkmate: false,
            stalemate: false,
            en_passant: None,
            king_sq: [Square { row: 7, col: 4 }, Square { row: 0, col: 4 }],
            pins: Vec::new(),
            checks: Vec::new(),
            move_log: Vec::new(),
        }
    }

    /// Forsyth-Edwards Notation loader used by tests and benches. The
    /// castling field is parsed but ignored (castling is not modeled); clock
    /// fields are optional and ignored.
    pub fn from_fen(fen: &str) -> Self {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(parts.len() >= 2, "Invalid FEN: expected board and side");

        let mut board: Board = [None; 64];
        let ranks: Vec<&str> = parts[0].split('/').collect();
        assert!(ranks.len() == 8, "Invalid FEN board section");

        // FEN lists rank 8 first, which is row 0 here.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => panic!("Invalid piece char in FEN: {}", ch),
                    };
                    let sq = square(row as i8, col).expect("Square out of bounds parsing FEN");
                    board[sq.index()] = Some(Piece { color, kind });
                    col += 1;
                }
                assert!(col <= 8, "Too many files in FEN rank");
            }
            assert!(col == 8, "Not enough files in FEN rank");
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => panic!("Invalid side to move in FEN: {}", other),
        };

        let en_passant = match parts.get(3) {
            Some(&"-") | None => None,
            Some(ep) => Square::parse(ep),
        };

        let find_king = |color: Color| -> Square {
            for i in 0..64usize {
                if board[i]
                    == Some(Piece {
                        color,
                        kind: PieceKind::King,
                    })
                {
                    return Square {
                        row: (i / 8) as u8,
                        col: (i % 8) as u8,
                    };
                }
            }
            panic!("FEN is missing a king");
        };
        let king_sq = [find_king(Color::White), find_king(Color::Black)];

        GameState {
            board,
            side_to_move,
            in_check: false,
            checkmate: false,
            stalemate: false,
            en_passant,
            king_sq,
            pins: Vec::new(),
            checks: Vec::new(),
            move_log: Vec::new(),
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.king_sq[color.idx()]
    }

    pub fn last_move(&self) -> Option<Move> {
        self.move_log.last().map(|e| e.mv)
    }

    pub fn moves_played(&self) -> usize {
        self.move_log.len()
    }

    /// All legal moves for the side to move. Recomputes the check/pin data,
    /// and sets `checkmate`/`stalemate` when the list comes back empty.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let (in_check, pins, checks) = self.check_for_pins_and_checks(self.side_to_move);
        self.in_check = in_check;
        self.pins = pins;
        self.checks = checks;

        let mut moves = Vec::with_capacity(64);
        if self.in_check {
            if self.checks.len() == 1 {
                self.pseudo_moves(&mut moves);
                let check = self.checks[0];
                let king = self.king_square(self.side_to_move);
                // Squares that intercept the check: the checker's own square
                // for a knight, otherwise the whole ray up to and including
                // the attacker.
                let mut valid_squares: Vec<Square> = Vec::new();
                let checker_is_knight =
                    self.piece_at(check.square).map(|p| p.kind) == Some(PieceKind::Knight);
                if checker_is_knight {
                    valid_squares.push(check.square);
                } else {
                    for i in 1..8i8 {
                        match square(
                            king.row as i8 + check.dir.0 * i,
                            king.col as i8 + check.dir.1 * i,
                        ) {
                            Some(sq) => {
                                valid_squares.push(sq);
                                if sq == check.square {
                                    break;
                                }
                            }
                            None => break,
                        }
                    }
                }
                // King moves were already vetted by trial placement.
                moves.retain(|m| {
                    m.piece_moved.kind == PieceKind::King || valid_squares.contains(&m.to)
                });
            } else {
                // Double check: only the king can resolve both threats.
                let king = self.king_square(self.side_to_move);
                self.king_moves(king, &mut moves);
            }
        } else {
            self.pseudo_moves(&mut moves);
        }

        if moves.is_empty() {
            self.checkmate = self.in_check;
            self.stalemate = !self.in_check;
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        moves
    }

    /// Executes the move, promoting to a queen when it is a promotion.
    pub fn make_move(&mut self, mv: Move) {
        self.make_move_with_promotion(mv, PieceKind::Queen);
    }

    /// Executes the move with a caller-supplied promotion kind (one of
    /// queen, rook, bishop, knight; ignored for non-promotions).
    pub fn make_move_with_promotion(&mut self, mv: Move, promotion: PieceKind) {
        let prev_en_passant = self.en_passant;

        self.board[mv.from.index()] = None;
        self.board[mv.to.index()] = Some(mv.piece_moved);

        if mv.piece_moved.kind == PieceKind::King {
            self.king_sq[mv.piece_moved.color.idx()] = mv.to;
        }

        if mv.is_promotion {
            self.board[mv.to.index()] = Some(Piece {
                color: mv.piece_moved.color,
                kind: promotion,
            });
        }

        if mv.is_en_passant {
            // The captured pawn sits beside the start square, not on the
            // landing square.
            let beside = Square {
                row: mv.from.row,
                col: mv.to.col,
            };
            self.board[beside.index()] = None;
        }

        // A double pawn push opens the passed-over square to en passant for
        // exactly one reply.
        if mv.piece_moved.kind == PieceKind::Pawn
            && (mv.from.row as i8 - mv.to.row as i8).abs() == 2
        {
            self.en_passant = Some(Square {
                row: (mv.from.row + mv.to.row) / 2,
                col: mv.from.col,
            });
        } else {
            self.en_passant = None;
        }

        self.move_log.push(LogEntry {
            mv,
            prev_en_passant,
        });
        self.side_to_move = self.side_to_move.other();
    }

    /// Reverts the last move; a no-op when the log is empty.
    pub fn undo_move(&mut self) {
        let entry = match self.move_log.pop() {
            Some(e) => e,
            None => return,
        };
        let mv = entry.mv;

        self.board[mv.from.index()] = Some(mv.piece_moved);
        self.board[mv.to.index()] = mv.piece_captured;
        if mv.is_en_passant {
            self.board[mv.to.index()] = None;
            let beside = Square {
                row: mv.from.row,
                col: mv.to.col,
            };
            self.board[beside.index()] = mv.piece_captured;
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_sq[mv.piece_moved.color.idx()] = mv.from;
        }

        self.en_passant = entry.prev_en_passant;
        self.side_to_move = self.side_to_move.other();

        // Stale until the next valid_moves call; never let a terminal flag
        // outlive the position it was computed for.
        self.checkmate = false;
        self.stalemate = false;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
