#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// Board coordinate. Row 0 is black's back rank (rank 8), row 7 is white's
/// back rank (rank 1); column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn index(self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }

    /// Algebraic name, e.g. `(6, 4)` -> "e2".
    pub fn name(self) -> String {
        let f = (b'a' + self.col) as char;
        let r = (b'8' - self.row) as char;
        format!("{f}{r}")
    }

    pub fn parse(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square {
            row: b'8' - r,
            col: f - b'a',
        })
    }
}

/// Bounds-checked square constructor; `None` when off the board.
pub fn square(row: i8, col: i8) -> Option<Square> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some(Square {
            row: row as u8,
            col: col as u8,
        })
    } else {
        None
    }
}

/// The sole positional truth: one `Option<Piece>` per square, row-major.
pub type Board = [Option<Piece>; 64];

/// Immutable description of a single move. Construction snapshots what *will*
/// be captured; it never mutates the board.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
}

impl Move {
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        let piece_moved = board[from.index()].expect("no piece on from-square");
        let is_promotion = piece_moved.kind == PieceKind::Pawn
            && ((piece_moved.color == Color::White && to.row == 0)
                || (piece_moved.color == Color::Black && to.row == 7));
        Move {
            from,
            to,
            piece_moved,
            piece_captured: board[to.index()],
            is_promotion,
            is_en_passant: false,
        }
    }

    /// Diagonal pawn move into the marked empty square; the captured pawn
    /// sits beside the start square, not on the landing square.
    pub fn en_passant(from: Square, to: Square, board: &Board) -> Self {
        let piece_moved = board[from.index()].expect("no piece on from-square");
        let beside = Square {
            row: from.row,
            col: to.col,
        };
        Move {
            from,
            to,
            piece_moved,
            piece_captured: board[beside.index()],
            is_promotion: false,
            is_en_passant: true,
        }
    }

    /// Identity key encoding the four coordinates; two moves are equal iff
    /// their keys match.
    pub fn key(&self) -> u16 {
        self.from.row as u16 * 1000
            + self.from.col as u16 * 100
            + self.to.row as u16 * 10
            + self.to.col as u16
    }

    /// From-to algebraic notation, e.g. "e2e4".
    pub fn notation(&self) -> String {
        format!("{}{}", self.from.name(), self.to.name())
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
