//! Per-piece pseudo-legal move generation, folded into `GameState`.
//!
//! Every generator is pin-aware: a pinned piece is restricted to the pin
//! axis (the pin direction and its exact opposite), and a pinned knight
//! cannot move at all. King moves are vetted by trial placement, so the
//! lists produced here only need the check-interception filter in
//! `valid_moves` to become fully legal.

use crate::analysis::{KNIGHT_OFFSETS, RAY_DIRS};
use crate::state::GameState;
use crate::types::*;

const ORTHO_DIRS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
const DIAG_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl GameState {
    /// All pseudo-legal moves for the side to move, appended to `out`.
    /// Takes `&mut self` because king generation briefly relocates the
    /// tracked king position (and restores it).
    pub(crate) fn pseudo_moves(&mut self, out: &mut Vec<Move>) {
        for idx in 0..64usize {
            let pc = match self.board[idx] {
                Some(p) => p,
                None => continue,
            };
            if pc.color != self.side_to_move {
                continue;
            }
            let from = Square {
                row: (idx / 8) as u8,
                col: (idx % 8) as u8,
            };
            match pc.kind {
                PieceKind::Pawn => self.pawn_moves(from, out),
                PieceKind::Knight => self.knight_moves(from, out),
                PieceKind::Bishop => self.slider_moves(from, &DIAG_DIRS, out),
                PieceKind::Rook => self.slider_moves(from, &ORTHO_DIRS, out),
                PieceKind::Queen => self.slider_moves(from, &RAY_DIRS, out),
                PieceKind::King => self.king_moves(from, out),
            }
        }
    }

    /// Pin direction recorded for the piece on `sq`, if any.
    fn pin_direction(&self, sq: Square) -> Option<(i8, i8)> {
        self.pins.iter().find(|p| p.square == sq).map(|p| p.dir)
    }

    fn pawn_moves(&self, from: Square, out: &mut Vec<Move>) {
        let color = self.board[from.index()].expect("pawn generator on empty square").color;
        let pin = self.pin_direction(from);
        let along = |d: (i8, i8)| pin.is_none() || pin == Some(d) || pin == Some((-d.0, -d.1));

        let (dir, start_row): (i8, u8) = match color {
            Color::White => (-1, 6),
            Color::Black => (1, 1),
        };

        // Forward pushes
        if let Some(to) = square(from.row as i8 + dir, from.col as i8) {
            if self.board[to.index()].is_none() && along((dir, 0)) {
                out.push(Move::new(from, to, &self.board));
                if from.row == start_row {
                    if let Some(to2) = square(from.row as i8 + 2 * dir, from.col as i8) {
                        if self.board[to2.index()].is_none() {
                            out.push(Move::new(from, to2, &self.board));
                        }
                    }
                }
            }
        }

        // Diagonal captures, including en passant into the marked square
        for dc in [-1i8, 1] {
            let to = match square(from.row as i8 + dir, from.col as i8 + dc) {
                Some(s) => s,
                None => continue,
            };
            if !along((dir, dc)) {
                continue;
            }
            match self.board[to.index()] {
                Some(target) if target.color != color => {
                    out.push(Move::new(from, to, &self.board));
                }
                None if self.en_passant == Some(to) => {
                    out.push(Move::en_passant(from, to, &self.board));
                }
                _ => {}
            }
        }
    }

    fn knight_moves(&self, from: Square, out: &mut Vec<Move>) {
        // A knight can never stay on a ray, so any pin immobilizes it.
        if self.pin_direction(from).is_some() {
            return;
        }
        let color = self.board[from.index()].expect("knight generator on empty square").color;
        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(to) = square(from.row as i8 + dr, from.col as i8 + dc) {
                match self.board[to.index()] {
                    None => out.push(Move::new(from, to, &self.board)),
                    Some(pc) if pc.color != color => out.push(Move::new(from, to, &self.board)),
                    _ => {}
                }
            }
        }
    }

    fn slider_moves(&self, from: Square, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
        let color = self.board[from.index()].expect("slider generator on empty square").color;
        let pin = self.pin_direction(from);
        for &(dr, dc) in dirs {
            if let Some(p) = pin {
                if p != (dr, dc) && p != (-dr, -dc) {
                    continue;
                }
            }
            let mut dist = 1i8;
            while let Some(to) = square(from.row as i8 + dr * dist, from.col as i8 + dc * dist) {
                match self.board[to.index()] {
                    None => out.push(Move::new(from, to, &self.board)),
                    Some(pc) if pc.color != color => {
                        out.push(Move::new(from, to, &self.board));
                        break;
                    }
                    _ => break,
                }
                dist += 1;
            }
        }
    }

    /// King moves with self-check avoidance by trial placement: relocate
    /// the tracked king position, rerun the pin/check scan, keep the move
    /// only if the tentative spot is safe, and always restore the tracked
    /// position. A static attacked-square test would not do: pins are
    /// relative to where the king stands.
    pub(crate) fn king_moves(&mut self, from: Square, out: &mut Vec<Move>) {
        let color = self.board[from.index()].expect("king generator on empty square").color;
        for &(dr, dc) in &RAY_DIRS {
            let to = match square(from.row as i8 + dr, from.col as i8 + dc) {
                Some(s) => s,
                None => continue,
            };
            if let Some(pc) = self.board[to.index()] {
                if pc.color == color {
                    continue;
                }
            }
            let saved = self.king_sq[color.idx()];
            self.king_sq[color.idx()] = to;
            let (would_be_check, _, _) = self.check_for_pins_and_checks(color);
            self.king_sq[color.idx()] = saved;
            if !would_be_check {
                out.push(Move::new(from, to, &self.board));
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
