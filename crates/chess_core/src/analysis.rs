//! Attack and pin analysis: outward ray scans from a king classify checks
//! and pins, and a raw attack map answers "is this square attacked".

use crate::state::GameState;
use crate::types::*;

/// A friendly piece that may not leave the ray between its king and an
/// enemy slider. `dir` points from the king toward the pinning piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub dir: (i8, i8),
}

/// An enemy piece currently attacking the king. `dir` points from the king
/// toward the attacker (a knight offset for knight checks).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub dir: (i8, i8),
}

/// Orthogonal directions first, then diagonals; the ray index decides which
/// slider kinds attack along it.
pub const RAY_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl GameState {
    /// Scans the 8 rays and the knight offsets from `color`'s king and
    /// classifies every pin and check. Pure query: mutates nothing.
    ///
    /// At most one friendly blocker is tracked per ray; a second friendly
    /// piece cancels the ray. The friendly king itself never counts as a
    /// blocker, which is what lets king-move generation test a tentative
    /// king location while the king still physically occupies its old
    /// square.
    pub fn check_for_pins_and_checks(&self, color: Color) -> (bool, Vec<Pin>, Vec<Check>) {
        let enemy = color.other();
        let king = self.king_square(color);
        let mut in_check = false;
        let mut pins = Vec::new();
        let mut checks = Vec::new();

        for (ray, &(dr, dc)) in RAY_DIRS.iter().enumerate() {
            let mut possible_pin: Option<Pin> = None;
            for dist in 1..8i8 {
                let sq = match square(king.row as i8 + dr * dist, king.col as i8 + dc * dist) {
                    Some(s) => s,
                    None => break,
                };
                let pc = match self.piece_at(sq) {
                    Some(p) => p,
                    None => continue,
                };
                if pc.color == color {
                    if pc.kind == PieceKind::King {
                        continue;
                    }
                    if possible_pin.is_none() {
                        possible_pin = Some(Pin {
                            square: sq,
                            dir: (dr, dc),
                        });
                    } else {
                        // Second friendly piece shields the first.
                        break;
                    }
                } else {
                    let orthogonal = ray < 4;
                    let attacks = match pc.kind {
                        PieceKind::Rook => orthogonal,
                        PieceKind::Bishop => !orthogonal,
                        PieceKind::Queen => true,
                        PieceKind::King => dist == 1,
                        // White pawns attack toward lower rows, black toward
                        // higher; seen from the king that is rays 6..7 and
                        // 4..5 respectively.
                        PieceKind::Pawn => {
                            dist == 1
                                && ((enemy == Color::White && ray >= 6)
                                    || (enemy == Color::Black && (4..6).contains(&ray)))
                        }
                        PieceKind::Knight => false,
                    };
                    if attacks {
                        match possible_pin {
                            None => {
                                in_check = true;
                                checks.push(Check {
                                    square: sq,
                                    dir: (dr, dc),
                                });
                            }
                            Some(pin) => pins.push(pin),
                        }
                    }
                    // Any enemy piece terminates the ray.
                    break;
                }
            }
        }

        // Knight checks come from off-ray squares and can never be blocked
        // or produce a pin.
        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(sq) = square(king.row as i8 + dr, king.col as i8 + dc) {
                if let Some(pc) = self.piece_at(sq) {
                    if pc.color == enemy && pc.kind == PieceKind::Knight {
                        in_check = true;
                        checks.push(Check {
                            square: sq,
                            dir: (dr, dc),
                        });
                    }
                }
            }
        }

        (in_check, pins, checks)
    }

    /// Raw attack map: does any opponent pseudo-legal move target `sq`?
    /// Deliberately ignores the opponent's own pins and checks; this is not
    /// a legality check.
    pub fn square_under_attack(&mut self, sq: Square) -> bool {
        self.side_to_move = self.side_to_move.other();
        let mut opponent_moves = Vec::with_capacity(64);
        self.pseudo_moves(&mut opponent_moves);
        self.side_to_move = self.side_to_move.other();
        opponent_moves.iter().any(|m| m.to == sq)
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod analysis_tests;
