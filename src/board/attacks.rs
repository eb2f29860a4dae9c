//! Attack detection.

use super::state::Position;
use super::types::{Color, Piece, Square};

/// Knight move offsets as (column, row) deltas
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
    (1, -2),
    (2, -1),
];

/// King move offsets
pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Orthogonal ray directions (rook, queen)
pub(crate) const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions (bishop, queen)
pub(crate) const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

impl Position {
    /// Does `by` attack `square` on the current board, regardless of whose
    /// turn it is?
    ///
    /// Probes in order, short-circuiting on the first hit: knights, pawns,
    /// kings, then orthogonal and diagonal rays. A ray stops at the first
    /// occupied square; that square blocks further attackers even when it is
    /// friendly to the target.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        for (dc, dr) in KNIGHT_OFFSETS {
            if let Some(sq) = square.offset(dc, dr) {
                if self.piece_at(sq) == Some((by, Piece::Knight)) {
                    return true;
                }
            }
        }

        // A pawn attacks diagonally forward, so the attacker stands one row
        // behind the target from its own point of view.
        let pawn_offsets: [(isize, isize); 2] = match by {
            Color::White => [(1, 1), (-1, 1)],
            Color::Black => [(1, -1), (-1, -1)],
        };
        for (dc, dr) in pawn_offsets {
            if let Some(sq) = square.offset(dc, dr) {
                if self.piece_at(sq) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        for (dc, dr) in KING_OFFSETS {
            if let Some(sq) = square.offset(dc, dr) {
                if self.piece_at(sq) == Some((by, Piece::King)) {
                    return true;
                }
            }
        }

        self.ray_hits(square, by, &ROOK_DIRS, Piece::Rook)
            || self.ray_hits(square, by, &BISHOP_DIRS, Piece::Bishop)
    }

    /// Walk each direction until a piece blocks; hit if it is a `slider` or
    /// queen of the attacking color.
    fn ray_hits(&self, square: Square, by: Color, dirs: &[(isize, isize)], slider: Piece) -> bool {
        for &(dc, dr) in dirs {
            let mut current = square.offset(dc, dr);
            while let Some(sq) = current {
                if let Some((color, piece)) = self.piece_at(sq) {
                    if color == by && (piece == slider || piece == Piece::Queen) {
                        return true;
                    }
                    break;
                }
                current = sq.offset(dc, dr);
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_knight_attack() {
        let pos =
            Position::from_piece_lists(&["Nf3", "Ke1"], &["Ke8"], Color::White, None).unwrap();
        assert!(pos.is_attacked(sq("e5"), Color::White));
        assert!(pos.is_attacked(sq("g5"), Color::White));
        assert!(!pos.is_attacked(sq("f4"), Color::White));
    }

    #[test]
    fn test_pawn_attack_directions() {
        let pos =
            Position::from_piece_lists(&["e4", "Ke1"], &["d5", "Ke8"], Color::White, None).unwrap();
        // white pawn on e4 attacks d5 and f5
        assert!(pos.is_attacked(sq("d5"), Color::White));
        assert!(pos.is_attacked(sq("f5"), Color::White));
        assert!(!pos.is_attacked(sq("e5"), Color::White));
        // black pawn on d5 attacks c4 and e4
        assert!(pos.is_attacked(sq("e4"), Color::Black));
        assert!(pos.is_attacked(sq("c4"), Color::Black));
        assert!(!pos.is_attacked(sq("d4"), Color::Black));
    }

    #[test]
    fn test_ray_attack_blocked() {
        let pos = Position::from_piece_lists(
            &["Ra1", "Nd1", "Kh2"],
            &["Ke8"],
            Color::White,
            None,
        )
        .unwrap();
        assert!(pos.is_attacked(sq("b1"), Color::White));
        assert!(pos.is_attacked(sq("c1"), Color::White));
        // the knight blocks the rook beyond d1, friendly or not
        assert!(!pos.is_attacked(sq("e1"), Color::White));
        assert!(pos.is_attacked(sq("a8"), Color::White));
    }

    #[test]
    fn test_queen_attacks_both_ways() {
        let pos =
            Position::from_piece_lists(&["Qd4", "Kh1"], &["Ka8"], Color::White, None).unwrap();
        assert!(pos.is_attacked(sq("d8"), Color::White)); // file
        assert!(pos.is_attacked(sq("a4"), Color::White)); // rank
        assert!(pos.is_attacked(sq("h8"), Color::White)); // diagonal
        assert!(!pos.is_attacked(sq("c8"), Color::White));
    }

    #[test]
    fn test_king_attack() {
        let pos =
            Position::from_piece_lists(&["Ke4"], &["Ka8"], Color::White, None).unwrap();
        assert!(pos.is_attacked(sq("d5"), Color::White));
        assert!(pos.is_attacked(sq("e5"), Color::White));
        assert!(!pos.is_attacked(sq("e6"), Color::White));
    }
}
