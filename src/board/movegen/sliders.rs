//! Rook, bishop and queen move generation.

use super::super::attacks::{BISHOP_DIRS, KING_OFFSETS, ROOK_DIRS};
use super::super::state::Position;
use super::super::types::{MoveList, Special, Square};

impl Position {
    pub(crate) fn rook_moves(&self, from: Square, moves: &mut MoveList) {
        self.ray_moves(from, &ROOK_DIRS, moves);
    }

    pub(crate) fn bishop_moves(&self, from: Square, moves: &mut MoveList) {
        self.ray_moves(from, &BISHOP_DIRS, moves);
    }

    pub(crate) fn queen_moves(&self, from: Square, moves: &mut MoveList) {
        // the king offsets double as the queen's eight ray directions
        self.ray_moves(from, &KING_OFFSETS, moves);
    }

    /// Walk each direction, pushing empty squares and the first opponent
    /// square, stopping before a friendly piece.
    fn ray_moves(&self, from: Square, dirs: &[(isize, isize)], moves: &mut MoveList) {
        let (color, _) = self.piece_at(from).expect("ray_moves: square empty");
        for &(dc, dr) in dirs {
            let mut current = from.offset(dc, dr);
            while let Some(to) = current {
                match self.piece_at(to) {
                    Some((occupant_color, _)) => {
                        if occupant_color != color {
                            moves.push(self.new_move(from, to, Special::Quiet));
                        }
                        break;
                    }
                    None => moves.push(self.new_move(from, to, Special::Quiet)),
                }
                current = to.offset(dc, dr);
            }
        }
    }
}
