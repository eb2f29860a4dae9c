//! Pawn move generation.

use super::super::state::Position;
use super::super::types::{MoveList, Special, Square, PROMOTION_PIECES};

impl Position {
    pub(crate) fn pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let (color, _) = self.piece_at(from).expect("pawn_moves: square empty");
        let dir = color.pawn_dir();
        let target_row = from.row() as isize + dir;
        let promoting = target_row as usize == color.promotion_row();

        // diagonal captures, including en passant
        for dc in [1, -1] {
            let Some(to) = from.offset(dc, dir) else {
                continue;
            };
            match self.piece_at(to) {
                Some((occupant_color, _)) if occupant_color != color => {
                    if promoting {
                        for promo in PROMOTION_PIECES {
                            moves.push(self.new_move(from, to, Special::Promotion(promo)));
                        }
                    } else {
                        moves.push(self.new_move(from, to, Special::Quiet));
                    }
                }
                None if Some(to) == self.en_passant => {
                    moves.push(self.new_move(from, to, Special::EnPassant));
                }
                _ => {}
            }
        }

        // single push; a pawn never stands on its own promotion row, so the
        // forward square always exists
        let Some(forward) = from.offset(0, dir) else {
            return;
        };
        if self.is_empty_square(forward) {
            if promoting {
                for promo in PROMOTION_PIECES {
                    moves.push(self.new_move(from, forward, Special::Promotion(promo)));
                }
            } else {
                moves.push(self.new_move(from, forward, Special::Quiet));
            }
        }

        // double push from the starting row
        if from.row() == color.pawn_start_row() && self.is_empty_square(forward) {
            if let Some(double) = from.offset(0, 2 * dir) {
                if self.is_empty_square(double) {
                    moves.push(self.new_move(from, double, Special::Quiet));
                }
            }
        }
    }
}
