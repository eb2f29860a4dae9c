//! Knight move generation.

use super::super::attacks::KNIGHT_OFFSETS;
use super::super::state::Position;
use super::super::types::{MoveList, Special, Square};

impl Position {
    pub(crate) fn knight_moves(&self, from: Square, moves: &mut MoveList) {
        let (color, _) = self.piece_at(from).expect("knight_moves: square empty");
        for (dc, dr) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(dc, dr) else {
                continue;
            };
            match self.piece_at(to) {
                Some((occupant_color, _)) if occupant_color == color => {}
                _ => moves.push(self.new_move(from, to, Special::Quiet)),
            }
        }
    }
}
