//! King move generation. Castling is not part of this game.

use super::super::attacks::KING_OFFSETS;
use super::super::state::Position;
use super::super::types::{MoveList, Special, Square};

impl Position {
    pub(crate) fn king_moves(&self, from: Square, moves: &mut MoveList) {
        let (color, _) = self.piece_at(from).expect("king_moves: square empty");
        for (dc, dr) in KING_OFFSETS {
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

#[cfg(test)]
mod tests {
    use crate::board::{Color, Position};

    #[test]
    fn test_bare_king_in_center() {
        let mut pos =
            Position::from_piece_lists(&["Ke4"], &["Ka8"], Color::White, None).unwrap();
        assert_eq!(pos.legal_moves().len(), 8);
    }

    #[test]
    fn test_kings_keep_their_distance() {
        let mut pos =
            Position::from_piece_lists(&["Ke4"], &["Ke6"], Color::White, None).unwrap();
        let targets: Vec<String> = pos
            .legal_moves()
            .iter()
            .map(|m| m.to().to_string())
            .collect();
        // d5, e5 and f5 are adjacent to the black king
        for forbidden in ["d5", "e5", "f5"] {
            assert!(!targets.contains(&forbidden.to_string()));
        }
        assert_eq!(targets.len(), 5);
    }
}
