//! Making and un-making moves.

use super::state::Position;
use super::types::{Color, Move, Piece, Special, Square};

/// Square of the pawn captured en passant: directly behind the capturing
/// pawn's destination.
fn en_passant_victim(to: Square, mover: Color) -> Square {
    match mover {
        Color::White => Square::from_index(to.as_index() + 8),
        Color::Black => Square::from_index(to.as_index() - 8),
    }
}

impl Position {
    /// Apply `m` to the board. The move must come from `legal_moves`; no
    /// validity checking is performed beyond internal-consistency panics.
    ///
    /// # Panics
    /// Panics when the board state contradicts the move (mover or captured
    /// piece not where expected). That is a bug, not a condition.
    pub fn make_move(&mut self, m: Move) {
        let (color, piece) = self
            .piece_at(m.from())
            .expect("make_move: from-square is empty");

        self.remove_piece(m.from(), color, piece);
        if m.captured().is_some() {
            let (cap_color, cap_piece) = self
                .piece_at(m.to())
                .expect("make_move: captured piece not found");
            self.remove_piece(m.to(), cap_color, cap_piece);
        }

        match m.special() {
            Special::Quiet => self.set_piece(m.to(), color, piece),
            Special::Promotion(promoted) => self.set_piece(m.to(), color, promoted),
            Special::EnPassant => {
                let victim_sq = en_passant_victim(m.to(), color);
                let (victim_color, victim_piece) = self
                    .piece_at(victim_sq)
                    .expect("make_move: en-passant victim not found");
                self.remove_piece(victim_sq, victim_color, victim_piece);
                self.set_piece(m.to(), color, piece);
            }
        }

        self.history.push(m);

        // A double pawn push opens the midpoint square to en-passant capture
        let from_idx = m.from().as_index() as isize;
        let to_idx = m.to().as_index() as isize;
        self.en_passant = if piece == Piece::Pawn && (from_idx - to_idx).abs() == 16 {
            Some(Square::from_index(((from_idx + to_idx) / 2) as usize))
        } else {
            None
        };

        self.to_move = self.to_move.opponent();
    }

    /// Undo the most recent move, restoring the position bit-for-bit:
    /// board, piece sets, side to move and en-passant target all return to
    /// their state immediately before the paired `make_move`.
    ///
    /// # Panics
    /// Panics when there is no move to undo or the board state is corrupt.
    pub fn undo_move(&mut self) {
        let m = self.history.pop().expect("undo_move: history is empty");
        let color = m.color();

        let (arrived_color, arrived_piece) = self
            .piece_at(m.to())
            .expect("undo_move: to-square is empty");
        self.remove_piece(m.to(), arrived_color, arrived_piece);
        // a promotion reverts to the original pawn
        self.set_piece(m.from(), color, m.piece());

        if let Some(captured) = m.captured() {
            self.set_piece(m.to(), color.opponent(), captured);
        }
        if m.special() == Special::EnPassant {
            let victim_sq = en_passant_victim(m.to(), color);
            self.set_piece(victim_sq, color.opponent(), Piece::Pawn);
        }

        self.en_passant = m.prev_en_passant();
        self.to_move = color;
    }
}
