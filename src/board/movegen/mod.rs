//! Legal move generation.
//!
//! Moves are generated pseudo-legally per piece type, then filtered by
//! playing each one and rejecting those that leave the mover's own king
//! attacked. Castling is not generated.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::state::Position;
use super::types::{Move, MoveList, Piece, Special, Square};

impl Position {
    /// All legal moves for the side to move.
    ///
    /// Takes `&mut self` because legality is checked by making each
    /// candidate on the board and undoing it; the position is unchanged on
    /// return.
    #[must_use]
    pub fn legal_moves(&mut self) -> MoveList {
        let mover = self.to_move;
        let mut pseudo = MoveList::new();
        for piece in Piece::ALL {
            for from in self.pieces[mover.index()][piece.index()].iter() {
                self.pseudo_legal_for(piece, from, &mut pseudo);
            }
        }

        let mut legal = MoveList::new();
        for m in pseudo.iter() {
            self.make_move(m);
            // a hand-built position may lack the mover's king entirely;
            // then there is nothing to expose and the move stands
            let in_check = self
                .try_king_square(mover)
                .is_some_and(|king| self.is_attacked(king, mover.opponent()));
            if !in_check {
                legal.push(m);
            }
            self.undo_move();
        }
        legal
    }

    fn pseudo_legal_for(&self, piece: Piece, from: Square, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.pawn_moves(from, moves),
            Piece::Knight => self.knight_moves(from, moves),
            Piece::Bishop => self.bishop_moves(from, moves),
            Piece::Rook => self.rook_moves(from, moves),
            Piece::Queen => self.queen_moves(from, moves),
            Piece::King => self.king_moves(from, moves),
        }
    }

    /// Build a move from the side to move, recording whatever stands on `to`
    /// and the current en-passant target for undo.
    pub(crate) fn new_move(&self, from: Square, to: Square, special: Special) -> Move {
        let (color, piece) = self
            .piece_at(from)
            .expect("move generation: from-square is empty");
        let captured = match special {
            // the en-passant victim is not on the destination square
            Special::EnPassant => None,
            _ => self.piece_at(to).map(|(_, p)| p),
        };
        Move::new(from, to, color, piece, captured, special, self.en_passant)
    }
}
