//! Board state: the mutable `Position`.

use std::fmt;
use std::hash::Hasher;

use rustc_hash::FxHasher;

use super::error::PieceListError;
use super::types::{bit_for_square, Bitboard, Color, Move, Piece, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A board position, mutated exclusively through `make_move` / `undo_move`.
///
/// The mailbox `board` answers "what stands on this square"; the redundant
/// per-color, per-piece bitboards answer "where are all pieces of this kind".
/// Both are kept in lockstep by `set_piece` / `remove_piece`. The position is
/// never copied during search: the evaluator threads one instance through the
/// whole recursion and unwinds it move by move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: [Option<(Color, Piece)>; 64],
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) to_move: Color,
    pub(crate) en_passant: Option<Square>,
    pub(crate) history: Vec<Move>,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Position::from_fen(START_FEN)
    }

    pub(crate) fn empty() -> Self {
        Position {
            board: [None; 64],
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            to_move: Color::White,
            en_passant: None,
            history: Vec::new(),
        }
    }

    /// Build a position from explicit piece lists, e.g.
    /// `from_piece_lists(&["Kg1", "Ra8"], &["Kh8", "g7"], Color::White, None)`.
    ///
    /// A two-character entry ("e4") places a pawn; otherwise the first
    /// character is the piece letter (case-insensitive, the list determines
    /// the color).
    pub fn from_piece_lists(
        white: &[&str],
        black: &[&str],
        to_move: Color,
        en_passant: Option<&str>,
    ) -> Result<Self, PieceListError> {
        let mut pos = Position::empty();
        for (color, list) in [(Color::White, white), (Color::Black, black)] {
            for entry in list {
                let (piece, square) = match entry.len() {
                    2 => (Piece::Pawn, entry.parse::<Square>()?),
                    3 => {
                        let c = entry.chars().next().unwrap_or('?');
                        let piece =
                            Piece::from_char(c).ok_or(PieceListError::InvalidPiece { char: c })?;
                        (piece, entry[c.len_utf8()..].parse::<Square>()?)
                    }
                    _ => {
                        return Err(PieceListError::InvalidEntry {
                            entry: (*entry).to_string(),
                        })
                    }
                };
                pos.set_piece(square, color, piece);
            }
        }
        pos.to_move = to_move;
        pos.en_passant = match en_passant {
            Some(s) => Some(s.parse::<Square>()?),
            None => None,
        };
        Ok(pos)
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq);
        self.board[sq.as_index()] = Some((color, piece));
        self.pieces[color.index()][piece.index()].0 |= bit;
        self.occupied[color.index()].0 |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq);
        self.board[sq.as_index()] = None;
        self.pieces[color.index()][piece.index()].0 &= !bit;
        self.occupied[color.index()].0 &= !bit;
    }

    /// What stands on the given square
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board[sq.as_index()]
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty_square(&self, sq: Square) -> bool {
        self.board[sq.as_index()].is_none()
    }

    /// Side whose legal moves are next enumerated
    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Square a pawn may capture onto en passant, if any
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Number of plies played on this position since construction
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// The most recent move not yet undone
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Square of the given side's king.
    ///
    /// # Panics
    /// Panics if the king is missing; every reachable position has one king
    /// per side.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.try_king_square(color)
            .expect("king missing from the board")
    }

    /// Square of the given side's king, or `None` when a hand-built
    /// position lacks one.
    #[must_use]
    pub(crate) fn try_king_square(&self, color: Color) -> Option<Square> {
        self.pieces[color.index()][Piece::King.index()].first()
    }

    /// Total number of pieces on the board
    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.occupied[0].popcount() + self.occupied[1].popcount()
    }

    /// Signed material count in White's frame.
    #[must_use]
    pub fn material(&self) -> i32 {
        let mut total = 0;
        for piece in Piece::ALL {
            let diff = self.pieces[Color::White.index()][piece.index()].popcount() as i32
                - self.pieces[Color::Black.index()][piece.index()].popcount() as i32;
            total += diff * piece.value();
        }
        total
    }

    /// Content hash of the position: board occupancy, en-passant target and
    /// side to move. Deterministic across runs and platforms. Collisions are
    /// possible and tolerated; the cache treats hash equality as identity, so
    /// callers needing freedom from accidental aliasing clear the cache
    /// between runs.
    #[must_use]
    pub fn hash(&self) -> u64 {
        let mut bytes = [b'.'; 64];
        for (idx, entry) in self.board.iter().enumerate() {
            if let Some((color, piece)) = entry {
                bytes[idx] = piece.to_fen_char(*color) as u8;
            }
        }
        let mut hasher = FxHasher::default();
        hasher.write(&bytes);
        hasher.write_i32(self.en_passant.map_or(-1, |sq| sq.as_index() as i32));
        hasher.write_u8(match self.to_move {
            Color::White => b'w',
            Color::Black => b'b',
        });
        hasher.finish()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#  a b c d e f g h  #")?;
        writeln!(f)?;
        for row in 0..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0..8 {
                let c = self
                    .piece_at(Square::new(col, row))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, "{c} ")?;
            }
            writeln!(f, " {}", 8 - row)?;
        }
        writeln!(f)?;
        writeln!(f, "#  a b c d e f g h  #")?;
        match self.to_move {
            Color::White => writeln!(f, "white to move"),
            Color::Black => writeln!(f, "black to move"),
        }
    }
}
