//! FEN import/export and long-notation move lookup.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::state::Position;
use super::types::{Color, Move, Piece, Square};

impl Position {
    /// Parse a position from Forsyth-Edwards Notation.
    ///
    /// The castling field is read but ignored (this game has no castling);
    /// the halfmove and fullmove counters may be absent.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut pos = Position::empty();

        // Piece placement, top rank (row 0) first
        for (row, rank_str) in parts[0].split('/').enumerate() {
            if row >= 8 {
                return Err(FenError::TooManyRanks);
            }
            let mut col = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(FenError::TooManyFiles { rank: row });
                    }
                    pos.set_piece(Square::new(col, row), color, piece);
                    col += 1;
                }
            }
        }

        pos.to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // parts[2] is the castling field: ignored

        pos.en_passant = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        // remaining fields (clocks) are not tracked

        Ok(pos)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    ///
    /// The castling and clock fields are constants because the engine does
    /// not track them.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for row in 0..8 {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Square::new(col, row)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            rows.push(rank);
        }

        let stm = match self.to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let ep = self
            .en_passant()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {stm} - {ep} 0 1", rows.join("/"))
    }

    /// Find the legal move whose long notation matches `input`
    /// (e.g. "Ra1-d1", "Re7xe8", "e2-e4", "d7xe8=Q").
    pub fn find_move(&mut self, input: &str) -> Result<Move, MoveParseError> {
        self.legal_moves()
            .iter()
            .find(|m| m.long_string() == input)
            .ok_or_else(|| MoveParseError::UnknownMove {
                notation: input.to_string(),
            })
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
