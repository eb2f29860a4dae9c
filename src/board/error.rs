//! Error types for board construction and move input.

use std::fmt;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation (expects e.g. "e4")
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few fields (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in the placement field
    InvalidPiece { char: char },
    /// Placement field has more than eight ranks
    TooManyRanks,
    /// A rank describes more than eight files
    TooManyFiles { rank: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::TooManyRanks => write!(f, "FEN placement has more than 8 ranks"),
            FenError::TooManyFiles { rank } => {
                write!(f, "Too many files in FEN rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for piece-list construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceListError {
    /// Entry does not name a piece ("Re7") or a pawn square ("e4")
    InvalidEntry { entry: String },
    /// Invalid piece letter in an entry
    InvalidPiece { char: char },
    /// Invalid square in an entry or en passant argument
    InvalidSquare { notation: String },
}

impl fmt::Display for PieceListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceListError::InvalidEntry { entry } => {
                write!(f, "Invalid piece-list entry '{entry}'")
            }
            PieceListError::InvalidPiece { char } => {
                write!(f, "Invalid piece letter '{char}' in piece list")
            }
            PieceListError::InvalidSquare { notation } => {
                write!(f, "Invalid square '{notation}' in piece list")
            }
        }
    }
}

impl std::error::Error for PieceListError {}

impl From<SquareError> for PieceListError {
    fn from(err: SquareError) -> Self {
        match err {
            SquareError::InvalidNotation { notation } => PieceListError::InvalidSquare { notation },
        }
    }
}

/// Error type for user move input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Input does not match the long notation of any legal move
    UnknownMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::UnknownMove { notation } => {
                write!(f, "No legal move matches '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_display() {
        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn test_fen_error_display() {
        let err = FenError::TooFewParts { found: 2 };
        assert!(err.to_string().contains('2'));
        let err = FenError::InvalidPiece { char: 'x' };
        assert!(err.to_string().contains("'x'"));
        let err = FenError::InvalidSideToMove {
            found: "q".to_string(),
        };
        assert!(err.to_string().contains("'q'"));
    }

    #[test]
    fn test_piece_list_error_from_square_error() {
        let err: PieceListError = SquareError::InvalidNotation {
            notation: "j9".to_string(),
        }
        .into();
        assert_eq!(
            err,
            PieceListError::InvalidSquare {
                notation: "j9".to_string()
            }
        );
    }

    #[test]
    fn test_move_parse_error_display() {
        let err = MoveParseError::UnknownMove {
            notation: "Ra1-d9".to_string(),
        };
        assert!(err.to_string().contains("Ra1-d9"));
    }
}
