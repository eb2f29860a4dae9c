//! Chess puzzle generator and solver.
//!
//! The engine plays itself until it stumbles into a forced mate, rewinds the
//! game just far enough that the mate is as long as requested, and hands the
//! resulting position over as a "mate in N" puzzle. Built on:
//! - A mutable board with make/undo move generation (no copies during search)
//! - Alpha-beta negamax with mate-distance scoring
//! - A shared transposition cache keyed by a position content hash
//!
//! # Quick Start
//!
//! ```
//! use puzzlegen::board::Position;
//! use puzzlegen::cache::Cache;
//! use puzzlegen::search::{evaluate, find_fastest_mate, MATE, MIN_DEPTH};
//!
//! // The starting position is balanced at shallow depth
//! let mut pos = Position::new();
//! let mut cache = Cache::new();
//! assert_eq!(evaluate(&mut pos, MIN_DEPTH, &mut cache, -MATE, MATE), 0);
//!
//! // A back-rank mate is found one move out
//! let mut mate = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
//! assert_eq!(
//!     find_fastest_mate(&mut mate, 3, &mut cache),
//!     "White mates in 1"
//! );
//! ```
//!
//! # Building Positions
//!
//! ```
//! use puzzlegen::board::{Color, Position};
//!
//! // From FEN notation
//! let pos = Position::from_fen("8/8/8/8/3k4/8/8/3K4 w - - 0 1");
//!
//! // From explicit piece lists ("e4" places a pawn)
//! let pos = Position::from_piece_lists(
//!     &["Kg1", "Ra8"],
//!     &["Kh8", "g7", "h7"],
//!     Color::White,
//!     None,
//! )
//! .unwrap();
//! ```
//!
//! # Making Moves
//!
//! ```
//! use puzzlegen::board::Position;
//!
//! let mut pos = Position::new();
//! assert_eq!(pos.legal_moves().len(), 20);
//!
//! // Moves are addressed in long algebraic notation
//! let m = pos.find_move("e2-e4").unwrap();
//! pos.make_move(m);
//! pos.undo_move(); // restored bit-for-bit
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Color`, `Square`, `Move`
//!   and `Special`

#![warn(clippy::pedantic)]
// Square and depth arithmetic mixes indices and offsets throughout
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod cache;
pub mod puzzle;
pub mod search;
