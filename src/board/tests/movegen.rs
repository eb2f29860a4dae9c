//! Generation/attack consistency tests.

use rand::prelude::*;

use crate::board::{Color, Piece, Position};

#[test]
fn test_no_legal_move_leaves_own_king_attacked() {
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(0xAB1E);

    for _ in 0..60 {
        let mover = pos.to_move();
        let moves = pos.legal_moves().to_vec();
        if moves.is_empty() {
            break;
        }
        for &m in &moves {
            pos.make_move(m);
            let king = pos.king_square(mover);
            assert!(
                !pos.is_attacked(king, mover.opponent()),
                "{} leaves the king in check",
                m.long_string()
            );
            pos.undo_move();
        }
        pos.make_move(moves[rng.gen_range(0..moves.len())]);
    }
}

#[test]
fn test_double_check_forces_king_move() {
    // rook on e8 and knight on f3 both give check; no block or capture
    // answers both
    let mut pos = Position::from_piece_lists(
        &["Ke1", "Qd1", "Ra1"],
        &["Kh8", "Re8", "Nf3"],
        Color::White,
        None,
    )
    .unwrap();
    let moves = pos.legal_moves();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.piece() == Piece::King));
}

#[test]
fn test_en_passant_is_illegal_when_it_exposes_the_king() {
    // c5 and d5 shield the white king from the b5 rook; the en-passant
    // capture would clear both off the fifth rank at once
    let mut pos = Position::from_piece_lists(
        &["Kh5", "d5"],
        &["Ka8", "c5", "Rb5"],
        Color::White,
        Some("c6"),
    )
    .unwrap();
    let moves = pos.legal_moves();
    assert!(
        moves.iter().all(|m| !m.is_en_passant()),
        "d5xc6 exposes the king along the rank and must be filtered"
    );
}

#[test]
fn test_check_evasion_by_block_and_capture() {
    // the e8 rook checks along the open e-file
    let mut pos = Position::from_piece_lists(
        &["Ke1", "Qa4", "Nc7"],
        &["Kh8", "Re8"],
        Color::White,
        None,
    )
    .unwrap();
    let longs: Vec<String> = pos.legal_moves().iter().map(|m| m.long_string()).collect();
    assert!(longs.contains(&"Nc7xe8".to_string()));
    assert!(longs.contains(&"Qa4xe8".to_string()));
    assert!(longs.contains(&"Qa4-e4".to_string()));
    // every non-king evasion interposes on, or captures along, the e-file
    for m in pos.legal_moves().iter() {
        if m.piece() != Piece::King {
            assert_eq!(m.to().col(), 4, "{} ignores the check", m.long_string());
        }
    }
}
