//! Make/undo round-trip tests.

use rand::prelude::*;

use crate::board::{Color, Position};

#[test]
fn test_en_passant_full_sequence() {
    // the classic sequence: e4, a6, e5, d5 opens e5xd6 en passant
    let mut pos = Position::new();
    for long in ["e2-e4", "a7-a6", "e4-e5", "d7-d5"] {
        let m = pos.find_move(long).unwrap();
        pos.make_move(m);
    }
    assert_eq!(pos.en_passant(), Some("d6".parse().unwrap()));

    let snapshot = pos.clone();
    let ep = pos
        .legal_moves()
        .iter()
        .find(|m| m.is_en_passant())
        .expect("e5xd6 must be available");
    assert_eq!(ep.from().to_string(), "e5");
    assert_eq!(ep.to().to_string(), "d6");
    assert_eq!(ep.short_string(), "exd6");

    pos.make_move(ep);
    assert_eq!(pos.en_passant(), None);
    pos.undo_move();
    assert_eq!(pos, snapshot);
    assert_eq!(pos.hash(), snapshot.hash());
    assert_eq!(pos.en_passant(), Some("d6".parse().unwrap()));
}

#[test]
fn test_every_legal_move_round_trips() {
    let mut pos = Position::from_fen("r3k2r/p1ppqpb1/1n2pnp1/3P4/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1");
    let snapshot = pos.clone();
    for m in pos.legal_moves().iter() {
        pos.make_move(m);
        pos.undo_move();
        assert_eq!(pos, snapshot, "undo mismatch after {}", m.long_string());
    }
}

#[test]
fn test_random_playout_round_trip() {
    let mut pos = Position::new();
    let initial = pos.clone();
    let initial_hash = pos.hash();

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut played = 0;
    for _ in 0..200 {
        let moves = pos.legal_moves().to_vec();
        if moves.is_empty() {
            break;
        }
        let m = moves[rng.gen_range(0..moves.len())];
        pos.make_move(m);
        played += 1;
    }

    for _ in 0..played {
        pos.undo_move();
    }

    assert_eq!(pos, initial);
    assert_eq!(pos.hash(), initial_hash);
}

#[test]
fn test_hash_changes_every_ply() {
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    let mut previous = pos.hash();
    for _ in 0..30 {
        let moves = pos.legal_moves().to_vec();
        if moves.is_empty() {
            break;
        }
        pos.make_move(moves[rng.gen_range(0..moves.len())]);
        let current = pos.hash();
        assert_ne!(current, previous);
        previous = current;
    }
}

#[test]
fn test_legal_moves_stable_after_make_undo() {
    let mut pos = Position::new();
    let mut before: Vec<String> = pos.legal_moves().iter().map(|m| m.long_string()).collect();
    for m in pos.legal_moves().iter() {
        pos.make_move(m);
        pos.undo_move();
    }
    let mut after: Vec<String> = pos.legal_moves().iter().map(|m| m.long_string()).collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_promotion_capture_round_trip() {
    let mut pos = Position::from_piece_lists(
        &["Kh1", "b7"],
        &["Ra8", "Kf6"],
        Color::White,
        None,
    )
    .unwrap();
    let snapshot = pos.clone();
    let m = pos.find_move("b7xa8=Q").unwrap();
    pos.make_move(m);
    assert_eq!(pos.piece_count(), 3);
    pos.undo_move();
    assert_eq!(pos, snapshot);
}
