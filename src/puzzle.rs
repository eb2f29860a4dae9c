//! Puzzle generation and solution checking.
//!
//! The generator lets the engine play itself at shallow depth until the game
//! runs into a forced mate, then rewinds with progressively deeper searches
//! until the recorded mate is as long as requested, and finally makes sure
//! the winning side is the one to move. The resulting position is a
//! "mate in N" puzzle whose solution moves can be checked one by one with
//! [`is_solution`].

use std::hash::Hasher;
use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rustc_hash::FxHasher;

use crate::board::{Move, Position};
use crate::cache::Cache;
use crate::search::{evaluate, iter_evaluate, worsen, MATE, MATE_THRESHOLD, MAX_DEPTH, MIN_DEPTH};

/// Receives progress notifications while a puzzle is generated.
pub trait Progress {
    /// A generation phase starts (e.g. "Generating puzzle").
    fn begin(&mut self, phase: &str);
    /// One step of work within the current phase.
    fn step(&mut self);
    /// The current phase finished.
    fn finish(&mut self);
}

/// Prints progress to stdout, one '#' per step.
pub struct StdoutProgress;

impl Progress for StdoutProgress {
    fn begin(&mut self, phase: &str) {
        print!("{phase}...");
        let _ = io::stdout().flush();
    }

    fn step(&mut self) {
        print!("#");
        let _ = io::stdout().flush();
    }

    fn finish(&mut self) {
        println!("...done!");
    }
}

/// Discards all progress notifications.
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn begin(&mut self, _phase: &str) {}
    fn step(&mut self) {}
    fn finish(&mut self) {}
}

/// Stable hash of a seed string, used to seed the PRNG. Must not vary across
/// runs or platforms: equal seeds promise equal puzzles.
fn seed_hash(seed: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(seed.as_bytes());
    hasher.finish()
}

/// Play one best move at the given depth, chosen at random among equals.
///
/// Does nothing when there is no legal move (mate or stalemate). On return
/// the chosen move is left on the board.
///
/// # Panics
/// Panics when no legal move reaches the freshly computed target evaluation;
/// the target was just produced by searching these very moves, so this is an
/// internal logic error.
pub fn play_random_best(pos: &mut Position, max_depth: i32, cache: &mut Cache, rng: &mut StdRng) {
    let mut moves = pos.legal_moves().to_vec();
    moves.shuffle(rng);

    if moves.is_empty() {
        return;
    }

    // The stored evaluation may come from a deeper search whose score this
    // depth cannot reproduce; re-evaluate from scratch.
    cache.remove(pos.hash());
    let target = iter_evaluate(pos, max_depth, cache);

    for m in moves {
        pos.make_move(m);
        if worsen(iter_evaluate(pos, max_depth - 1, cache)) == target {
            return;
        }
        pos.undo_move();
    }

    panic!("play_random_best: no move matches the target evaluation");
}

/// Generate a mate-in-at-most-`max_moves` puzzle by self-play.
///
/// A non-empty `seed` makes the result deterministic: the cache is cleared
/// (cached scores steer move ordering, so leftovers would leak state between
/// runs) and the PRNG is reseeded from the seed string.
pub fn generate_puzzle(
    cache: &mut Cache,
    max_moves: i32,
    seed: &str,
    rng: &mut StdRng,
    progress: &mut dyn Progress,
) -> Position {
    if !seed.is_empty() {
        cache.clear();
        *rng = StdRng::seed_from_u64(seed_hash(seed));
    }

    progress.begin("Generating puzzle");
    let mut pos = Position::new();
    while evaluate(&mut pos, MIN_DEPTH, cache, -MATE, MATE).abs() < MATE_THRESHOLD {
        if pos.ply_count() > 150 || pos.legal_moves().is_empty() {
            // shallow self-play sometimes wanders without converging
            // (e.g. K+R vs K) or runs into stalemate; start a fresh game
            pos = Position::new();
        }
        play_random_best(&mut pos, MIN_DEPTH, cache, rng);
        progress.step();
    }
    progress.finish();

    progress.begin("Reinforcing the puzzle");

    // longest mate proven while rewinding, to know where to walk back to
    let mut longest_mate = 0;
    // rewound moves, in case some must be replayed
    let mut undone: Vec<Move> = Vec::new();

    let mut depth = 2;
    while iter_evaluate(&mut pos, depth, cache).abs() > MATE_THRESHOLD {
        let moves_to_mate =
            (MATE - evaluate(&mut pos, MIN_DEPTH, cache, -MATE, MATE).abs() + 1) / 2;
        longest_mate = longest_mate.max(moves_to_mate);
        if moves_to_mate == max_moves {
            break;
        }
        undone.push(pos.last_move().expect("reinforce: no move to rewind"));
        pos.undo_move();
        if depth < MAX_DEPTH {
            depth += 1;
        }
        progress.step();
    }

    if evaluate(&mut pos, MIN_DEPTH, cache, -MATE, MATE).abs() < MATE_THRESHOLD {
        // rewound one move past the last proven mate
        let m = undone.pop().expect("reinforce: rewind stack is empty");
        pos.make_move(m);
    }

    // mate in max_moves, or the longest mate found, whichever is shorter
    let target = max_moves.min(longest_mate);
    while (MATE - evaluate(&mut pos, MIN_DEPTH, cache, -MATE, MATE).abs() + 1) / 2 < target {
        let m = undone.pop().expect("reinforce: rewind stack is empty");
        pos.make_move(m);
    }

    if evaluate(&mut pos, MIN_DEPTH, cache, -MATE, MATE).abs() % 2 == 0 {
        // an even mate distance means the losing side is to move; let it
        // play its best reply so the solver starts with the winning side
        play_random_best(&mut pos, 2, cache, rng);
    }
    progress.finish();

    pos
}

/// Does `m` preserve the fastest mate? True for every optimal move; a puzzle
/// can have more than one solution.
pub fn is_solution(pos: &mut Position, m: Move, cache: &mut Cache) -> bool {
    let eval = evaluate(pos, MIN_DEPTH, cache, -MATE, MATE);
    pos.make_move(m);
    let preserved = worsen(iter_evaluate(pos, MATE - eval.abs() - 1, cache)) == eval;
    pos.undo_move();
    preserved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5EED)
    }

    #[test]
    fn test_seed_hash_is_stable() {
        assert_eq!(seed_hash("abc"), seed_hash("abc"));
        assert_ne!(seed_hash("abc_0"), seed_hash("abc_1"));
    }

    #[test]
    fn test_play_random_best_on_terminal_position_is_a_no_op() {
        // stalemate: black has no moves
        let mut pos = Position::from_piece_lists(
            &["Kf7", "Qg6"],
            &["Kh8"],
            Color::Black,
            None,
        )
        .unwrap();
        let before = pos.clone();
        let mut cache = Cache::new();
        play_random_best(&mut pos, MIN_DEPTH, &mut cache, &mut rng());
        assert_eq!(pos, before);
    }

    #[test]
    fn test_play_random_best_finds_the_mate() {
        let mut pos = Position::from_piece_lists(
            &["Kg1", "Ra1"],
            &["Kg8", "f7", "g7", "h7"],
            Color::White,
            None,
        )
        .unwrap();
        let mut cache = Cache::new();
        play_random_best(&mut pos, MIN_DEPTH, &mut cache, &mut rng());
        // only Ra1-a8 keeps the mate-in-1 evaluation
        assert_eq!(pos.last_move().unwrap().long_string(), "Ra1-a8");
    }

    #[test]
    fn test_is_solution_for_queening_mate() {
        // c8=Q (or =R) mates; anything else throws the win away
        let mut pos =
            Position::from_piece_lists(&["Kb6", "c7"], &["Ka8"], Color::White, None).unwrap();
        let mut cache = Cache::new();
        let queen = pos.find_move("c7-c8=Q").unwrap();
        let rook = pos.find_move("c7-c8=R").unwrap();
        let bishop = pos.find_move("c7-c8=B").unwrap();
        let king_retreat = pos.find_move("Kb6-a6").unwrap();
        assert!(is_solution(&mut pos, queen, &mut cache));
        assert!(is_solution(&mut pos, rook, &mut cache));
        assert!(!is_solution(&mut pos, bishop, &mut cache));
        assert!(!is_solution(&mut pos, king_retreat, &mut cache));
    }

    #[test]
    fn test_is_solution_leaves_position_untouched() {
        let mut pos =
            Position::from_piece_lists(&["Kb6", "c7"], &["Ka8"], Color::White, None).unwrap();
        let before = pos.clone();
        let mut cache = Cache::new();
        let m = pos.find_move("c7-c8=Q").unwrap();
        is_solution(&mut pos, m, &mut cache);
        assert_eq!(pos, before);
    }
}
