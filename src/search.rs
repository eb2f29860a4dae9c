//! Alpha-beta negamax evaluator with mate-distance scoring.
//!
//! Scores are plain signed integers in White's frame: positive favors White.
//! Outside mate range the score is the material count; a forced mate scores
//! `±(MATE - plies_to_mate)`, decayed one point per ply by [`worsen`] so the
//! search prefers the fastest mate and the defender the slowest.
//!
//! The search is depth-first over a single mutable [`Position`]: every
//! `make_move` is balanced by an `undo_move` on every exit path, so the
//! position is bit-identical on entry and return.

use crate::board::{Move, Position};
use crate::cache::{Cache, EXACT_DEPTH};

/// Evaluation value for mate in zero plies.
pub const MATE: i32 = 1_000_000;

/// Scores with absolute value above this denote a forced mate. Must exceed
/// any reachable material count.
pub const MATE_THRESHOLD: i32 = 2_000;

/// Smallest default depth used in calculations. The self-play and
/// verification steps all evaluate at this depth.
pub const MIN_DEPTH: i32 = 2;

/// Highest default depth. Bounds the puzzle reinforcement, and with it the
/// mate lengths the generator can prove.
pub const MAX_DEPTH: i32 = 5;

/// Decay a mate score by one ply of distance; material scores pass through.
///
/// Applied once per recursion level, this makes a mate k plies away score
/// `MATE - k`, so maximizing picks the fastest mate and pushes an
/// unavoidable one as far away as possible.
pub(crate) fn worsen(score: i32) -> i32 {
    if score.abs() < MATE_THRESHOLD {
        score
    } else if score >= MATE_THRESHOLD {
        score - 1
    } else {
        score + 1
    }
}

/// Evaluate the position to `max_depth` remaining plies.
///
/// Returns the score in White's frame. The window `(alpha, beta)` is in the
/// mover's frame, as usual for negamax; top-level callers pass
/// `(-MATE, MATE)`.
///
/// Terminal rules: no legal moves is checkmate when the mover's king is
/// attacked and stalemate otherwise; two bare kings draw. All three are
/// cached as exact. A depth-exhausted leaf scores material. Interior nodes
/// search children ordered by previously cached scores, best first; results
/// produced by a beta cutoff are bounds, not exact values, and are not
/// cached.
pub fn evaluate(
    pos: &mut Position,
    max_depth: i32,
    cache: &mut Cache,
    alpha: i32,
    beta: i32,
) -> i32 {
    let hash = pos.hash();
    if let Some(entry) = cache.probe(hash) {
        if entry.depth() >= max_depth {
            return entry.score();
        }
    }

    let moves = pos.legal_moves();
    let side = pos.to_move().sign();
    if moves.is_empty() {
        let king = pos.king_square(pos.to_move());
        if pos.is_attacked(king, pos.to_move().opponent()) {
            cache.store(hash, EXACT_DEPTH, -side * MATE);
            return -side * MATE;
        }
        cache.store(hash, EXACT_DEPTH, 0);
        return 0;
    }
    if pos.piece_count() <= 2 {
        // only the kings remain
        cache.store(hash, EXACT_DEPTH, 0);
        return 0;
    }
    if max_depth <= 0 {
        let score = pos.material();
        cache.store(hash, max_depth, score);
        return score;
    }

    // Order by the scores earlier iterations left in the cache; unknown
    // children sort as 0.
    let mut ordered: Vec<(i32, Move)> = moves
        .iter()
        .map(|m| {
            pos.make_move(m);
            let guess = cache.score_guess(pos.hash());
            pos.undo_move();
            (guess, m)
        })
        .collect();
    ordered.sort_by(|a, b| b.0.cmp(&a.0));

    let mut alpha = alpha;
    let mut best = -MATE;
    for (_, m) in ordered {
        pos.make_move(m);
        let child = evaluate(pos, max_depth - 1, cache, -beta, -alpha) * side;
        if child > best {
            best = child;
            if best > alpha {
                alpha = best;
            }
        }
        pos.undo_move();
        if worsen(best) >= beta {
            // cutoff: the value is only a bound, leave the cache alone
            return worsen(best) * side;
        }
    }

    let score = worsen(best) * side;
    let depth = if best.abs() > MATE_THRESHOLD {
        // a proven mate distance is exact no matter the search depth
        EXACT_DEPTH
    } else {
        max_depth
    };
    cache.store(hash, depth, score);
    score
}

/// Evaluate iteratively, deepening one ply at a time up to `max_depth`.
///
/// Each iteration seeds the cache, so the next one searches best-first;
/// usually faster than jumping straight to the target depth.
pub fn iter_evaluate(pos: &mut Position, max_depth: i32, cache: &mut Cache) -> i32 {
    for depth in 1..=max_depth {
        evaluate(pos, depth, cache, -MATE, MATE);
    }
    evaluate(pos, max_depth, cache, -MATE, MATE)
}

/// Search for the fastest forced mate within `max_moves` full moves.
///
/// Returns e.g. "White mates in 3", or "Unknown result" when no mate is
/// found within the horizon.
pub fn find_fastest_mate(pos: &mut Position, max_moves: i32, cache: &mut Cache) -> String {
    for depth in 0..max_moves {
        let eval = evaluate(pos, 2 * depth, cache, -MATE, MATE);
        if eval.abs() > MATE_THRESHOLD {
            let winner = if eval > 0 { "White" } else { "Black" };
            // the +1 rounds a winning (odd) ply count up to full moves
            return format!("{winner} mates in {}", (MATE - eval.abs() + 1) / 2);
        }
    }
    "Unknown result".to_string()
}
