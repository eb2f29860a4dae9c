//! Interactive puzzle console.
//!
//! Asks for a seed and a target mate length, then generates puzzles one
//! after another and checks the user's solution moves. Moves are entered in
//! long algebraic notation (e.g. `Ra1-d1`, `Re7xe8`, `e2-e4`, `d7xe8=Q`).

use std::io::{self, BufRead, Lines, StdinLock, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use puzzlegen::board::{Move, Position};
use puzzlegen::cache::Cache;
use puzzlegen::puzzle::{generate_puzzle, is_solution, play_random_best, StdoutProgress};
use puzzlegen::search::{evaluate, find_fastest_mate, MATE, MAX_DEPTH};

const STARTUP_MSG: &str = "\
Welcome to the chess puzzle generator! An interactive chess puzzle tool.
Instead of trying to solve the puzzle from the console view, feel free to
copy-paste the puzzle FEN into any application that can show you the board
better. While solving, please enter the moves in standard long algebraic
notation (e.g. Ra1-d1, Re7xe8, e2-e4, d7xe8=Q).";

/// How many times the user can be wrong per puzzle before the solution move
/// is shown.
const CORRECTIONS: u32 = 3;

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{STARTUP_MSG}");
    println!();

    let Some(seed) = prompt(&mut lines, "Enter seed: ") else {
        return;
    };
    println!("Seed is: {seed}");

    let Some(max_moves) = read_max_moves(&mut lines) else {
        return;
    };

    let mut cache = Cache::new();
    let mut rng = StdRng::from_entropy();
    let mut progress = StdoutProgress;

    for puzzle_number in 0.. {
        let puzzle_seed = format!("{seed}_{puzzle_number}");
        let mut puzzle =
            generate_puzzle(&mut cache, max_moves, &puzzle_seed, &mut rng, &mut progress);

        println!();
        println!("puzzle No. {puzzle_number}  with seed: {puzzle_seed}");
        println!("FEN: {}", puzzle.to_fen());

        let mut corrections_left = CORRECTIONS;

        while evaluate(&mut puzzle, MAX_DEPTH, &mut cache, -MATE, MATE).abs() != MATE {
            println!("{puzzle}");
            println!("{}", find_fastest_mate(&mut puzzle, MAX_DEPTH, &mut cache));

            let Some(selected) = read_move(&mut lines, &mut puzzle) else {
                return;
            };

            if is_solution(&mut puzzle, selected, &mut cache) {
                println!("Correct!");
                puzzle.make_move(selected);
                reply(&mut puzzle, &mut cache, &mut rng, "Opponent played");
            } else if corrections_left > 0 {
                corrections_left -= 1;
                println!("Wrong! Try again. {corrections_left} corrections left");
            } else {
                // out of corrections: show the solution move instead
                reply(&mut puzzle, &mut cache, &mut rng, "The solution was");
                reply(&mut puzzle, &mut cache, &mut rng, "Opponent played");
            }
        }
    }
}

/// Play the engine's move and announce it, unless the puzzle is already over.
fn reply(puzzle: &mut Position, cache: &mut Cache, rng: &mut StdRng, label: &str) {
    if evaluate(puzzle, MAX_DEPTH, cache, -MATE, MATE).abs() == MATE {
        return;
    }
    play_random_best(puzzle, MAX_DEPTH, cache, rng);
    let played = puzzle.last_move().expect("engine reply was played");
    println!("{label}: {}", played.long_string());
}

/// Print `prompt` and read one line; `None` on end of input.
fn prompt(lines: &mut Lines<StdinLock<'_>>, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let line = lines.next()?.ok()?;
    Some(line.trim().to_string())
}

/// Ask for the puzzle length until the user enters a positive integer.
fn read_max_moves(lines: &mut Lines<StdinLock<'_>>) -> Option<i32> {
    loop {
        let input = prompt(lines, "Enter max moves for puzzles: ")?;
        match input.parse::<i32>() {
            Ok(n) if n > 0 => return Some(n),
            _ => println!("Enter a positive integer"),
        }
    }
}

/// Ask for a move until the input matches a legal move's long notation.
fn read_move(lines: &mut Lines<StdinLock<'_>>, puzzle: &mut Position) -> Option<Move> {
    loop {
        let input = prompt(lines, "Enter next move of Your solution: ")?;
        if let Ok(m) = puzzle.find_move(&input) {
            return Some(m);
        }
        println!("Invalid input, possible moves are:");
        let all: Vec<String> = puzzle
            .legal_moves()
            .iter()
            .map(|m| m.long_string())
            .collect();
        println!("{}", all.join(" "));
    }
}
