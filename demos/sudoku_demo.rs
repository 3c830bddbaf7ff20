use cnpp::stats::render_stats_table;
use cnpp::{solve_with_stats, sudoku, PuzzleState};

const CLASSIC_PUZZLE: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

pub fn main() {
    tracing_subscriber::fmt::init();

    println!("Solving the classic Sudoku.com example puzzle...");
    let puzzle = sudoku::from_digits(CLASSIC_PUZZLE).expect("well-formed 81-digit puzzle");

    let (mut solved, state, stats) = solve_with_stats(&puzzle);

    match state {
        PuzzleState::Solved => {
            println!("Solved!\n{}", sudoku::render(&mut solved));
        }
        PuzzleState::Conflict => println!("No completion exists for this puzzle."),
        PuzzleState::Unsolved => println!("Propagation and backtracking both exhausted without a result."),
    }

    println!("{}", render_stats_table(&stats));
}
