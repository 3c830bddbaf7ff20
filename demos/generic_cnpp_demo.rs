//! Demonstrates the generic CNPP model directly, independent of the Sudoku
//! adapter: a 4x4 mini puzzle over the alphabet `{A, B, C, D}` with row,
//! column, and 2x2-box groups — the same shape as Sudoku at one quarter the
//! size, built entirely from [`cnpp::model`] without [`cnpp::sudoku`].

use std::collections::HashMap;

use cnpp::model::{Cell, CnppModel, Group, HashCandidates, Puzzle};
use cnpp::{solve, PuzzleState};

#[derive(Clone, Debug)]
struct MiniLatinSquare;

impl CnppModel for MiniLatinSquare {
    type Symbol = char;
    type Location = (u8, u8);
    type Candidates = HashCandidates<char>;
}

const ALPHABET: [char; 4] = ['A', 'B', 'C', 'D'];

fn build_puzzle(givens: &[((u8, u8), char)]) -> Puzzle<MiniLatinSquare> {
    let given_map: HashMap<(u8, u8), char> = givens.iter().cloned().collect();

    let mut cells = HashMap::new();
    for row in 0..4u8 {
        for col in 0..4u8 {
            let loc = (row, col);
            let cell = match given_map.get(&loc) {
                Some(&v) => Cell::solved(v),
                None => Cell::with_candidates(HashCandidates::from_values(ALPHABET)),
            };
            cells.insert(loc, cell);
        }
    }

    let mut groups = Vec::with_capacity(12);
    for row in 0..4u8 {
        groups.push(Group::new((0..4u8).map(|col| (row, col)).collect()));
    }
    for col in 0..4u8 {
        groups.push(Group::new((0..4u8).map(|row| (row, col)).collect()));
    }
    for box_row in 0..2u8 {
        for box_col in 0..2u8 {
            let locs = (0..2u8)
                .flat_map(|r| (0..2u8).map(move |c| (box_row * 2 + r, box_col * 2 + c)))
                .collect();
            groups.push(Group::new(locs));
        }
    }

    Puzzle::new(groups, cells).expect("every group references a cell in the puzzle")
}

fn render(puzzle: &mut Puzzle<MiniLatinSquare>) -> String {
    let mut out = String::new();
    for row in 0..4u8 {
        for col in 0..4u8 {
            match puzzle.cell_mut(&(row, col)).value() {
                Some(v) => out.push(v),
                None => out.push('?'),
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

pub fn main() {
    tracing_subscriber::fmt::init();

    let puzzle = build_puzzle(&[
        ((0, 0), 'A'),
        ((0, 2), 'C'),
        ((1, 3), 'B'),
        ((2, 0), 'B'),
        ((3, 1), 'C'),
    ]);

    println!("Solving a 4x4 mini Latin-square puzzle...");
    let (mut solved, state) = solve(&puzzle);
    match state {
        PuzzleState::Solved => println!("Solved!\n{}", render(&mut solved)),
        PuzzleState::Conflict => println!("No completion exists."),
        PuzzleState::Unsolved => println!("Solver exhausted strategies and backtracking."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mini_puzzle_solves() {
        let puzzle = build_puzzle(&[
            ((0, 0), 'A'),
            ((0, 2), 'C'),
            ((1, 3), 'B'),
            ((2, 0), 'B'),
            ((3, 1), 'C'),
        ]);
        let (_, state) = solve(&puzzle);
        assert_eq!(state, PuzzleState::Solved);
    }
}
