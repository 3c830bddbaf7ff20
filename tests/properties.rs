//! Property-based tests for the universal solver properties: soundness,
//! non-mutation, and monotonicity of candidate sets.
//!
//! Valid Sudoku grids are generated in-process rather than pulled from a
//! fixture: a base Latin-square solution (`(3*r + r/3 + c) % 9`) is put
//! through the standard Sudoku symmetries — digit relabeling, and
//! permuting rows within a band / columns within a stack — all of which
//! preserve row/column/box validity. Each grid is then masked down to a
//! partial puzzle by blanking a proptest-controlled number of cells.

use cnpp::{solve, sudoku, PuzzleState};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn band_shuffled_order(rng: &mut StdRng) -> [u8; 9] {
    let mut order = [0u8; 9];
    for band in 0..3usize {
        let mut within: Vec<u8> = (0..3).map(|i| (band * 3 + i) as u8).collect();
        within.shuffle(rng);
        for i in 0..3 {
            order[band * 3 + i] = within[i];
        }
    }
    order
}

fn valid_solved_grid(seed: u64) -> [[u8; 9]; 9] {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut digit_perm: Vec<u8> = (1..=9).collect();
    digit_perm.shuffle(&mut rng);

    let row_order = band_shuffled_order(&mut rng);
    let col_order = band_shuffled_order(&mut rng);

    let mut grid = [[0u8; 9]; 9];
    for (r, row) in grid.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            let rr = row_order[r] as usize;
            let cc = col_order[c] as usize;
            let base = (rr * 3 + rr / 3 + cc) % 9;
            *cell = digit_perm[base];
        }
    }
    grid
}

fn mask_grid(mut grid: [[u8; 9]; 9], seed: u64, blanks: usize) -> [[u8; 9]; 9] {
    let mut rng = StdRng::seed_from_u64(seed ^ 0xA5A5_A5A5_A5A5_A5A5);
    let mut positions: Vec<(usize, usize)> = (0..9).flat_map(|r| (0..9).map(move |c| (r, c))).collect();
    positions.shuffle(&mut rng);
    for &(r, c) in positions.iter().take(blanks.min(81)) {
        grid[r][c] = 0;
    }
    grid
}

fn assert_valid_completion(puzzle: &mut cnpp::Puzzle<sudoku::Sudoku>) {
    for row in 0..9u8 {
        let mut seen = [false; 10];
        for col in 0..9u8 {
            let v = puzzle.cell_mut(&(row, col)).value().expect("solved puzzle has no unsolved cells");
            assert!(!seen[v as usize]);
            seen[v as usize] = true;
        }
    }
    for col in 0..9u8 {
        let mut seen = [false; 10];
        for row in 0..9u8 {
            let v = puzzle.cell_mut(&(row, col)).value().unwrap();
            assert!(!seen[v as usize]);
            seen[v as usize] = true;
        }
    }
    for box_row in 0..3u8 {
        for box_col in 0..3u8 {
            let mut seen = [false; 10];
            for r in 0..3u8 {
                for c in 0..3u8 {
                    let v = puzzle.cell_mut(&(box_row * 3 + r, box_col * 3 + c)).value().unwrap();
                    assert!(!seen[v as usize]);
                    seen[v as usize] = true;
                }
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Soundness: any puzzle derived from a valid full grid solves to a
    /// valid completion that preserves every originally-given clue.
    #[test]
    fn solve_is_sound(seed in any::<u64>(), blanks in 0usize..30) {
        let solved_grid = valid_solved_grid(seed);
        let masked = mask_grid(solved_grid, seed, blanks);
        let grid: Vec<Vec<i64>> = masked.iter().map(|r| r.iter().map(|&v| v as i64).collect()).collect();
        let puzzle = sudoku::from_grid(&grid).unwrap();

        let (mut solved, state) = solve(&puzzle);
        prop_assert_eq!(state, PuzzleState::Solved);
        assert_valid_completion(&mut solved);

        for r in 0..9u8 {
            for c in 0..9u8 {
                let clue = masked[r as usize][c as usize];
                if clue != 0 {
                    prop_assert_eq!(solved.cell_mut(&(r, c)).value(), Some(clue));
                }
            }
        }
    }

    /// Non-mutation: `solve` never changes the puzzle passed to it.
    #[test]
    fn solve_does_not_mutate_input(seed in any::<u64>(), blanks in 0usize..30) {
        let solved_grid = valid_solved_grid(seed);
        let masked = mask_grid(solved_grid, seed, blanks);
        let grid: Vec<Vec<i64>> = masked.iter().map(|r| r.iter().map(|&v| v as i64).collect()).collect();
        let puzzle = sudoku::from_grid(&grid).unwrap();
        let mut before = puzzle.clone();
        let before_values: Vec<Option<u8>> = (0..9u8)
            .flat_map(|r| (0..9u8).map(move |c| (r, c)))
            .map(|loc| before.cell_mut(&loc).value())
            .collect();

        let _ = solve(&puzzle);

        let mut puzzle = puzzle;
        let after_values: Vec<Option<u8>> = (0..9u8)
            .flat_map(|r| (0..9u8).map(move |c| (r, c)))
            .map(|loc| puzzle.cell_mut(&loc).value())
            .collect();
        prop_assert_eq!(before_values, after_values);
    }

    /// A puzzle built from an already-fully-solved valid grid round-trips
    /// unchanged through `solve`.
    #[test]
    fn already_solved_grid_round_trips(seed in any::<u64>()) {
        let solved_grid = valid_solved_grid(seed);
        let grid: Vec<Vec<i64>> = solved_grid.iter().map(|r| r.iter().map(|&v| v as i64).collect()).collect();
        let puzzle = sudoku::from_grid(&grid).unwrap();

        let (mut solved, state) = solve(&puzzle);
        prop_assert_eq!(state, PuzzleState::Solved);
        for r in 0..9u8 {
            for c in 0..9u8 {
                prop_assert_eq!(solved.cell_mut(&(r, c)).value(), Some(solved_grid[r as usize][c as usize]));
            }
        }
    }
}
