//! A generic solver for combinatorial number-placement puzzles (CNPPs) —
//! the family of puzzles, of which 9x9 Sudoku is one instance, defined by a
//! set of cells each holding one symbol from a finite alphabet, and a set of
//! groups that must each contain every symbol exactly once.
//!
//! The crate is a hybrid solver: five deterministic, human-style
//! constraint-propagation strategies ([`strategies`]) run to a fixpoint
//! under a priority-queue [`work_list::GroupScheduler`] that re-focuses work
//! on whichever groups a change touches, and a recursive backtracking
//! fallback ([`driver`]) takes over when propagation stalls. [`model`] is
//! the generic cell/group/puzzle data model everything else is built on;
//! [`sudoku`] is the thin 9x9 adapter.
//!
//! # Example
//!
//! ```
//! use cnpp::sudoku;
//!
//! let puzzle = sudoku::from_digits(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )
//! .unwrap();
//!
//! let (mut solved, state) = cnpp::solve(&puzzle);
//! assert_eq!(state, cnpp::PuzzleState::Solved);
//! assert_eq!(sudoku::render(&mut solved).lines().next().unwrap(), "5 3 4 6 7 8 9 1 2");
//! ```

pub mod driver;
pub mod error;
pub mod heuristics;
pub mod model;
pub mod stats;
pub mod strategies;
pub mod sudoku;
pub mod work_list;

pub use driver::{solve, solve_with_stats, Solver};
pub use model::{CandidateSet, Cell, CnppModel, Group, GroupId, Puzzle, PuzzleState};
pub use stats::{render_stats_table, SearchStats};
