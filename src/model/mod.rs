//! The generic combinatorial number-placement puzzle model: cells, groups,
//! and the puzzle they compose into, independent of any specific puzzle
//! variant (see [`crate::sudoku`] for the Sudoku adapter).

pub mod candidates;
pub mod cell;
pub mod group;
pub mod puzzle;
pub mod symbol;

pub use candidates::{Bitmask, CandidateSet, HashCandidates};
pub use cell::Cell;
pub use group::Group;
pub use puzzle::{CnppModel, GroupId, Puzzle, PuzzleState};
pub use symbol::{Location, Symbol};
