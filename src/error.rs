use std::backtrace::Backtrace;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors detected while constructing a puzzle: wrong grid shape, a candidate
/// outside the alphabet, or similar caller-facing input problems.
#[derive(Debug, thiserror::Error)]
pub enum StructuralError {
    #[error("expected a 9x9 grid, got {rows} rows")]
    WrongRowCount { rows: usize },
    #[error("expected row {row} to have 9 columns, got {cols}")]
    WrongColumnCount { row: usize, cols: usize },
    #[error("expected an 81-element sequence, got {len}")]
    WrongSequenceLength { len: usize },
    #[error("expected a digit in 1..=9, found {found:?}")]
    InvalidSymbol { found: String },
}

/// Violations of the model's internal invariants. These indicate a bug in the
/// caller (or in this crate), not a malformed puzzle.
#[derive(Debug, thiserror::Error)]
pub enum InvariantError {
    #[error("a group must not reference the same cell twice")]
    DuplicateCellInGroup,
    #[error("a group referenced a cell that is not part of the puzzle")]
    CellNotInPuzzle,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{inner}\n{backtrace}")]
    Structural {
        inner: Box<StructuralError>,
        backtrace: Box<Backtrace>,
    },
    #[error("{inner}\n{backtrace}")]
    Invariant {
        inner: Box<InvariantError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<StructuralError> for Error {
    fn from(inner: StructuralError) -> Self {
        Error::Structural {
            inner: Box::new(inner),
            backtrace: Box::new(Backtrace::capture()),
        }
    }
}

impl From<InvariantError> for Error {
    fn from(inner: InvariantError) -> Self {
        Error::Invariant {
            inner: Box::new(inner),
            backtrace: Box::new(Backtrace::capture()),
        }
    }
}
