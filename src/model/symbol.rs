//! Capability traits for the types a puzzle is generic over.

use std::fmt::Debug;
use std::hash::Hash;

/// A member of a puzzle's alphabet. Blanket-implemented for any type that
/// already has the traits candidate sets need.
pub trait Symbol: Clone + Eq + Hash + Debug + 'static {}
impl<T> Symbol for T where T: Clone + Eq + Hash + Debug + 'static {}

/// An opaque identity for a cell within a puzzle. For the Sudoku adapter this
/// is `(row, col)`.
pub trait Location: Clone + Eq + Hash + Debug + 'static {}
impl<T> Location for T where T: Clone + Eq + Hash + Debug + 'static {}
