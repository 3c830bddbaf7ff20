//! The `Cell` type: a single position to be filled, holding either a
//! committed value or a non-empty set of remaining candidates.

use crate::model::candidates::CandidateSet;
use crate::model::puzzle::CnppModel;

pub enum Cell<M: CnppModel> {
    Solved(M::Symbol),
    Unsolved(M::Candidates),
}

impl<M: CnppModel> Clone for Cell<M> {
    fn clone(&self) -> Self {
        match self {
            Cell::Solved(s) => Cell::Solved(s.clone()),
            Cell::Unsolved(c) => Cell::Unsolved(c.clone()),
        }
    }
}

impl<M: CnppModel> std::fmt::Debug for Cell<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Solved(s) => f.debug_tuple("Solved").field(s).finish(),
            Cell::Unsolved(c) => f.debug_tuple("Unsolved").field(c).finish(),
        }
    }
}

impl<M: CnppModel> Cell<M> {
    pub fn solved(value: M::Symbol) -> Self {
        Cell::Solved(value)
    }

    pub fn with_candidates(candidates: M::Candidates) -> Self {
        Cell::Unsolved(candidates)
    }

    /// Returns the committed symbol, promoting a singleton candidate set to a
    /// commitment on read (lazy commit). This is the only place a cell's
    /// state can change as a side effect of a read.
    pub fn value(&mut self) -> Option<M::Symbol> {
        match self {
            Cell::Solved(s) => Some(s.clone()),
            Cell::Unsolved(c) => {
                if let Some(v) = c.singleton_value() {
                    *self = Cell::Solved(v.clone());
                    Some(v)
                } else {
                    None
                }
            }
        }
    }

    /// The committed value, without triggering the lazy-commit promotion.
    /// Used by read-only callers (rendering) that only care about cells
    /// already formally solved.
    pub fn committed(&self) -> Option<&M::Symbol> {
        match self {
            Cell::Solved(s) => Some(s),
            Cell::Unsolved(_) => None,
        }
    }

    pub fn candidates(&self) -> Vec<M::Symbol> {
        match self {
            Cell::Solved(_) => Vec::new(),
            Cell::Unsolved(c) => c.values(),
        }
    }

    /// Commits `value` to this cell. Committing the same value twice is a
    /// no-op; committing a different value than one already solved is a
    /// programmer error.
    pub fn set_value(&mut self, value: M::Symbol) {
        match self {
            Cell::Solved(existing) => {
                assert!(
                    *existing == value,
                    "Cell::set_value: overwrite of a committed value with a different one"
                );
            }
            Cell::Unsolved(_) => {
                *self = Cell::Solved(value);
            }
        }
    }

    pub fn remove_candidate(&mut self, value: &M::Symbol) -> bool {
        match self {
            Cell::Solved(_) => false,
            Cell::Unsolved(c) => c.remove(value),
        }
    }

    pub fn remove_candidates(&mut self, values: &[M::Symbol]) -> bool {
        let mut changed = false;
        for v in values {
            if self.remove_candidate(v) {
                changed = true;
            }
        }
        changed
    }

    /// Removes every candidate not present in `allowed`. Used by the hidden
    /// conjugate strategy to collapse a cell onto the symbols that must live
    /// there.
    pub fn retain_candidates(&mut self, allowed: &M::Candidates) -> bool {
        match self {
            Cell::Solved(_) => false,
            Cell::Unsolved(c) => {
                let to_remove: Vec<M::Symbol> =
                    c.values().into_iter().filter(|v| !allowed.contains(v)).collect();
                let mut changed = false;
                for v in to_remove {
                    if c.remove(&v) {
                        changed = true;
                    }
                }
                changed
            }
        }
    }

    pub fn is_conflicted(&self) -> bool {
        matches!(self, Cell::Unsolved(c) if c.is_empty())
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Cell::Solved(_))
    }
}
