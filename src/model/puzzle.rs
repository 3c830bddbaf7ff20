//! The `Puzzle` type: owns the cell arena and the group/location indices, and
//! computes overall puzzle state.

use std::collections::HashMap as StdHashMap;
use std::sync::Arc;

use im::HashMap as ImHashMap;

use crate::error::{Error, InvariantError};
use crate::model::candidates::CandidateSet;
use crate::model::cell::Cell;
use crate::model::group::Group;
use crate::model::symbol::{Location, Symbol};

/// Bundles the three types a puzzle is generic over behind one trait.
/// `Sudoku` (see [`crate::sudoku`]) is one implementation; nothing else in
/// this crate is Sudoku-specific.
pub trait CnppModel: Clone + std::fmt::Debug + 'static {
    type Symbol: Symbol;
    type Location: Location;
    type Candidates: CandidateSet<Self::Symbol>;
}

pub type GroupId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleState {
    Solved,
    Unsolved,
    Conflict,
}

#[derive(Clone)]
pub struct Puzzle<M: CnppModel> {
    cells: ImHashMap<M::Location, Cell<M>>,
    groups: Arc<Vec<Group<M>>>,
    groups_of: Arc<StdHashMap<M::Location, Vec<GroupId>>>,
    location_order: Arc<Vec<M::Location>>,
}

impl<M: CnppModel> Puzzle<M> {
    /// Builds a puzzle from its groups and an initial cell for every
    /// location any group references. Groups never change after
    /// construction; only the cell arena is mutated during solving.
    pub fn new(groups: Vec<Group<M>>, initial: StdHashMap<M::Location, Cell<M>>) -> Result<Self, Error> {
        let mut groups_of: StdHashMap<M::Location, Vec<GroupId>> = StdHashMap::new();
        let mut location_order = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for (gid, group) in groups.iter().enumerate() {
            let mut within_group = std::collections::HashSet::new();
            for loc in group.locations() {
                if !within_group.insert(loc.clone()) {
                    return Err(InvariantError::DuplicateCellInGroup.into());
                }
                if !initial.contains_key(loc) {
                    return Err(InvariantError::CellNotInPuzzle.into());
                }
                groups_of.entry(loc.clone()).or_default().push(gid);
                if seen.insert(loc.clone()) {
                    location_order.push(loc.clone());
                }
            }
        }

        let cells: ImHashMap<M::Location, Cell<M>> = initial.into_iter().collect();

        Ok(Self {
            cells,
            groups: Arc::new(groups),
            groups_of: Arc::new(groups_of),
            location_order: Arc::new(location_order),
        })
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn group(&self, id: GroupId) -> &Group<M> {
        &self.groups[id]
    }

    pub fn groups_of(&self, loc: &M::Location) -> &[GroupId] {
        self.groups_of.get(loc).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Every location in the puzzle, in a stable order established at
    /// construction time. Used by deterministic heuristics to break ties.
    pub fn locations(&self) -> &[M::Location] {
        &self.location_order
    }

    pub fn cell(&self, loc: &M::Location) -> &Cell<M> {
        self.cells.get(loc).expect("location is not part of this puzzle")
    }

    pub fn cell_mut(&mut self, loc: &M::Location) -> &mut Cell<M> {
        self.cells.get_mut(loc).expect("location is not part of this puzzle")
    }

    /// Produces an independent puzzle, safe to mutate without affecting
    /// `self`. Cells are backed by a persistent map (`im::HashMap`), so this
    /// clone shares structure with the original until either copy is
    /// mutated; groups and indices never change, so they're shared via `Arc`
    /// rather than copied. This is what makes "deep clone before every
    /// speculative guess" (see the driver) cheap enough to call at every
    /// level of backtracking.
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// Recomputes puzzle state. May promote singleton-candidate cells to
    /// solved as a side effect (the lazy commit described on [`Cell::value`]).
    pub fn state(&mut self) -> PuzzleState {
        if self.cells.values().any(Cell::is_conflicted) {
            return PuzzleState::Conflict;
        }

        let mut any_unsolved = false;
        for gid in 0..self.groups.len() {
            let locations = self.groups[gid].locations().to_vec();
            let mut seen_values: std::collections::HashSet<M::Symbol> = std::collections::HashSet::new();
            for loc in &locations {
                match self.cell_mut(loc).value() {
                    None => any_unsolved = true,
                    Some(v) => {
                        if !seen_values.insert(v) {
                            return PuzzleState::Conflict;
                        }
                    }
                }
            }
        }

        if any_unsolved {
            PuzzleState::Unsolved
        } else {
            PuzzleState::Solved
        }
    }
}
