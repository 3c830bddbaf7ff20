//! The `Group` type: a fixed set of cells that must collectively contain
//! every alphabet symbol exactly once.

use std::collections::HashMap;

use crate::model::puzzle::{CnppModel, Puzzle};

#[derive(Clone, Debug)]
pub struct Group<M: CnppModel> {
    locations: Vec<M::Location>,
}

impl<M: CnppModel> Group<M> {
    pub fn new(locations: Vec<M::Location>) -> Self {
        assert!(locations.len() >= 2, "a group must contain at least two cells");
        Self { locations }
    }

    pub fn locations(&self) -> &[M::Location] {
        &self.locations
    }

    pub fn unsolved_locations(&self, puzzle: &mut Puzzle<M>) -> Vec<M::Location> {
        self.locations
            .iter()
            .filter(|loc| puzzle.cell_mut(loc).value().is_none())
            .cloned()
            .collect()
    }

    pub fn solved_values(&self, puzzle: &mut Puzzle<M>) -> Vec<M::Symbol> {
        self.locations
            .iter()
            .filter_map(|loc| puzzle.cell_mut(loc).value())
            .collect()
    }

    /// For every symbol any unsolved cell in the group still lists, the
    /// cells that list it. Built on demand, never cached, since candidate
    /// sets change underneath it constantly during propagation.
    pub fn candidate_map(&self, puzzle: &mut Puzzle<M>) -> HashMap<M::Symbol, Vec<M::Location>> {
        let mut map: HashMap<M::Symbol, Vec<M::Location>> = HashMap::new();
        for loc in &self.locations {
            let cell = puzzle.cell_mut(loc);
            if cell.value().is_some() {
                continue;
            }
            for sym in cell.candidates() {
                map.entry(sym).or_default().push(loc.clone());
            }
        }
        map
    }
}
