//! The five deterministic, human-style constraint-propagation strategies
//! (S1–S5). Each is scoped to a single group per invocation; the driver's
//! group scheduler re-invokes strategies on whatever groups a change touches,
//! which is what realizes the "propagate to a global fixpoint" behavior
//! without any strategy itself walking the whole puzzle.
//!
//! S1 and S2 are the two classic "obvious" human solving moves: erase a
//! placed value from its peers' pencil marks, then commit a symbol to
//! whichever cell is the only one left that can still hold it. S3–S5 dig
//! further into the candidate structure when those two alone stall.

use std::collections::HashSet;

use crate::model::{CandidateSet, CnppModel, GroupId, Puzzle};

pub trait Strategy<M: CnppModel> {
    fn name(&self) -> &'static str;

    /// Applies this strategy to `group`, mutating `puzzle` in place, and
    /// returns the set of cell locations it changed.
    fn apply(&self, puzzle: &mut Puzzle<M>, group: GroupId) -> HashSet<M::Location>;
}

/// S1: erase pencil markings (cross-hatch). Removes every solved cell's
/// value from the candidate sets of the group's other, unsolved cells.
pub struct ErasePencilMarkings;

impl<M: CnppModel> Strategy<M> for ErasePencilMarkings {
    fn name(&self) -> &'static str {
        "erase_pencil_markings"
    }

    fn apply(&self, puzzle: &mut Puzzle<M>, group: GroupId) -> HashSet<M::Location> {
        let locations = puzzle.group(group).locations().to_vec();

        let mut solved_values = Vec::new();
        for loc in &locations {
            if let Some(v) = puzzle.cell_mut(loc).value() {
                solved_values.push(v);
            }
        }

        let mut changed = HashSet::new();
        for loc in &locations {
            let cell = puzzle.cell_mut(loc);
            if cell.value().is_some() {
                continue;
            }
            if cell.remove_candidates(&solved_values) {
                changed.insert(loc.clone());
            }
        }
        changed
    }
}

/// S2: last remaining cell (hidden single). Within a group's candidate map,
/// a symbol already solved elsewhere gets stripped from every cell that
/// still lists it; a symbol listed by exactly one unsolved cell gets
/// committed there.
pub struct LastRemainingCell;

impl<M: CnppModel> Strategy<M> for LastRemainingCell {
    fn name(&self) -> &'static str {
        "last_remaining_cell"
    }

    fn apply(&self, puzzle: &mut Puzzle<M>, group: GroupId) -> HashSet<M::Location> {
        let g = puzzle.group(group).clone();
        let solved_values: HashSet<M::Symbol> = g.solved_values(puzzle).into_iter().collect();
        let candidate_map = g.candidate_map(puzzle);

        let mut changed = HashSet::new();
        for (symbol, cells) in candidate_map {
            if solved_values.contains(&symbol) {
                for loc in &cells {
                    if puzzle.cell_mut(loc).remove_candidate(&symbol) {
                        changed.insert(loc.clone());
                    }
                }
            } else if cells.len() == 1 {
                let loc = cells[0].clone();
                if let Some(existing) = puzzle.cell_mut(&loc).value() {
                    if existing != symbol {
                        // `loc` was already committed to a different symbol by an
                        // earlier entry in this same candidate map: two symbols
                        // both needed this one cell, so the group has no valid
                        // completion. Force a conflict instead of panicking on a
                        // second, contradictory commit.
                        if let Some(other) = g.unsolved_locations(puzzle).into_iter().next() {
                            let remaining = puzzle.cell(&other).candidates();
                            if puzzle.cell_mut(&other).remove_candidates(&remaining) {
                                changed.insert(other);
                            }
                        }
                    }
                } else {
                    puzzle.cell_mut(&loc).set_value(symbol);
                    changed.insert(loc);
                }
            }
        }
        changed
    }
}

/// S3: naked conjugates. For increasing `k` (pairs, triples, ...) up to
/// `floor(|group| / 2)`, finds a `k`-subset of unsolved cells whose combined
/// candidates number exactly `k`; those symbols must live in those cells, so
/// they're stripped from every other unsolved cell in the group. Returns as
/// soon as any subset produces a change, since the candidate map it was
/// computed from is now stale.
pub struct NakedConjugates;

impl<M: CnppModel> Strategy<M> for NakedConjugates {
    fn name(&self) -> &'static str {
        "naked_conjugates"
    }

    fn apply(&self, puzzle: &mut Puzzle<M>, group: GroupId) -> HashSet<M::Location> {
        let g = puzzle.group(group).clone();
        let max_k = g.locations().len() / 2;

        for k in 2..=max_k {
            let unsolved = g.unsolved_locations(puzzle);
            let candidate_cells: Vec<M::Location> = unsolved
                .iter()
                .filter(|loc| puzzle.cell(loc).candidates().len() <= k)
                .cloned()
                .collect();
            if candidate_cells.len() < k {
                continue;
            }

            for subset in combinations(&candidate_cells, k) {
                let mut union: HashSet<M::Symbol> = HashSet::new();
                for loc in &subset {
                    union.extend(puzzle.cell(loc).candidates());
                }
                if union.len() != k {
                    continue;
                }

                let to_remove: Vec<M::Symbol> = union.into_iter().collect();
                let mut changed = HashSet::new();
                for loc in &unsolved {
                    if subset.contains(loc) {
                        continue;
                    }
                    if puzzle.cell_mut(loc).remove_candidates(&to_remove) {
                        changed.insert(loc.clone());
                    }
                }
                if !changed.is_empty() {
                    return changed;
                }
            }
        }
        HashSet::new()
    }
}

/// S4: hidden conjugates. The symbol-side mirror of S3: for increasing `k`,
/// finds a `k`-subset of symbols confined to exactly `k` cells in the group;
/// those cells' candidates collapse onto that symbol subset.
pub struct HiddenConjugates;

impl<M: CnppModel> Strategy<M> for HiddenConjugates {
    fn name(&self) -> &'static str {
        "hidden_conjugates"
    }

    fn apply(&self, puzzle: &mut Puzzle<M>, group: GroupId) -> HashSet<M::Location> {
        let g = puzzle.group(group).clone();
        let max_k = g.locations().len() / 2;

        for k in 2..=max_k {
            let candidate_map = g.candidate_map(puzzle);
            let candidate_symbols: Vec<M::Symbol> = candidate_map
                .iter()
                .filter(|(_, cells)| cells.len() <= k)
                .map(|(s, _)| s.clone())
                .collect();
            if candidate_symbols.len() < k {
                continue;
            }

            for subset in combinations(&candidate_symbols, k) {
                let mut cell_union: HashSet<M::Location> = HashSet::new();
                for sym in &subset {
                    if let Some(cells) = candidate_map.get(sym) {
                        cell_union.extend(cells.iter().cloned());
                    }
                }
                if cell_union.len() != k {
                    continue;
                }

                let allowed = M::Candidates::from_values(subset.iter().cloned());
                let mut changed = HashSet::new();
                for loc in &cell_union {
                    if puzzle.cell_mut(loc).retain_candidates(&allowed) {
                        changed.insert(loc.clone());
                    }
                }
                if !changed.is_empty() {
                    return changed;
                }
            }
        }
        HashSet::new()
    }
}

/// S5: intersections (pointing/claiming locked candidates). If a symbol's
/// remaining cells within this group all fall inside one other group that
/// intersects it, the symbol can't live anywhere else in that other group
/// either, so it's stripped from the rest of it.
pub struct Intersections;

impl<M: CnppModel> Strategy<M> for Intersections {
    fn name(&self) -> &'static str {
        "intersections"
    }

    fn apply(&self, puzzle: &mut Puzzle<M>, group: GroupId) -> HashSet<M::Location> {
        let g = puzzle.group(group).clone();
        let candidate_map = g.candidate_map(puzzle);

        let g_locs: HashSet<M::Location> = g.locations().iter().cloned().collect();
        let intersecting_groups: Vec<GroupId> = (0..puzzle.group_count())
            .filter(|&h| h != group)
            .filter(|&h| puzzle.group(h).locations().iter().any(|l| g_locs.contains(l)))
            .collect();

        let mut changed = HashSet::new();
        for (symbol, p) in &candidate_map {
            let p_set: HashSet<M::Location> = p.iter().cloned().collect();
            for &h in &intersecting_groups {
                let h_locations = puzzle.group(h).locations().to_vec();
                let h_locs: HashSet<M::Location> = h_locations.iter().cloned().collect();
                if !p_set.iter().all(|l| h_locs.contains(l)) {
                    continue;
                }

                for loc in &h_locations {
                    if p_set.contains(loc) {
                        continue;
                    }
                    let cell = puzzle.cell_mut(loc);
                    if cell.value().is_some() {
                        continue;
                    }
                    if cell.remove_candidate(symbol) {
                        changed.insert(loc.clone());
                    }
                }
            }
        }
        changed
    }
}

/// The standard strategy order: S1 through S5, as invoked by the driver.
pub fn standard_strategies<M: CnppModel>() -> Vec<Box<dyn Strategy<M>>> {
    vec![
        Box::new(ErasePencilMarkings),
        Box::new(LastRemainingCell),
        Box::new(NakedConjugates),
        Box::new(HiddenConjugates),
        Box::new(Intersections),
    ]
}

fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    fn helper<T: Clone>(items: &[T], k: usize, start: usize, current: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..items.len() {
            current.push(items[i].clone());
            helper(items, k, i + 1, current, out);
            current.pop();
        }
    }

    if k == 0 {
        return vec![Vec::new()];
    }
    if items.len() < k {
        return Vec::new();
    }
    let mut out = Vec::new();
    helper(items, k, 0, &mut Vec::new(), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Group, HashCandidates};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[derive(Clone, Debug)]
    struct TestModel;
    impl CnppModel for TestModel {
        type Symbol = u8;
        type Location = usize;
        type Candidates = HashCandidates<u8>;
    }

    fn candidates(values: &[u8]) -> Cell<TestModel> {
        Cell::with_candidates(HashCandidates::from_values(values.iter().cloned()))
    }

    #[test]
    fn combinations_enumerates_all_k_subsets() {
        let items = vec![1, 2, 3, 4];
        let subsets = combinations(&items, 2);
        assert_eq!(subsets.len(), 6);
        assert!(subsets.contains(&vec![1, 2]));
        assert!(subsets.contains(&vec![3, 4]));
    }

    #[test]
    fn erase_pencil_markings_strips_solved_values() {
        let mut cells = HashMap::new();
        cells.insert(0, Cell::solved(1));
        cells.insert(1, candidates(&[1, 2, 3]));
        cells.insert(2, candidates(&[1, 3]));
        let group = Group::new(vec![0, 1, 2]);
        let mut puzzle = crate::model::Puzzle::new(vec![group], cells).unwrap();

        let changed = ErasePencilMarkings.apply(&mut puzzle, 0);
        assert_eq!(changed, HashSet::from([1, 2]));
        assert_eq!(puzzle.cell(&1).candidates(), vec![2, 3]);
        assert_eq!(puzzle.cell(&2).candidates(), vec![3]);
    }

    #[test]
    fn last_remaining_cell_commits_hidden_single() {
        let mut cells = HashMap::new();
        cells.insert(0, candidates(&[1, 2]));
        cells.insert(1, candidates(&[2, 3]));
        cells.insert(2, candidates(&[2]));
        let group = Group::new(vec![0, 1, 2]);
        let mut puzzle = crate::model::Puzzle::new(vec![group], cells).unwrap();

        // Symbol 1 only appears in cell 0's candidates, so it's committed there.
        let changed = LastRemainingCell.apply(&mut puzzle, 0);
        assert!(changed.contains(&0));
        assert_eq!(puzzle.cell(&0).committed(), Some(&1));
    }

    #[test]
    fn naked_pair_strips_other_cells() {
        // Cells 0 and 1 form a naked pair on {3, 7}; this must clear 3 and 7
        // from every other unsolved cell in the group, without touching 0 or 1.
        let mut cells = HashMap::new();
        cells.insert(0, candidates(&[3, 7]));
        cells.insert(1, candidates(&[3, 7]));
        cells.insert(2, candidates(&[1, 3, 4]));
        cells.insert(3, candidates(&[2, 7, 5]));
        cells.insert(4, candidates(&[1, 2]));
        cells.insert(5, candidates(&[4, 5]));
        let group = Group::new(vec![0, 1, 2, 3, 4, 5]);
        let mut puzzle = crate::model::Puzzle::new(vec![group], cells).unwrap();

        let changed = NakedConjugates.apply(&mut puzzle, 0);
        assert_eq!(changed, HashSet::from([2, 3]));
        assert_eq!(puzzle.cell(&2).candidates(), vec![1, 4]);
        let mut c3 = puzzle.cell(&3).candidates();
        c3.sort();
        assert_eq!(c3, vec![2, 5]);
        assert_eq!(puzzle.cell(&0).candidates().len(), 2);
        assert_eq!(puzzle.cell(&1).candidates().len(), 2);
    }

    #[test]
    fn hidden_pair_collapses_host_cells() {
        // Symbols 8 and 9 only ever appear (between them) in cells 0 and 1;
        // every other symbol appears in all four of cells 2-5, so {8, 9} is
        // the only hidden pair in this group regardless of map iteration
        // order. Those two host cells' other candidates must be stripped.
        let mut cells = HashMap::new();
        cells.insert(0, candidates(&[1, 8, 9]));
        cells.insert(1, candidates(&[2, 8, 9]));
        cells.insert(2, candidates(&[1, 2, 3, 4, 5, 6, 7]));
        cells.insert(3, candidates(&[1, 2, 3, 4, 5, 6, 7]));
        cells.insert(4, candidates(&[1, 2, 3, 4, 5, 6, 7]));
        cells.insert(5, candidates(&[1, 2, 3, 4, 5, 6, 7]));
        let group = Group::new(vec![0, 1, 2, 3, 4, 5]);
        let mut puzzle = crate::model::Puzzle::new(vec![group], cells).unwrap();

        let changed = HiddenConjugates.apply(&mut puzzle, 0);
        assert_eq!(changed, HashSet::from([0, 1]));
        let mut c0 = puzzle.cell(&0).candidates();
        c0.sort();
        assert_eq!(c0, vec![8, 9]);
        let mut c1 = puzzle.cell(&1).candidates();
        c1.sort();
        assert_eq!(c1, vec![8, 9]);
    }

    #[test]
    fn intersection_strips_locked_candidate_from_other_group() {
        // Group 0 (e.g. a box) has symbol 9 confined to cells {0, 1}, both of
        // which also belong to group 1 (e.g. a row). Cell 2 is in group 1
        // only and must lose candidate 9.
        let mut cells = HashMap::new();
        cells.insert(0, candidates(&[9, 1]));
        cells.insert(1, candidates(&[9, 2]));
        cells.insert(2, candidates(&[9, 3]));
        cells.insert(3, candidates(&[4, 5]));
        let box_group = Group::new(vec![0, 1, 3]);
        let row_group = Group::new(vec![0, 1, 2]);
        let mut puzzle = crate::model::Puzzle::new(vec![box_group, row_group], cells).unwrap();

        let changed = Intersections.apply(&mut puzzle, 0);
        assert!(changed.contains(&2));
        assert_eq!(puzzle.cell(&2).candidates(), vec![3]);
    }
}
