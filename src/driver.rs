//! The solver driver: fixpoint propagation via the group scheduler, falling
//! back to recursive backtracking with conflict-driven candidate pruning
//! when propagation stalls.

use std::collections::HashSet;

use tracing::{debug, instrument, trace};

use crate::heuristics::{CellHeuristic, MinimumRemainingValues, NaturalOrder, SymbolHeuristic};
use crate::model::{CnppModel, Puzzle, PuzzleState};
use crate::stats::SearchStats;
use crate::strategies::{standard_strategies, Strategy};

pub struct Solver<M: CnppModel> {
    cell_heuristic: Box<dyn CellHeuristic<M>>,
    symbol_heuristic: Box<dyn SymbolHeuristic<M>>,
    strategies: Vec<Box<dyn Strategy<M>>>,
}

impl<M: CnppModel> Solver<M>
where
    M::Symbol: Ord,
{
    /// The default solver: minimum-remaining-values cell choice, smallest
    /// candidate first, the standard S1-S5 strategy order.
    pub fn new() -> Self {
        Self {
            cell_heuristic: Box::new(MinimumRemainingValues),
            symbol_heuristic: Box::new(NaturalOrder),
            strategies: standard_strategies(),
        }
    }
}

impl<M: CnppModel> Default for Solver<M>
where
    M::Symbol: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M: CnppModel> Solver<M> {
    pub fn with_heuristics(
        cell_heuristic: Box<dyn CellHeuristic<M>>,
        symbol_heuristic: Box<dyn SymbolHeuristic<M>>,
    ) -> Self {
        Self {
            cell_heuristic,
            symbol_heuristic,
            strategies: standard_strategies(),
        }
    }

    /// Solves `puzzle` without mutating it.
    pub fn solve(&self, puzzle: &Puzzle<M>) -> (Puzzle<M>, PuzzleState) {
        let (p, s, _) = self.solve_with_stats(puzzle);
        (p, s)
    }

    #[instrument(skip(self, puzzle))]
    pub fn solve_with_stats(&self, puzzle: &Puzzle<M>) -> (Puzzle<M>, PuzzleState, SearchStats) {
        let mut stats = SearchStats::default();
        let clone = puzzle.deep_clone();
        let (result, state) = self.solve_inner(clone, &mut stats);
        (result, state, stats)
    }

    /// Runs the group scheduler to a fixpoint: pop the lowest-priority
    /// group, invoke strategies S1-S5 in order stopping at the first one
    /// that changes something, and re-prioritize every group touched by the
    /// change. Stops when the scheduler empties or the puzzle is no longer
    /// `Unsolved`.
    fn propagate(&self, puzzle: &mut Puzzle<M>, stats: &mut SearchStats) -> PuzzleState {
        use crate::work_list::GroupScheduler;

        let mut scheduler = GroupScheduler::new();
        scheduler.seed_all(puzzle.group_count());

        let mut state = puzzle.state();
        while state == PuzzleState::Unsolved {
            let Some(gid) = scheduler.pop_min() else {
                break;
            };

            let locations = puzzle.group(gid).locations().to_vec();
            if locations.iter().all(|loc| puzzle.cell_mut(loc).value().is_some()) {
                continue;
            }

            let mut delta = HashSet::new();
            for strategy in &self.strategies {
                delta = strategy.apply(puzzle, gid);
                stats.record(strategy.name(), delta.len());
                if !delta.is_empty() {
                    trace!(strategy = strategy.name(), changed = delta.len(), "strategy made progress");
                    break;
                }
            }

            for loc in &delta {
                for &h in puzzle.groups_of(loc) {
                    scheduler.decrement(h, 1);
                }
            }

            state = puzzle.state();
        }
        state
    }

    fn solve_inner(&self, mut puzzle: Puzzle<M>, stats: &mut SearchStats) -> (Puzzle<M>, PuzzleState) {
        stats.nodes_visited += 1;
        let state = self.propagate(&mut puzzle, stats);

        match state {
            PuzzleState::Solved | PuzzleState::Conflict => (puzzle, state),
            PuzzleState::Unsolved => {
                let Some(loc) = self.cell_heuristic.select(&mut puzzle) else {
                    debug!("propagation stalled with no unsolved cell to branch on");
                    return (puzzle, PuzzleState::Conflict);
                };

                let candidates = puzzle.cell(&loc).candidates();
                if candidates.is_empty() {
                    return (puzzle, PuzzleState::Conflict);
                }
                let guess = self
                    .symbol_heuristic
                    .order(&candidates)
                    .into_iter()
                    .next()
                    .expect("non-empty candidates produce a non-empty ordering");

                debug!(?loc, ?guess, "propagation stalled, guessing");

                let mut clone = puzzle.deep_clone();
                clone.cell_mut(&loc).set_value(guess.clone());
                let (clone, clone_state) = self.solve_inner(clone, stats);

                match clone_state {
                    PuzzleState::Solved => (clone, PuzzleState::Solved),
                    PuzzleState::Conflict | PuzzleState::Unsolved => {
                        stats.backtracks += 1;
                        puzzle.cell_mut(&loc).remove_candidate(&guess);
                        self.solve_inner(puzzle, stats)
                    }
                }
            }
        }
    }
}

/// Solves `puzzle` without mutating it, using the default strategy set and
/// deterministic heuristics. See [`Solver`] for pluggable heuristics.
pub fn solve<M: CnppModel>(puzzle: &Puzzle<M>) -> (Puzzle<M>, PuzzleState)
where
    M::Symbol: Ord,
{
    Solver::new().solve(puzzle)
}

pub fn solve_with_stats<M: CnppModel>(puzzle: &Puzzle<M>) -> (Puzzle<M>, PuzzleState, SearchStats)
where
    M::Symbol: Ord,
{
    Solver::new().solve_with_stats(puzzle)
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

    #[test]
    fn solves_via_propagation_alone() {
        let mut cells = HashMap::new();
        cells.insert(0, Cell::solved(1));
        cells.insert(1, Cell::with_candidates(HashCandidates::from_values([2, 3])));
        cells.insert(2, Cell::with_candidates(HashCandidates::from_values([2, 3])));
        cells.insert(3, Cell::solved(2));
        let group = Group::new(vec![0, 1, 3]);
        let other = Group::new(vec![1, 2]);
        let puzzle: Puzzle<TestModel> = Puzzle::new(vec![group, other], cells).unwrap();

        let (solved, state) = solve(&puzzle);
        assert_eq!(state, PuzzleState::Solved);
        assert_eq!(solved.cell(&1).committed(), Some(&3));
        assert_eq!(solved.cell(&2).committed(), Some(&2));
    }

    #[test]
    fn backtracks_when_propagation_stalls() {
        // Group has two equally-constrained cells with no solved cells to
        // propagate from; the driver must guess.
        let mut cells = HashMap::new();
        cells.insert(0, Cell::with_candidates(HashCandidates::from_values([1, 2])));
        cells.insert(1, Cell::with_candidates(HashCandidates::from_values([1, 2])));
        let group = Group::new(vec![0, 1]);
        let puzzle: Puzzle<TestModel> = Puzzle::new(vec![group], cells).unwrap();

        let (solved, state) = solve(&puzzle);
        assert_eq!(state, PuzzleState::Solved);
        // Deterministic heuristics: first location (0), smallest candidate (1).
        assert_eq!(solved.cell(&0).committed(), Some(&1));
        assert_eq!(solved.cell(&1).committed(), Some(&2));
    }

    #[test]
    fn reports_conflict_without_mutating_input() {
        let mut cells = HashMap::new();
        cells.insert(0, Cell::solved(1));
        cells.insert(1, Cell::solved(1));
        let group = Group::new(vec![0, 1]);
        let puzzle: Puzzle<TestModel> = Puzzle::new(vec![group], cells).unwrap();

        let (_, state) = solve(&puzzle);
        assert_eq!(state, PuzzleState::Conflict);
    }
}
