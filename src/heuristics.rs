//! Pluggable heuristics used when propagation stalls and the driver must
//! guess: which cell to branch on, and in what order to try its candidates.
//! Kept separate from the driver itself so a caller can swap in a different
//! cell-selection or candidate-ordering policy without touching the search
//! loop.

use crate::model::{CnppModel, Puzzle};

pub trait CellHeuristic<M: CnppModel> {
    /// Selects an unsolved cell to branch on, or `None` if there isn't one.
    fn select(&self, puzzle: &mut Puzzle<M>) -> Option<M::Location>;
}

/// Fewest remaining candidates first; ties broken by the puzzle's stable
/// construction-time location order. The default: branching on the most
/// constrained cell tends to fail fast or finish fast, both cheaper than
/// branching on a wide-open one.
pub struct MinimumRemainingValues;

impl<M: CnppModel> CellHeuristic<M> for MinimumRemainingValues {
    fn select(&self, puzzle: &mut Puzzle<M>) -> Option<M::Location> {
        let mut best: Option<(M::Location, usize)> = None;
        for loc in puzzle.locations().to_vec() {
            let cell = puzzle.cell_mut(&loc);
            if cell.value().is_some() {
                continue;
            }
            let n = cell.candidates().len();
            match &best {
                Some((_, best_n)) if *best_n <= n => {}
                _ => best = Some((loc.clone(), n)),
            }
        }
        best.map(|(loc, _)| loc)
    }
}

/// First unsolved cell in construction order. Useful for tests that want the
/// naive fallback behavior rather than minimum-remaining-values.
pub struct FirstUnsolved;

impl<M: CnppModel> CellHeuristic<M> for FirstUnsolved {
    fn select(&self, puzzle: &mut Puzzle<M>) -> Option<M::Location> {
        for loc in puzzle.locations().to_vec() {
            if puzzle.cell_mut(&loc).value().is_none() {
                return Some(loc);
            }
        }
        None
    }
}

pub trait SymbolHeuristic<M: CnppModel> {
    /// Orders a cell's remaining candidates; the driver guesses the first.
    fn order(&self, candidates: &[M::Symbol]) -> Vec<M::Symbol>;
}

/// Smallest-first by the alphabet's natural order. The default: keeps
/// guesses reproducible across runs.
pub struct NaturalOrder;

impl<M: CnppModel> SymbolHeuristic<M> for NaturalOrder
where
    M::Symbol: Ord,
{
    fn order(&self, candidates: &[M::Symbol]) -> Vec<M::Symbol> {
        let mut v = candidates.to_vec();
        v.sort();
        v
    }
}

/// Shuffles candidates with `rand`. Useful for property tests that want to
/// explore multiple completions across runs; never used by the default
/// [`crate::solve`].
pub struct RandomOrder;

impl<M: CnppModel> SymbolHeuristic<M> for RandomOrder {
    fn order(&self, candidates: &[M::Symbol]) -> Vec<M::Symbol> {
        use rand::seq::SliceRandom;
        let mut v = candidates.to_vec();
        v.shuffle(&mut rand::thread_rng());
        v
    }
}
