//! The propagation driver and the public solving interface.

use tracing::{debug, trace};

use crate::backtrack;
use crate::candidates::{CandidateGrid, Elimination};
use crate::errors::{Unsolvable, UnsolvableError};
use crate::grid::Grid;
use crate::strategy::{Pass, Strategy};

/// Terminal status of a solving attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Every cell holds a value and all constraints are satisfied.
    Solved,
    /// Propagation alone could not finish the grid. [`Solver::propagate`]
    /// returns this to hand off to backtracking; [`Solver::solve`] never
    /// surfaces it.
    Stalled,
    /// Propagation left some cell with no legal value: the puzzle has no
    /// solution consistent with its clues.
    Unsolvable,
    /// Backtracking tried every candidate at the root without success;
    /// the puzzle has no solution.
    Exhausted,
}

/// A single solving session.
///
/// A solver exclusively owns its grid and candidate store and mutates them
/// in place; nothing is shared across sessions. All work happens
/// synchronously inside the method calls.
#[derive(Debug, Clone)]
pub struct Solver {
    pub(crate) grid: Grid,
    pub(crate) candidates: CandidateGrid,
    pub(crate) n_unsolved: usize,
}

impl Solver {
    /// Builds the full candidate store for `grid`.
    ///
    /// Fails when some empty cell already has no legal value. That is a
    /// cheaper-to-detect condition than letting backtracking exhaust
    /// itself, and it is reported eagerly here rather than discovered
    /// deep in the search.
    pub fn new(grid: Grid) -> Result<Solver, UnsolvableError> {
        let candidates = CandidateGrid::build(&grid).map_err(UnsolvableError::from)?;
        let n_unsolved = grid.count_empty();
        Ok(Solver {
            grid,
            candidates,
            n_unsolved,
        })
    }

    /// The current state of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the solver, returning the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Whether every cell has been solved.
    pub fn is_solved(&self) -> bool {
        self.n_unsolved == 0
    }

    /// Remaining candidates for `(row, col)`, ascending. Empty for cells
    /// that are already solved.
    pub fn candidates(&self, row: usize, col: usize) -> &[u16] {
        self.candidates.at(row, col).values()
    }

    /// Runs a single pass of `strategy`, reporting whether it placed a
    /// value or removed a candidate anywhere.
    pub fn apply(&mut self, strategy: Strategy) -> Result<bool, UnsolvableError> {
        strategy
            .deduce(self)
            .map(|pass| pass.changed)
            .map_err(UnsolvableError::from)
    }

    /// Runs the strategies until the grid is solved or none of them makes
    /// progress.
    ///
    /// Each round runs naked single to its own fixed point, then hidden
    /// single, naked pair and pointing pair once each, cheapest first. A
    /// round without any change anywhere means propagation has done all
    /// it can.
    pub fn propagate(&mut self) -> Verdict {
        loop {
            let mut round = Pass::default();

            loop {
                match Strategy::NakedSingle.deduce(self) {
                    Err(contradiction) => return self.report_unsolvable(contradiction),
                    Ok(pass) => {
                        round.merge(pass);
                        if self.is_solved() {
                            return Verdict::Solved;
                        }
                        if !pass.rescan {
                            break;
                        }
                        trace!("eliminations landed behind the scan, re-running naked single");
                    }
                }
            }

            for &strategy in &[
                Strategy::HiddenSingle,
                Strategy::NakedPair,
                Strategy::PointingPair,
            ] {
                debug!(?strategy, unsolved = self.n_unsolved, "running strategy");
                match strategy.deduce(self) {
                    Err(contradiction) => return self.report_unsolvable(contradiction),
                    Ok(pass) => round.merge(pass),
                }
                if self.is_solved() {
                    return Verdict::Solved;
                }
            }

            if !round.changed {
                debug!(unsolved = self.n_unsolved, "propagation stalled");
                return Verdict::Stalled;
            }
        }
    }

    /// Solves the grid: propagation first, backtracking search on a stall.
    pub fn solve(&mut self) -> Verdict {
        match self.propagate() {
            Verdict::Stalled => {
                debug!(
                    unsolved = self.n_unsolved,
                    "propagation stalled, falling back to depth-first search"
                );
                backtrack::depth_first_search(self)
            }
            verdict => verdict,
        }
    }

    /// Commits `value` at `(row, col)`: writes the grid, retires the
    /// cell's own candidate set and patches every peer's set.
    pub(crate) fn place(&mut self, row: usize, col: usize, value: u16) -> Elimination {
        self.grid.set(row, col, value);
        self.candidates.at_mut(row, col).clear();
        self.n_unsolved -= 1;
        let elimination = self.candidates.eliminate_peers(row, col, value);
        trace!(
            row,
            col,
            value = u64::from(value),
            eliminated = elimination.any,
            "placed value"
        );
        elimination
    }

    fn report_unsolvable(&self, contradiction: Unsolvable) -> Verdict {
        debug!(
            row = contradiction.row,
            col = contradiction.col,
            "cell has no remaining legal value"
        );
        Verdict::Unsolvable
    }
}

impl Grid {
    /// Solves the grid, returning the completed grid if a solution exists.
    ///
    /// Convenience over [`Solver`] for hosts that don't care which
    /// negative verdict occurred.
    pub fn solve_one(self) -> Option<Grid> {
        let mut solver = Solver::new(self).ok()?;
        match solver.solve() {
            Verdict::Solved => Some(solver.into_grid()),
            _ => None,
        }
    }
}
