//! The deterministic elimination strategies.
//!
//! Each strategy is one scan over the board that reads and shrinks the
//! candidate store and, when it derives a forced value, places it on the
//! grid. None of them guesses; everything they do follows logically from
//! the current state, which is what lets the driver interleave them freely.

pub(crate) mod hidden_single;
pub(crate) mod naked_pair;
pub(crate) mod naked_single;
pub(crate) mod pointing_pair;

use crate::errors::Unsolvable;
use crate::solver::Solver;

/// What one strategy pass did to the board.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Pass {
    /// The pass placed a value or removed a candidate somewhere.
    pub(crate) changed: bool,
    /// A candidate was removed at a cell the scan had already passed, so
    /// re-running the same pass may find more.
    pub(crate) rescan: bool,
}

impl Pass {
    pub(crate) fn merge(&mut self, other: Pass) {
        self.changed |= other.changed;
        self.rescan |= other.rescan;
    }
}

/// The propagation strategies, in the order the driver escalates through
/// them: cheap placement strategies first, pure elimination strategies
/// only once the cheaper ones stop making progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// A cell with exactly one remaining candidate.
    NakedSingle,
    /// A candidate confined to one cell of its row, column and block.
    HiddenSingle,
    /// Two cells sharing a group with identical two-value candidate sets.
    NakedPair,
    /// A candidate confined to a single row or column within a block.
    PointingPair,
}

impl Strategy {
    /// Every strategy, in driver priority order.
    pub const ALL: &'static [Strategy] = &[
        Strategy::NakedSingle,
        Strategy::HiddenSingle,
        Strategy::NakedPair,
        Strategy::PointingPair,
    ];

    pub(crate) fn deduce(self, solver: &mut Solver) -> Result<Pass, Unsolvable> {
        match self {
            Strategy::NakedSingle => naked_single::find_naked_singles(solver),
            Strategy::HiddenSingle => hidden_single::find_hidden_singles(solver),
            Strategy::NakedPair => naked_pair::find_naked_pairs(solver),
            Strategy::PointingPair => pointing_pair::find_pointing_pairs(solver),
        }
    }
}
