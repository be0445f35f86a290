//! Error types surfaced by grid validation and solving.

#[cfg(doc)]
use crate::{Grid, Solver};

/// Structural errors detected by [`Grid::from_rows`].
///
/// All of these are found before any solver state exists, so a failed
/// validation never leaves partially mutated state behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The side length is not `D²` for some `D >= 2`.
    #[error("side length {0} is not a perfect square of a block dimension >= 2")]
    InvalidDimension(usize),
    /// Some row is shorter or longer than the side length.
    #[error("grid is not square: row {row} has {len} cells, expected {side}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of cells found in that row.
        len: usize,
        /// Expected side length.
        side: usize,
    },
    /// A cell holds a value larger than the side length.
    #[error("value {value} at r{row}c{col} is outside 0..={side}")]
    ValueOutOfRange {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The out-of-range value.
        value: u16,
        /// Side length, i.e. the largest legal value.
        side: usize,
    },
    /// A non-zero value appears twice in one row.
    #[error("value {value} appears twice in row {row}")]
    DuplicateInRow {
        /// The row containing the duplicate.
        row: usize,
        /// The duplicated value.
        value: u16,
    },
    /// A non-zero value appears twice in one column.
    #[error("value {value} appears twice in column {col}")]
    DuplicateInColumn {
        /// The column containing the duplicate.
        col: usize,
        /// The duplicated value.
        value: u16,
    },
    /// A non-zero value appears twice in one block.
    #[error("value {value} appears twice in the block containing r{row}c{col}")]
    DuplicateInBlock {
        /// Row of the second occurrence.
        row: usize,
        /// Column of the second occurrence.
        col: usize,
        /// The duplicated value.
        value: u16,
    },
}

/// An unsolved cell was left with no remaining legal value.
///
/// Returned by [`Solver::new`] when the initial candidate build already
/// comes up empty somewhere (the puzzle has no solution consistent with
/// its clues), and by [`Solver::apply`] when a strategy runs into the
/// same condition mid-propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cell r{row}c{col} has no remaining legal value")]
pub struct UnsolvableError {
    /// Row of the contradicted cell.
    pub row: usize,
    /// Column of the contradicted cell.
    pub col: usize,
}

/// Internal contradiction signal threaded through strategy passes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Unsolvable {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl From<Unsolvable> for UnsolvableError {
    fn from(unsolvable: Unsolvable) -> UnsolvableError {
        UnsolvableError {
            row: unsolvable.row,
            col: unsolvable.col,
        }
    }
}
