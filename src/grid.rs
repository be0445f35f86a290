//! The grid of placed values, its structural validator and its renderer.

use std::fmt;
use std::ops::Range;

use crate::errors::GridError;

/// Row/column span of the block containing `index`.
pub(crate) fn block_span(index: usize, block_len: usize) -> Range<usize> {
    let start = (index / block_len) * block_len;
    start..start + block_len
}

/// An N×N sudoku grid of placed values, `0` marking an empty cell.
///
/// N must be `D²` for a block dimension `D >= 2`; the `D×D` sub-grids are
/// the blocks. Grids are only obtainable through [`Grid::from_rows`], which
/// rejects structurally broken input, so every grid handed to the solver
/// already satisfies the uniqueness invariant: within any row, column or
/// block, the non-zero values are pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u16>,
    side: usize,
    block_len: usize,
}

impl Grid {
    /// Validates `rows` and builds a grid from it.
    ///
    /// Checks, in order: perfect-square side length, square shape, value
    /// range, and row/column/block uniqueness of the non-zero values.
    pub fn from_rows(rows: Vec<Vec<u16>>) -> Result<Grid, GridError> {
        let side = rows.len();
        let block_len = (side as f64).sqrt() as usize;
        if block_len < 2 || block_len * block_len != side {
            return Err(GridError::InvalidDimension(side));
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != side {
                return Err(GridError::NotSquare {
                    row,
                    len: cells.len(),
                    side,
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if value as usize > side {
                    return Err(GridError::ValueOutOfRange {
                        row,
                        col,
                        value,
                        side,
                    });
                }
            }
        }

        let grid = Grid {
            cells: rows.into_iter().flatten().collect(),
            side,
            block_len,
        };
        grid.check_duplicates()?;
        Ok(grid)
    }

    /// Scans every filled cell's row, column and block for a second
    /// occurrence of its value.
    fn check_duplicates(&self) -> Result<(), GridError> {
        for row in 0..self.side {
            for col in 0..self.side {
                let value = self.get(row, col);
                if value == 0 {
                    continue;
                }

                for col2 in col + 1..self.side {
                    if self.get(row, col2) == value {
                        return Err(GridError::DuplicateInRow { row, value });
                    }
                }
                for row2 in row + 1..self.side {
                    if self.get(row2, col) == value {
                        return Err(GridError::DuplicateInColumn { col, value });
                    }
                }
                // row and column duplicates inside the block are reported
                // above, so the block scan skips the cell's own row/column
                for row2 in block_span(row, self.block_len) {
                    if row2 == row {
                        continue;
                    }
                    for col2 in block_span(col, self.block_len) {
                        if col2 == col {
                            continue;
                        }
                        if row2 > row && self.get(row2, col2) == value {
                            return Err(GridError::DuplicateInBlock {
                                row: row2,
                                col: col2,
                                value,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Side length N of the grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Block dimension D, with N = D².
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Value at `(row, col)`; `0` means empty.
    pub fn get(&self, row: usize, col: usize) -> u16 {
        self.cells[row * self.side + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u16) {
        self.cells[row * self.side + col] = value;
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    /// Whether every cell holds a value.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// The grid as nested rows, the inverse of [`Grid::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<u16>> {
        self.cells
            .chunks(self.side)
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    /// Whether `value` is placed anywhere in `row`.
    pub(crate) fn value_in_row(&self, row: usize, value: u16) -> bool {
        (0..self.side).any(|col| self.get(row, col) == value)
    }

    /// Whether `value` is placed anywhere in `col`.
    pub(crate) fn value_in_col(&self, col: usize, value: u16) -> bool {
        (0..self.side).any(|row| self.get(row, col) == value)
    }

    /// Whether `value` is placed anywhere in the block containing
    /// `(row, col)`. With `exclude_own_row_col` the cell's own row and
    /// column are skipped, for callers that already checked those.
    pub(crate) fn value_in_block(
        &self,
        row: usize,
        col: usize,
        value: u16,
        exclude_own_row_col: bool,
    ) -> bool {
        for block_row in block_span(row, self.block_len) {
            if exclude_own_row_col && block_row == row {
                continue;
            }
            for block_col in block_span(col, self.block_len) {
                if exclude_own_row_col && block_col == col {
                    continue;
                }
                if self.get(block_row, block_col) == value {
                    return true;
                }
            }
        }
        false
    }
}

impl fmt::Display for Grid {
    /// Block-separated rendering with `.` for empty cells, cells padded to
    /// the width of the largest value.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.side.to_string().len();
        for row in 0..self.side {
            if row != 0 && row % self.block_len == 0 {
                writeln!(f)?;
            }
            for col in 0..self.side {
                if col != 0 && col % self.block_len == 0 {
                    write!(f, "  ")?;
                }
                match self.get(row, col) {
                    0 => write!(f, "{:>w$} ", ".", w = width)?,
                    value => write!(f, "{:>w$} ", value, w = width)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_rows().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    /// Deserializes from nested rows, re-running the structural validator
    /// so no invalid grid can enter through this path.
    fn deserialize<D>(deserializer: D) -> Result<Grid, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<Vec<u16>>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
