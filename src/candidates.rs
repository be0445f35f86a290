//! Per-cell candidate bookkeeping.
//!
//! Candidate lists are kept sorted ascending and duplicate-free, so every
//! scan for a target value can stop at the first entry exceeding it. That
//! early break lives in exactly two places, [`CandidateSet::contains`] and
//! [`CandidateSet::remove`], and every strategy goes through them.

use crate::errors::Unsolvable;
use crate::grid::{block_span, Grid};

/// The ascending set of values still legal for one cell.
///
/// For a solved cell the set is kept empty. For an unsolved cell it is
/// always a superset of the truly legal values: strategies only remove
/// values that are provably impossible, and nothing ever adds one back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CandidateSet(Vec<u16>);

impl CandidateSet {
    /// Appends `value`; callers must push in ascending order.
    pub(crate) fn push(&mut self, value: u16) {
        debug_assert!(self.0.last().map_or(true, |&last| last < value));
        self.0.push(value);
    }

    pub(crate) fn contains(&self, value: u16) -> bool {
        for &candidate in &self.0 {
            if candidate > value {
                break;
            }
            if candidate == value {
                return true;
            }
        }
        false
    }

    /// Removes `value` if present, reporting whether it was.
    pub(crate) fn remove(&mut self, value: u16) -> bool {
        for (i, &candidate) in self.0.iter().enumerate() {
            if candidate > value {
                break;
            }
            if candidate == value {
                self.0.remove(i);
                return true;
            }
        }
        false
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn values(&self) -> &[u16] {
        &self.0
    }

    /// The only remaining value, if exactly one remains.
    pub(crate) fn sole(&self) -> Option<u16> {
        match self.0.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }

    /// Both values, if exactly two remain.
    pub(crate) fn pair(&self) -> Option<[u16; 2]> {
        match self.0.as_slice() {
            [first, second] => Some([*first, *second]),
            _ => None,
        }
    }
}

/// What an incremental peer update changed.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Elimination {
    /// Any candidate was removed anywhere.
    pub(crate) any: bool,
    /// A removal landed at a cell strictly preceding the placed cell in
    /// row-major order, i.e. at a position a running scan already passed.
    pub(crate) earlier: bool,
}

impl Elimination {
    fn record(&mut self, removed: bool, earlier: bool) {
        self.any |= removed;
        self.earlier |= removed && earlier;
    }
}

/// One candidate set per cell, maintained incrementally as the grid fills.
#[derive(Debug, Clone)]
pub(crate) struct CandidateGrid {
    sets: Vec<CandidateSet>,
    side: usize,
    block_len: usize,
}

impl CandidateGrid {
    /// Full build: for every empty cell, every value not placed in its
    /// row, column or block, in ascending order. An empty result for any
    /// cell means the puzzle has no solution at all.
    pub(crate) fn build(grid: &Grid) -> Result<CandidateGrid, Unsolvable> {
        let side = grid.side();
        let mut sets = vec![CandidateSet::default(); side * side];

        for row in 0..side {
            for col in 0..side {
                if grid.get(row, col) != 0 {
                    continue;
                }
                let set = &mut sets[row * side + col];
                for value in 1..=side as u16 {
                    if grid.value_in_row(row, value)
                        || grid.value_in_col(col, value)
                        || grid.value_in_block(row, col, value, true)
                    {
                        continue;
                    }
                    set.push(value);
                }
                if set.is_empty() {
                    return Err(Unsolvable { row, col });
                }
            }
        }

        Ok(CandidateGrid {
            sets,
            side,
            block_len: grid.block_len(),
        })
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> &CandidateSet {
        &self.sets[row * self.side + col]
    }

    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut CandidateSet {
        &mut self.sets[row * self.side + col]
    }

    /// `value` was just placed at `(row, col)`: remove it from the set of
    /// every other cell in the same row, column and block.
    pub(crate) fn eliminate_peers(&mut self, row: usize, col: usize, value: u16) -> Elimination {
        let mut elimination = Elimination::default();

        for peer_col in 0..self.side {
            if peer_col == col {
                continue;
            }
            let removed = self.at_mut(row, peer_col).remove(value);
            elimination.record(removed, peer_col < col);
        }

        for peer_row in 0..self.side {
            if peer_row == row {
                continue;
            }
            let removed = self.at_mut(peer_row, col).remove(value);
            elimination.record(removed, peer_row < row);
        }

        // block cells in the placed cell's own row or column were covered
        // by the two loops above
        for peer_row in block_span(row, self.block_len) {
            if peer_row == row {
                continue;
            }
            for peer_col in block_span(col, self.block_len) {
                if peer_col == col {
                    continue;
                }
                let removed = self.at_mut(peer_row, peer_col).remove(value);
                elimination.record(removed, peer_row < row);
            }
        }

        elimination
    }

    /// Whether any *other* cell of `row` still has `value` as a candidate.
    pub(crate) fn in_row(&self, row: usize, col: usize, value: u16) -> bool {
        (0..self.side).any(|peer_col| peer_col != col && self.at(row, peer_col).contains(value))
    }

    /// Whether any *other* cell of `col` still has `value` as a candidate.
    pub(crate) fn in_col(&self, row: usize, col: usize, value: u16) -> bool {
        (0..self.side).any(|peer_row| peer_row != row && self.at(peer_row, col).contains(value))
    }

    /// Whether any *other* cell of the block containing `(row, col)` still
    /// has `value` as a candidate.
    pub(crate) fn in_block(&self, row: usize, col: usize, value: u16) -> bool {
        for peer_row in block_span(row, self.block_len) {
            for peer_col in block_span(col, self.block_len) {
                if peer_row == row && peer_col == col {
                    continue;
                }
                if self.at(peer_row, peer_col).contains(value) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_contains_and_remove() {
        let mut set = CandidateSet::default();
        for value in [1u16, 3, 7].iter() {
            set.push(*value);
        }
        assert!(set.contains(3));
        assert!(!set.contains(2));
        assert!(!set.contains(9));

        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert_eq!(set.values(), &[1, 7]);

        assert_eq!(set.sole(), None);
        assert!(set.remove(7));
        assert_eq!(set.sole(), Some(1));
    }

    #[test]
    fn build_reflects_placed_values() {
        let grid = Grid::from_rows(vec![
            vec![1, 2, 3, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let candidates = CandidateGrid::build(&grid).unwrap();
        assert_eq!(candidates.at(0, 3).values(), &[4]);
        // 1 excluded by the column, 2 by the block
        assert_eq!(candidates.at(1, 0).values(), &[3, 4]);
        // nothing constrains the far corner yet
        assert_eq!(candidates.at(3, 3).values(), &[1, 2, 3, 4]);
    }

    #[test]
    fn build_fails_on_contradicted_cell() {
        let grid = Grid::from_rows(vec![
            vec![1, 2, 3, 0],
            vec![0, 0, 0, 4],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let err = CandidateGrid::build(&grid).unwrap_err();
        assert_eq!((err.row, err.col), (0, 3));
    }

    #[test]
    fn eliminate_peers_reports_earlier_removals() {
        let grid = Grid::from_rows(vec![vec![0; 4]; 4]).unwrap();
        let mut candidates = CandidateGrid::build(&grid).unwrap();

        let elimination = candidates.eliminate_peers(1, 1, 3);
        assert!(elimination.any);
        // (0, 1) precedes (1, 1) in scan order
        assert!(elimination.earlier);
        assert_eq!(candidates.at(0, 1).values(), &[1, 2, 4]);
        assert_eq!(candidates.at(1, 3).values(), &[1, 2, 4]);
        assert_eq!(candidates.at(0, 0).values(), &[1, 2, 4]);
        assert_eq!(candidates.at(2, 2).values(), &[1, 2, 3, 4]);

        // removing again changes nothing
        let elimination = candidates.eliminate_peers(1, 1, 3);
        assert!(!elimination.any);
        assert!(!elimination.earlier);
    }

    #[test]
    fn candidate_scoped_queries_skip_the_cell_itself() {
        let grid = Grid::from_rows(vec![
            vec![1, 2, 3, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let candidates = CandidateGrid::build(&grid).unwrap();

        // 4 is a candidate only at (0, 3) within row 0
        assert!(!candidates.in_row(0, 3, 4));
        assert!(candidates.in_col(0, 3, 4));
        assert!(candidates.in_block(0, 3, 4));
    }
}
