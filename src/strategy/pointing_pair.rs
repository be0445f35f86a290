//! A candidate confined to one row or column of a block cannot appear in
//! the rest of that row or column outside the block.

use crate::candidates::CandidateGrid;
use crate::errors::Unsolvable;
use crate::grid::block_span;
use crate::solver::Solver;
use crate::strategy::Pass;

/// For each unsolved cell and each of its candidates, checks whether every
/// other in-block occurrence of the candidate shares the cell's row (or,
/// failing that, its column) and eliminates it from the rest of that line
/// outside the block.
///
/// Confinement requires at least one *other* occurrence on the line; a
/// candidate unique to the cell within its block is a job for the single
/// strategies, not for pointing.
pub(crate) fn find_pointing_pairs(solver: &mut Solver) -> Result<Pass, Unsolvable> {
    let side = solver.grid.side();
    let block_len = solver.grid.block_len();
    let mut pass = Pass::default();

    for row in 0..side {
        for col in 0..side {
            if solver.grid.get(row, col) != 0 {
                continue;
            }
            let values = solver.candidates.at(row, col).values().to_vec();
            for value in values {
                let candidates = &mut solver.candidates;
                if confined_to_block_row(candidates, block_len, row, col, value) {
                    pass.changed |=
                        eliminate_in_row_outside_block(candidates, side, block_len, row, col, value);
                } else if confined_to_block_col(candidates, block_len, row, col, value) {
                    pass.changed |=
                        eliminate_in_col_outside_block(candidates, side, block_len, row, col, value);
                }
            }
        }
    }

    Ok(pass)
}

/// Every other occurrence of `value` within the block lies in `row`, and
/// there is at least one.
fn confined_to_block_row(
    candidates: &CandidateGrid,
    block_len: usize,
    row: usize,
    col: usize,
    value: u16,
) -> bool {
    let mut found_in_row = false;
    for block_row in block_span(row, block_len) {
        for block_col in block_span(col, block_len) {
            if block_row == row && block_col == col {
                continue;
            }
            if candidates.at(block_row, block_col).contains(value) {
                if block_row != row {
                    return false;
                }
                found_in_row = true;
            }
        }
    }
    found_in_row
}

/// Column analogue of [`confined_to_block_row`].
fn confined_to_block_col(
    candidates: &CandidateGrid,
    block_len: usize,
    row: usize,
    col: usize,
    value: u16,
) -> bool {
    let mut found_in_col = false;
    for block_row in block_span(row, block_len) {
        for block_col in block_span(col, block_len) {
            if block_row == row && block_col == col {
                continue;
            }
            if candidates.at(block_row, block_col).contains(value) {
                if block_col != col {
                    return false;
                }
                found_in_col = true;
            }
        }
    }
    found_in_col
}

fn eliminate_in_row_outside_block(
    candidates: &mut CandidateGrid,
    side: usize,
    block_len: usize,
    row: usize,
    col: usize,
    value: u16,
) -> bool {
    let block_cols = block_span(col, block_len);
    let mut changed = false;
    for peer_col in 0..side {
        if block_cols.contains(&peer_col) {
            continue;
        }
        changed |= candidates.at_mut(row, peer_col).remove(value);
    }
    changed
}

fn eliminate_in_col_outside_block(
    candidates: &mut CandidateGrid,
    side: usize,
    block_len: usize,
    row: usize,
    col: usize,
    value: u16,
) -> bool {
    let block_rows = block_span(row, block_len);
    let mut changed = false;
    for peer_row in 0..side {
        if block_rows.contains(&peer_row) {
            continue;
        }
        changed |= candidates.at_mut(peer_row, col).remove(value);
    }
    changed
}
