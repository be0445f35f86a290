//! Two cells sharing a group with identical two-value candidate sets lock
//! those values to themselves; every other cell of the group loses both.

use crate::candidates::CandidateGrid;
use crate::errors::Unsolvable;
use crate::grid::block_span;
use crate::solver::Solver;
use crate::strategy::Pass;

/// For each unsolved cell holding exactly two candidates, searches forward
/// in scan order for a partner with the identical set and eliminates the
/// pair from the rest of the shared group(s).
///
/// Partner search order is block first, then row, then column; one
/// partner per cell per pass. A block partner that also shares the
/// cell's row or column gets that line cleaned as well; row and column
/// partners found after the block search necessarily lie outside the
/// block. A pair never places a value directly; it only feeds the single
/// strategies of later rounds.
pub(crate) fn find_naked_pairs(solver: &mut Solver) -> Result<Pass, Unsolvable> {
    let side = solver.grid.side();
    let block_len = solver.grid.block_len();
    let mut pass = Pass::default();

    for row in 0..side {
        for col in 0..side {
            if solver.grid.get(row, col) != 0 {
                continue;
            }
            let pair = match solver.candidates.at(row, col).pair() {
                Some(pair) => pair,
                None => continue,
            };

            let candidates = &mut solver.candidates;
            if let Some((partner_row, partner_col)) =
                forward_pair_in_block(candidates, block_len, row, col, pair)
            {
                pass.changed |= remove_pair_in_block(
                    candidates,
                    block_len,
                    row,
                    col,
                    partner_row,
                    partner_col,
                    pair,
                );
                if partner_row == row {
                    pass.changed |= remove_pair_in_row(candidates, side, row, col, partner_col, pair);
                } else if partner_col == col {
                    pass.changed |= remove_pair_in_col(candidates, side, col, row, partner_row, pair);
                }
            } else if let Some(partner_col) = forward_pair_in_row(candidates, side, row, col, pair) {
                pass.changed |= remove_pair_in_row(candidates, side, row, col, partner_col, pair);
            } else if let Some(partner_row) = forward_pair_in_col(candidates, side, row, col, pair) {
                pass.changed |= remove_pair_in_col(candidates, side, col, row, partner_row, pair);
            }
        }
    }

    Ok(pass)
}

fn forward_pair_in_block(
    candidates: &CandidateGrid,
    block_len: usize,
    row: usize,
    col: usize,
    pair: [u16; 2],
) -> Option<(usize, usize)> {
    for partner_row in block_span(row, block_len) {
        if partner_row < row {
            continue;
        }
        for partner_col in block_span(col, block_len) {
            if partner_row == row && partner_col <= col {
                continue;
            }
            if candidates.at(partner_row, partner_col).pair() == Some(pair) {
                return Some((partner_row, partner_col));
            }
        }
    }
    None
}

fn forward_pair_in_row(
    candidates: &CandidateGrid,
    side: usize,
    row: usize,
    col: usize,
    pair: [u16; 2],
) -> Option<usize> {
    (col + 1..side).find(|&partner_col| candidates.at(row, partner_col).pair() == Some(pair))
}

fn forward_pair_in_col(
    candidates: &CandidateGrid,
    side: usize,
    row: usize,
    col: usize,
    pair: [u16; 2],
) -> Option<usize> {
    (row + 1..side).find(|&partner_row| candidates.at(partner_row, col).pair() == Some(pair))
}

fn remove_pair_in_row(
    candidates: &mut CandidateGrid,
    side: usize,
    row: usize,
    except_a: usize,
    except_b: usize,
    pair: [u16; 2],
) -> bool {
    let mut changed = false;
    for col in 0..side {
        if col == except_a || col == except_b {
            continue;
        }
        let set = candidates.at_mut(row, col);
        changed |= set.remove(pair[0]);
        changed |= set.remove(pair[1]);
    }
    changed
}

fn remove_pair_in_col(
    candidates: &mut CandidateGrid,
    side: usize,
    col: usize,
    except_a: usize,
    except_b: usize,
    pair: [u16; 2],
) -> bool {
    let mut changed = false;
    for row in 0..side {
        if row == except_a || row == except_b {
            continue;
        }
        let set = candidates.at_mut(row, col);
        changed |= set.remove(pair[0]);
        changed |= set.remove(pair[1]);
    }
    changed
}

fn remove_pair_in_block(
    candidates: &mut CandidateGrid,
    block_len: usize,
    row_a: usize,
    col_a: usize,
    row_b: usize,
    col_b: usize,
    pair: [u16; 2],
) -> bool {
    let mut changed = false;
    for row in block_span(row_a, block_len) {
        for col in block_span(col_a, block_len) {
            if (row == row_a && col == col_a) || (row == row_b && col == col_b) {
                continue;
            }
            let set = candidates.at_mut(row, col);
            changed |= set.remove(pair[0]);
            changed |= set.remove(pair[1]);
        }
    }
    changed
}
