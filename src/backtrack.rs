//! Depth-first exhaustive search for grids propagation could not finish.

use tracing::{debug, trace};

use crate::solver::{Solver, Verdict};

/// One trial position: a cell, the candidate values left to try and a
/// cursor into them. The only grid mutation a frame ever makes is to its
/// own cell, which is reset to empty before the frame is popped, so
/// unwinding restores the exact prior state on every path.
struct Frame {
    row: usize,
    col: usize,
    values: Vec<u16>,
    next: usize,
}

/// Depth-first search over the first unsolved cell in row-major order.
///
/// Candidate lists are snapshots from the candidate store, which is read
/// but never written during the search. Because the store reflects the
/// pre-search state while the grid accumulates trial placements, every
/// value is re-checked against the live grid before it is placed. Frames
/// live on an explicit stack, so search depth is bounded by the number of
/// cells on the heap rather than by the host call stack.
pub(crate) fn depth_first_search(solver: &mut Solver) -> Verdict {
    let mut stack: Vec<Frame> = Vec::with_capacity(solver.n_unsolved);

    match next_frame(solver, 0, 0) {
        Some(frame) => stack.push(frame),
        None => {
            solver.n_unsolved = 0;
            return Verdict::Solved;
        }
    }

    loop {
        let (row, col, placed) = match stack.last_mut() {
            None => {
                debug!("search exhausted every candidate at the root");
                return Verdict::Exhausted;
            }
            Some(frame) => {
                let mut placed = false;
                while frame.next < frame.values.len() {
                    let value = frame.values[frame.next];
                    frame.next += 1;
                    if solver.grid.value_in_row(frame.row, value)
                        || solver.grid.value_in_col(frame.col, value)
                        || solver.grid.value_in_block(frame.row, frame.col, value, false)
                    {
                        continue;
                    }
                    solver.grid.set(frame.row, frame.col, value);
                    placed = true;
                    break;
                }
                (frame.row, frame.col, placed)
            }
        };

        if !placed {
            // every candidate failed here: undo and unwind one level
            solver.grid.set(row, col, 0);
            stack.pop();
            continue;
        }

        match next_frame(solver, row, col + 1) {
            Some(frame) => stack.push(frame),
            None => break,
        }
    }

    trace!(depth = stack.len(), "search filled the last cell");
    for frame in &stack {
        solver.candidates.at_mut(frame.row, frame.col).clear();
    }
    solver.n_unsolved = 0;
    Verdict::Solved
}

/// Locates the first unsolved cell at or after `(row, col)` in row-major
/// order and snapshots its remaining candidates.
fn next_frame(solver: &Solver, row: usize, col: usize) -> Option<Frame> {
    let side = solver.grid.side();
    let mut col = col;
    for frame_row in row..side {
        for frame_col in col..side {
            if solver.grid.get(frame_row, frame_col) == 0 {
                return Some(Frame {
                    row: frame_row,
                    col: frame_col,
                    values: solver.candidates.at(frame_row, frame_col).values().to_vec(),
                    next: 0,
                });
            }
        }
        col = 0;
    }
    None
}
