//! A cell with exactly one remaining candidate must hold that value.

use crate::errors::Unsolvable;
use crate::solver::Solver;
use crate::strategy::Pass;

/// One full row-major scan committing every naked single it meets.
///
/// Placements ahead of the scan position are picked up by the same scan,
/// so `rescan` is only raised when an elimination lands behind it; the
/// driver loops the pass on that signal to reach its fixed point.
///
/// An unsolved cell with no candidates at all means an earlier deduction
/// chain was contradictory: the board is unsolvable as it stands.
pub(crate) fn find_naked_singles(solver: &mut Solver) -> Result<Pass, Unsolvable> {
    let side = solver.grid.side();
    let mut pass = Pass::default();

    for row in 0..side {
        for col in 0..side {
            if solver.grid.get(row, col) != 0 {
                continue;
            }
            let set = solver.candidates.at(row, col);
            if set.is_empty() {
                return Err(Unsolvable { row, col });
            }
            let value = match set.sole() {
                Some(value) => value,
                None => continue,
            };
            let elimination = solver.place(row, col, value);
            pass.changed = true;
            pass.rescan |= elimination.earlier;
        }
    }

    Ok(pass)
}
