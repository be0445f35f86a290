//! A candidate no other cell in scope can take must belong to this cell.

use crate::errors::Unsolvable;
use crate::solver::Solver;
use crate::strategy::Pass;

/// Scans every unsolved cell and commits a candidate that appears in no
/// other candidate set of the cell's row, column and block, even when the
/// cell still has alternatives.
///
/// The rule here is the conjunction of all three absences. If no other
/// cell of the row can take the value, the row alone already forces it,
/// but the conjunctive form is what the rest of the pipeline is tuned
/// for; weaker hidden singles fall out of later rounds or backtracking.
pub(crate) fn find_hidden_singles(solver: &mut Solver) -> Result<Pass, Unsolvable> {
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
            let values = set.values().to_vec();
            for value in values {
                if solver.candidates.in_row(row, col, value)
                    || solver.candidates.in_col(row, col, value)
                    || solver.candidates.in_block(row, col, value)
                {
                    continue;
                }
                let elimination = solver.place(row, col, value);
                pass.changed = true;
                pass.rescan |= elimination.earlier;
                break;
            }
        }
    }

    Ok(pass)
}
