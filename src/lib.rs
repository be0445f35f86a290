#![warn(missing_docs)]
//! An embeddable sudoku solving engine.
//!
//! ## Overview
//!
//! Solves standard N²×N² sudoku grids (9×9 with 3×3 blocks being the
//! typical case) by running four deterministic elimination strategies
//! over an incrementally maintained per-cell candidate store: naked
//! single, hidden single, naked pair and pointing pair. When the
//! strategies stall, a depth-first backtracking search finishes the grid
//! or proves that nothing can.
//!
//! Structural validation happens up front in [`Grid::from_rows`]; an
//! unsatisfiable-but-well-formed puzzle is reported eagerly by
//! [`Solver::new`] when the candidate build finds a cell with no legal
//! value.
//!
//! ## Example
//!
//! ```
//! use sudoku_engine::{Grid, Solver, Verdict};
//!
//! let rows = vec![
//!     vec![8, 0, 0, 0, 0, 7, 0, 9, 0],
//!     vec![0, 2, 9, 0, 0, 4, 0, 0, 6],
//!     vec![3, 0, 0, 2, 0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0, 6, 5, 0, 0],
//!     vec![0, 1, 7, 4, 0, 0, 0, 3, 0],
//!     vec![2, 0, 0, 0, 0, 0, 0, 0, 0],
//!     vec![0, 9, 4, 1, 0, 0, 0, 7, 0],
//!     vec![0, 0, 8, 0, 0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 7, 0, 0, 0, 3],
//! ];
//!
//! let grid = Grid::from_rows(rows).unwrap();
//! let mut solver = Solver::new(grid).unwrap();
//! assert_eq!(solver.solve(), Verdict::Solved);
//! println!("{}", solver.grid());
//! ```

mod backtrack;
mod candidates;
mod errors;
mod grid;
mod solver;
mod strategy;

pub use crate::errors::{GridError, UnsolvableError};
pub use crate::grid::Grid;
pub use crate::solver::{Solver, Verdict};
pub use crate::strategy::Strategy;
