use sudoku_engine::{Grid, Solver, Strategy, Verdict};

fn grid(input: &str) -> Grid {
    let rows = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    '.' | '_' => 0,
                    digit => digit.to_digit(10).unwrap() as u16,
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).unwrap_or_else(|err| panic!("{}", err))
}

/// The solution must be completely filled, satisfy every constraint and
/// agree with the puzzle on every clue.
fn assert_valid_solution(puzzle: &Grid, solution: &Grid) {
    assert!(solution.is_filled());
    Grid::from_rows(solution.to_rows()).expect("solution violates a constraint");
    for (row, cells) in puzzle.to_rows().iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            if value != 0 {
                assert_eq!(solution.get(row, col), value, "clue at r{}c{} changed", row, col);
            }
        }
    }
}

#[test]
fn propagation_finishes_a_grid_of_naked_singles() {
    let solution = grid(
        "534678912
         672195348
         198342567
         859761423
         426853791
         713924856
         961537284
         287419635
         345286179",
    );
    // blank the diagonal: each hole is the only value missing from its row
    let mut rows = solution.to_rows();
    for i in 0..9 {
        rows[i][i] = 0;
    }

    let mut solver = Solver::new(Grid::from_rows(rows).unwrap()).unwrap();
    assert_eq!(solver.propagate(), Verdict::Solved);
    assert!(solver.is_solved());
    assert_eq!(solver.grid(), &solution);
}

#[test]
fn solve_1() {
    let puzzle = grid(
        "8....7.9.
         .29..4..6
         3..2.....
         .....65..
         .174...3.
         2........
         .941...7.
         ..8......
         ....7...3",
    );
    let mut solver = Solver::new(puzzle.clone()).unwrap();
    assert_eq!(solver.solve(), Verdict::Solved);
    assert_valid_solution(&puzzle, solver.grid());
}

#[test]
fn solve_2() {
    let puzzle = grid(
        "47.3..218
         .824.17.3
         13..8..45
         .1....3..
         6.3.154..
         74..3....
         8.1...539
         ..75..1.4
         .541...7.",
    );
    let mut solver = Solver::new(puzzle.clone()).unwrap();
    assert_eq!(solver.solve(), Verdict::Solved);
    assert_valid_solution(&puzzle, solver.grid());
}

#[test]
fn search_exhausts_an_unsolvable_puzzle() {
    let puzzle = grid(
        ".1...3.6.
         ....9.2..
         548.6....
         ...9...2.
         ..7...5..
         1...5....
         ....8.45.
         ..9.4.8..
         .2.6...93",
    );
    let mut solver = Solver::new(puzzle).unwrap();
    let verdict = solver.solve();
    assert!(
        matches!(verdict, Verdict::Unsolvable | Verdict::Exhausted),
        "expected a negative verdict, got {:?}",
        verdict
    );
    assert!(!solver.is_solved());
}

#[test]
fn propagation_detects_a_contradiction() {
    // (0, 0) and (0, 1) are both forced to 5: the row rules out everything
    // but 5 and 9, and the 9 in their block rules out the 9
    let puzzle = grid(
        "..1234678
         .........
         ..9......
         .........
         .........
         .........
         .........
         .........
         .........",
    );
    let mut solver = Solver::new(puzzle).unwrap();
    assert_eq!(solver.solve(), Verdict::Unsolvable);
}

#[test]
fn contradicted_puzzle_is_rejected_up_front() {
    // (0, 3) has no legal value: 1-3 taken by the row, 4 by the column
    let rows = vec![
        vec![1, 2, 3, 0],
        vec![0, 0, 0, 4],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ];
    let err = Solver::new(Grid::from_rows(rows).unwrap()).unwrap_err();
    assert_eq!((err.row, err.col), (0, 3));
}

#[test]
fn hidden_single_places_a_value_with_alternatives() {
    // (0, 0) keeps all nine candidates, but every other cell that could
    // take a 1 in its row, column and block is ruled out by a placed 1
    let puzzle = grid(
        ".........
         ...1.....
         ......1..
         .........
         .........
         ..1......
         .........
         .1.......
         .........",
    );
    let mut solver = Solver::new(puzzle).unwrap();
    assert_eq!(solver.candidates(0, 0).len(), 9);
    assert!(solver.apply(Strategy::HiddenSingle).unwrap());
    assert_eq!(solver.grid().get(0, 0), 1);
}

#[test]
fn naked_pair_prunes_block_and_row() {
    // (0, 0) and (0, 1) are both down to {1, 2} and share a block
    let puzzle = grid(
        "....34567
         .........
         .........
         8........
         .9.......
         .........
         9........
         .8.......
         .........",
    );
    let mut solver = Solver::new(puzzle.clone()).unwrap();
    assert_eq!(solver.candidates(0, 0), &[1, 2]);
    assert_eq!(solver.candidates(0, 1), &[1, 2]);
    assert_eq!(solver.candidates(0, 2), &[1, 2, 8, 9]);
    assert_eq!(solver.candidates(0, 3), &[1, 2, 8, 9]);

    assert!(solver.apply(Strategy::NakedPair).unwrap());
    // (0, 2) shares the pair's block, (0, 3) only its row
    assert_eq!(solver.candidates(0, 2), &[8, 9]);
    assert_eq!(solver.candidates(0, 3), &[8, 9]);

    assert_eq!(solver.solve(), Verdict::Solved);
    assert_valid_solution(&puzzle, solver.grid());
}

#[test]
fn pointing_pair_prunes_the_row_outside_the_block() {
    // 1, 2 and 3 are confined to row 0 within the first block
    let puzzle = grid(
        ".........
         456......
         789......
         .........
         .........
         .........
         .........
         .........
         .........",
    );
    let mut solver = Solver::new(puzzle).unwrap();
    assert_eq!(solver.candidates(0, 0), &[1, 2, 3]);
    assert_eq!(solver.candidates(0, 3).len(), 9);

    assert!(solver.apply(Strategy::PointingPair).unwrap());
    assert_eq!(solver.candidates(0, 0), &[1, 2, 3]);
    assert_eq!(solver.candidates(0, 3), &[4, 5, 6, 7, 8, 9]);
}

#[test]
fn single_pass_leaves_cells_behind_the_scan_for_the_next() {
    // placing 2 at (0, 3) reduces (0, 0) to a naked single, but the scan
    // has already passed it
    let puzzle = grid(
        ".34.
         ..1.
         ....
         ....",
    );
    let mut solver = Solver::new(puzzle).unwrap();

    assert!(solver.apply(Strategy::NakedSingle).unwrap());
    assert_eq!(solver.grid().get(0, 3), 2);
    assert_eq!(solver.grid().get(1, 3), 3);
    assert_eq!(solver.grid().get(0, 0), 0);
    assert_eq!(solver.candidates(0, 0), &[1]);

    assert!(solver.apply(Strategy::NakedSingle).unwrap());
    assert_eq!(solver.grid().get(0, 0), 1);
}

#[test]
fn strategies_are_idempotent_at_a_stall() {
    // stalls with (1, 0) and (1, 1) interchangeable: two solutions remain
    let puzzle = grid(
        ".34.
         ..1.
         ....
         ....",
    );
    let mut solver = Solver::new(puzzle.clone()).unwrap();
    assert_eq!(solver.propagate(), Verdict::Stalled);
    assert_eq!(solver.grid().get(0, 0), 1);

    for &strategy in Strategy::ALL {
        assert!(!solver.apply(strategy).unwrap(), "{:?} found progress after a stall", strategy);
    }

    assert_eq!(solver.solve(), Verdict::Solved);
    assert_valid_solution(&puzzle, solver.grid());
}

#[test]
fn search_solves_the_empty_grid() {
    let empty = Grid::from_rows(vec![vec![0; 9]; 9]).unwrap();

    let mut first = Solver::new(empty.clone()).unwrap();
    assert_eq!(first.solve(), Verdict::Solved);
    assert_valid_solution(&empty, first.grid());

    // candidate order is fixed, so the search lands on the same solution
    let mut second = Solver::new(empty).unwrap();
    assert_eq!(second.solve(), Verdict::Solved);
    assert_eq!(first.grid(), second.grid());
}

#[test]
fn search_tries_candidates_in_ascending_order() {
    let empty = Grid::from_rows(vec![vec![0; 4]; 4]).unwrap();
    let solution = empty.clone().solve_one().unwrap();
    assert_eq!(
        solution.to_rows(),
        vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 1],
        ]
    );
}

#[test]
fn eliminations_never_drop_solution_values() {
    let puzzle = grid(
        "8....7.9.
         .29..4..6
         3..2.....
         .....65..
         .174...3.
         2........
         .941...7.
         ..8......
         ....7...3",
    );
    let solution = puzzle.clone().solve_one().unwrap();

    let mut solver = Solver::new(puzzle).unwrap();
    loop {
        for row in 0..9 {
            for col in 0..9 {
                if solver.grid().get(row, col) == 0 {
                    assert!(
                        solver.candidates(row, col).contains(&solution.get(row, col)),
                        "r{}c{} lost its solution value {}",
                        row,
                        col,
                        solution.get(row, col)
                    );
                }
            }
        }

        let mut changed = false;
        for &strategy in Strategy::ALL {
            changed |= solver.apply(strategy).unwrap();
        }
        if !changed {
            break;
        }
    }

    assert_eq!(solver.solve(), Verdict::Solved);
    assert_eq!(solver.grid(), &solution);
}

#[test]
fn solve_one_reports_failure_as_none() {
    let puzzle = grid(
        "..1234678
         .........
         ..9......
         .........
         .........
         .........
         .........
         .........
         .........",
    );
    assert_eq!(puzzle.solve_one(), None);
}
