//! Shared fixtures for the integration suites.

pub mod general {
    use stoat_sat::{
        formula::Formula,
        structures::{clause::CClause, valuation::Model},
    };

    /// A pigeonhole formula: `pigeons` atoms groups over `holes` holes, each pigeon in some hole, no hole with two pigeons.
    ///
    /// Unsatisfiable exactly when `pigeons > holes`.
    pub fn pigeonhole(pigeons: usize, holes: usize) -> Formula {
        let mut formula = Formula::default();

        // in_hole[p][h] is minted row by row, so pigeon p hole h is atom p * holes + h + 1.
        let mut in_hole = Vec::with_capacity(pigeons);
        for _ in 0..pigeons {
            in_hole.push(formula.fresh_literals(holes).unwrap());
        }

        for pigeon in &in_hole {
            formula.add_clause(pigeon.clone()).unwrap();
        }

        for hole in 0..holes {
            for (position, first) in in_hole.iter().enumerate() {
                for second in &in_hole[position + 1..] {
                    formula
                        .add_clause(vec![-first[hole], -second[hole]])
                        .unwrap();
                }
            }
        }

        formula
    }

    /// Whether every clause holds on the model.
    pub fn satisfies_all(model: &Model, clauses: &[CClause]) -> bool {
        clauses.iter().all(|clause| model.satisfies(clause))
    }
}

pub mod sudoku {
    use stoat_sat::{
        domains::{DomainContext, DomainId},
        reports::Solution,
    };

    /// A grid of cells, with `0` used for the absence of a value.
    pub type Grid = [[u8; 9]; 9];

    /// An easy puzzle, solvable by propagation alone.
    pub const EASY: Grid = [
        [0, 0, 3, 0, 2, 0, 6, 0, 0],
        [9, 0, 0, 3, 0, 5, 0, 0, 1],
        [0, 0, 1, 8, 0, 6, 4, 0, 0],
        [0, 0, 8, 1, 0, 2, 9, 0, 0],
        [7, 0, 0, 0, 0, 0, 0, 0, 8],
        [0, 0, 6, 7, 0, 8, 2, 0, 0],
        [0, 0, 2, 6, 0, 9, 5, 0, 0],
        [8, 0, 0, 2, 0, 3, 0, 0, 9],
        [0, 0, 5, 0, 1, 0, 3, 0, 0],
    ];

    /// Solves a puzzle over the finite-domain layer, or returns None when the puzzle has no solution.
    pub fn solve(puzzle: &Grid) -> Option<Grid> {
        let mut context = DomainContext::default();

        let cells: Vec<Vec<DomainId>> = (0..9)
            .map(|_| (0..9).map(|_| context.new_domain(1, 9).unwrap()).collect())
            .collect();

        for row in &cells {
            context.distinct(row).unwrap();
        }

        for col in 0..9 {
            let column: Vec<DomainId> = cells.iter().map(|row| row[col]).collect();
            context.distinct(&column).unwrap();
        }

        for box_row in 0..3 {
            for box_col in 0..3 {
                let mut the_box = Vec::with_capacity(9);
                for row in 0..3 {
                    for col in 0..3 {
                        the_box.push(cells[box_row * 3 + row][box_col * 3 + col]);
                    }
                }
                context.distinct(&the_box).unwrap();
            }
        }

        for (row, line) in puzzle.iter().enumerate() {
            for (col, &given) in line.iter().enumerate() {
                if given != 0 {
                    context
                        .equal_to_constant(cells[row][col], given as i32)
                        .unwrap();
                }
            }
        }

        match context.solve() {
            Solution::Satisfiable(model) => {
                let mut solved: Grid = [[0; 9]; 9];
                for (row, line) in cells.iter().enumerate() {
                    for (col, cell) in line.iter().enumerate() {
                        solved[row][col] = model.value_of(*cell) as u8;
                    }
                }
                Some(solved)
            }
            Solution::Unsatisfiable => None,
        }
    }

    /// Whether `solution` is a completed grid with every row, column, and box containing 1..=9.
    pub fn valid_solution(solution: &Grid) -> bool {
        let complete = |cells: &[u8]| (1..=9).all(|value| cells.contains(&value));

        for row in solution {
            if !complete(row) {
                return false;
            }
        }

        for col in 0..9 {
            let column: Vec<u8> = solution.iter().map(|row| row[col]).collect();
            if !complete(&column) {
                return false;
            }
        }

        for box_row in 0..3 {
            for box_col in 0..3 {
                let mut the_box = Vec::with_capacity(9);
                for row in 0..3 {
                    for col in 0..3 {
                        the_box.push(solution[box_row * 3 + row][box_col * 3 + col]);
                    }
                }
                if !complete(&the_box) {
                    return false;
                }
            }
        }

        true
    }

    /// Whether `solution` agrees with every given cell of `puzzle`.
    pub fn respects_givens(puzzle: &Grid, solution: &Grid) -> bool {
        puzzle.iter().zip(solution).all(|(puzzle_row, solved_row)| {
            puzzle_row
                .iter()
                .zip(solved_row)
                .all(|(&given, &solved)| given == 0 || given == solved)
        })
    }
}
