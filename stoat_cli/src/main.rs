//! A sudoku solver over [stoat_sat]'s finite-domain layer.
//!
//! Reads a puzzle from standard input (or a file given as an argument), posts one domain per cell with distinctness over rows, columns, and boxes, and prints the solved grid, or `Unsolveable`.
//!
//! Exit codes: `0` on a solved puzzle, `1` on an unsolvable puzzle, `65` on unreadable input.

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{io::Read, path::PathBuf};

use clap::{value_parser, Arg, ArgAction, Command};

use stoat_sat::{
    domains::{DomainContext, DomainId},
    reports::Solution,
};

mod grid;
use grid::Grid;

fn cli() -> Command {
    Command::new("stoat_cli")
        .about("Solves sudoku puzzles, given as nine lines of nine characters (digits and '.')")
        .arg(
            Arg::new("puzzle")
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("A file containing the puzzle. Standard input is read otherwise."),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .action(ArgAction::SetTrue)
                .help("Print search counters to stderr after the solve."),
        )
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = cli().get_matches();

    let input = match matches.get_one::<PathBuf>("puzzle") {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("Unreadable puzzle {}: {e}", path.display());
                std::process::exit(65);
            }
        },
        None => {
            let mut input = String::new();
            match std::io::stdin().read_to_string(&mut input) {
                Ok(_) => input,
                Err(e) => {
                    eprintln!("Unreadable puzzle: {e}");
                    std::process::exit(65);
                }
            }
        }
    };

    let puzzle = match grid::parse(&input) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Unreadable puzzle: {e}");
            std::process::exit(65);
        }
    };

    let mut context = DomainContext::default();
    let cells = encode(&mut context, &puzzle);

    let solution = context.solve();

    if matches.get_flag("stats") {
        eprintln!("{:?}", context.counters());
    }

    match solution {
        Solution::Satisfiable(model) => {
            let mut solved: Grid = [[0; 9]; 9];
            for (row, line) in cells.iter().enumerate() {
                for (col, cell) in line.iter().enumerate() {
                    solved[row][col] = model.value_of(*cell) as u8;
                }
            }
            print!("{}", grid::render(&solved));
        }
        Solution::Unsatisfiable => {
            println!("Unsolveable");
            std::process::exit(1);
        }
    }
}

/// Posts the sudoku rules and the given cells of `puzzle`, returning the domain of each cell.
fn encode(context: &mut DomainContext, puzzle: &Grid) -> Vec<Vec<DomainId>> {
    let cells: Vec<Vec<DomainId>> = (0..9)
        .map(|_| {
            (0..9)
                .map(|_| {
                    context
                        .new_domain(1, 9)
                        .expect("the cells of a grid are well within the atom limit")
                })
                .collect()
        })
        .collect();

    for row in &cells {
        context
            .distinct(row)
            .expect("cell domains are uniform");
    }

    for col in 0..9 {
        let column: Vec<DomainId> = cells.iter().map(|row| row[col]).collect();
        context
            .distinct(&column)
            .expect("cell domains are uniform");
    }

    for box_row in 0..3 {
        for box_col in 0..3 {
            let mut the_box = Vec::with_capacity(9);
            for row in 0..3 {
                for col in 0..3 {
                    the_box.push(cells[box_row * 3 + row][box_col * 3 + col]);
                }
            }
            context
                .distinct(&the_box)
                .expect("cell domains are uniform");
        }
    }

    for (row, line) in puzzle.iter().enumerate() {
        for (col, &given) in line.iter().enumerate() {
            if given != 0 {
                context
                    .equal_to_constant(cells[row][col], given as i32)
                    .expect("givens are validated during parsing");
            }
        }
    }

    cells
}
