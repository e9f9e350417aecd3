//! A latin square: an n × n grid where every row and every column contains each of 1..=n.
//!
//! Each cell is a domain over [1, n], with distinctness over rows and columns.
//! The first row is pinned to 1..=n to cut the symmetries down.

use stoat_sat::{
    domains::{DomainContext, DomainId},
    reports::Solution,
};

const N: usize = 5;

fn main() {
    let mut context = DomainContext::default();

    let cells: Vec<Vec<DomainId>> = (0..N)
        .map(|_| {
            (0..N)
                .map(|_| context.new_domain(1, N as i32).unwrap())
                .collect()
        })
        .collect();

    for row in &cells {
        context.distinct(row).unwrap();
    }

    for col in 0..N {
        let column: Vec<DomainId> = cells.iter().map(|row| row[col]).collect();
        context.distinct(&column).unwrap();
    }

    for (col, cell) in cells[0].iter().enumerate() {
        context.equal_to_constant(*cell, col as i32 + 1).unwrap();
    }

    match context.solve() {
        Solution::Satisfiable(model) => {
            for row in &cells {
                let values: Vec<String> = row
                    .iter()
                    .map(|cell| model.value_of(*cell).to_string())
                    .collect();
                println!("{}", values.join(" "));
            }
        }
        Solution::Unsatisfiable => println!("No latin square of order {N}, which would be news."),
    }
}
