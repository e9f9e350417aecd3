//! A small solve, with the clauses built by hand.

use stoat_sat::{
    config::Config,
    context::Context,
    formula::Formula,
    reports::Solution,
    structures::clause::Clause,
};

fn main() {
    let mut formula = Formula::default();

    let p = formula.fresh_literal().unwrap();
    let q = formula.fresh_literal().unwrap();
    let r = formula.fresh_literal().unwrap();

    let clauses = vec![vec![p, q], vec![-p, q], vec![-q, r], vec![-r, -p]];
    for clause in clauses {
        println!("C {}", clause.as_dimacs(false));
        formula.add_clause(clause).unwrap();
    }

    let mut context = Context::from_formula(formula, Config::default());

    match context.solve() {
        Solution::Satisfiable(model) => {
            println!("s SATISFIABLE");
            for atom in 1..=model.atom_count() {
                match model.value_of(atom) {
                    true => print!("{atom} "),
                    false => print!("-{atom} "),
                }
            }
            println!();
        }
        Solution::Unsatisfiable => println!("s UNSATISFIABLE"),
    }
}
