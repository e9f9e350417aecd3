//! A library for deciding the satisfiability of boolean formulas written in conjunctive normal form, with a finite-domain layer on top.
//!
//! stoat_sat pairs a plain search-based satisfiability procedure with a small compiler from integer-valued variables to clauses.
//! The search is the familiar interleaving of unit propagation, pure literal elimination, and chronological backtracking over free decisions.
//! No clauses are learnt, and no part of the clause database is shared between points of the search.
//! The result is a solver which is easy to inspect, deterministic by construction, and (for its design) honest about cost.
//!
//! # Orientation
//!
//! A solve is viewed in terms of a stack of [steps](crate::search), where each step holds the clauses still open at that point of the search together with the decision which produced the step.
//! Notably:
//! - A formula is accumulated in a [Formula](crate::formula::Formula), which mints atoms and stores clauses.
//! - A [Context](crate::context::Context) consumes a formula, with the formula's clauses becoming the root step.
//! - Each decision, whether forced or free, reduces the top step to a fresh step with the decision applied.
//! - On satisfaction, a [Model](crate::structures::valuation::Model) is read from the decisions on the stack.
//!
//! Useful starting points:
//! - The high-level [solve procedure](crate::procedures::solve) for the dynamics of a solve.
//! - The [structures] for the representation of atoms, literals, and clauses.
//! - The [domains](crate::domains) module for the finite-domain layer.
//!
//! # Examples
//!
//! + Satisfiability of a pair of clauses, read through a model.
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::formula::Formula;
//! # use stoat_sat::reports::Solution;
//! # use stoat_sat::structures::literal::Literal;
//! let mut formula = Formula::default();
//! let p = formula.fresh_literal().unwrap();
//! let q = formula.fresh_literal().unwrap();
//!
//! // p → q and q → p, so any model values p and q alike.
//! formula.add_clause(vec![-p, q]).unwrap();
//! formula.add_clause(vec![p, -q]).unwrap();
//!
//! let mut context = Context::from_formula(formula, Config::default());
//!
//! match context.solve() {
//!     Solution::Satisfiable(model) => {
//!         assert_eq!(model.value_of(p.atom()), model.value_of(q.atom()));
//!     }
//!     Solution::Unsatisfiable => unreachable!(),
//! }
//! ```
//!
//! + A pair of integer-valued variables which may not agree.
//!
//! ```rust
//! # use stoat_sat::domains::DomainContext;
//! # use stoat_sat::reports::Solution;
//! let mut context = DomainContext::default();
//!
//! let a = context.new_domain(1, 3).unwrap();
//! let b = context.new_domain(1, 3).unwrap();
//!
//! context.distinct(&[a, b]).unwrap();
//! context.equal_to_constant(a, 2).unwrap();
//!
//! match context.solve() {
//!     Solution::Satisfiable(model) => {
//!         assert_eq!(model.value_of(a), 2);
//!         assert_ne!(model.value_of(b), 2);
//!     }
//!     Solution::Unsatisfiable => unreachable!(),
//! }
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made at the interesting points of a solve, under targets listed in [misc::log].
//! No log implementation is provided by the library.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) decisions taken during a solve can be filtered with `RUST_LOG=decision …`.

pub mod config;
pub mod context;
pub mod domains;
pub mod formula;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod search;
pub mod structures;
pub mod types;
