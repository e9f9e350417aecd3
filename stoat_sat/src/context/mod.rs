//! The context, within which solves take place.
//!
//! A context consumes a [Formula](crate::formula::Formula): the formula's clauses become the root [Step](crate::search::Step) of the search, and the formula's atom range sizes the scratch buffers reused across the solve.
//!
//! # Example
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::formula::Formula;
//! # use stoat_sat::reports::{Report, Solution};
//! let mut formula = Formula::default();
//! let p = formula.fresh_literal().unwrap();
//! let q = formula.fresh_literal().unwrap();
//!
//! formula.add_clause(vec![p, q]).unwrap();
//! formula.add_clause(vec![-p]).unwrap();
//!
//! let mut context = Context::from_formula(formula, Config::default());
//! assert_eq!(context.report(), Report::Unknown);
//!
//! let solution = context.solve();
//! assert_eq!(context.report(), Report::Satisfiable);
//!
//! match solution {
//!     Solution::Satisfiable(model) => {
//!         assert!(!model.value_of(1));
//!         assert!(model.value_of(2));
//!     }
//!     Solution::Unsatisfiable => unreachable!(),
//! }
//! ```

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    formula::Formula,
    procedures::pure::Occurrence,
    reports::Report,
    search::Step,
    structures::atom::Atom,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// A formula has been adopted and no verdict has been reached.
    Input,

    /// The formula is satisfiable, with a witnessing decision stack.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context, holding the search stack and the scratch space of a solve.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a solve.
    pub counters: Counters,

    /// The status of the context.
    pub state: ContextState,

    /// The stack of steps, rooted in the clauses of the adopted formula.
    pub(crate) steps: Vec<Step>,

    /// The count of atoms of the adopted formula.
    pub(crate) atom_count: Atom,

    /// Scratch for free decisions: atoms already decided somewhere on the stack.
    pub(crate) used_atoms: Vec<bool>,

    /// Scratch for the pure literal scan: the polarities with which each atom occurs.
    pub(crate) occurrence: Vec<Occurrence>,
}

impl Context {
    /// A context which adopts `formula`, ready to solve.
    pub fn from_formula(formula: Formula, config: Config) -> Self {
        let (atom_count, clauses) = formula.into_parts();
        Context {
            config,
            counters: Counters::default(),
            state: ContextState::Input,
            steps: vec![Step::root(clauses)],
            atom_count,
            used_atoms: vec![false; atom_count as usize],
            occurrence: vec![Occurrence::Never; atom_count as usize],
        }
    }

    /// The count of atoms of the adopted formula.
    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }

    /// The count of free decisions on the current path.
    pub fn level(&self) -> usize {
        match self.steps.last() {
            Some(step) => step.level(),
            None => 0,
        }
    }

    /// A high-level report on the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }
}
