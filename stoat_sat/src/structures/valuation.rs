//! Models, aka. total valuations of the atoms of a formula.
//!
//! A model is read from the decision stack of a completed solve: every decision, forced or free, values the atom of its literal to match the literal's polarity.
//! Atoms left undecided (atoms whose clauses were all satisfied along the way, or atoms occurring in no clause) take the value false.
//!
//! A model owns its assignments, so remains valid after the context which produced it is dropped.

use crate::{
    search::Step,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::Literal,
    },
};

/// A total valuation of the atoms of a formula, indexed by atom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    /// The value of each atom, with atom *a* at index *a* - 1.
    assignments: Vec<bool>,
}

impl Model {
    /// A model read from a stack of steps, over `atom_count` atoms.
    ///
    /// Atoms without a decision on the stack are valued false.
    pub(crate) fn from_steps(atom_count: Atom, steps: &[Step]) -> Self {
        let mut assignments = vec![false; atom_count as usize];
        for step in steps {
            if let Some(decision) = step.decision() {
                assignments[decision.index()] = decision.polarity();
            }
        }
        Model { assignments }
    }

    /// The value of `atom` on the model.
    ///
    /// `atom` must have been minted by the formula the model was built for.
    pub fn value_of(&self, atom: Atom) -> bool {
        self.assignments[(atom - 1) as usize]
    }

    /// The number of atoms valued by the model.
    pub fn atom_count(&self) -> Atom {
        self.assignments.len() as Atom
    }

    /// Whether some literal of `clause` holds on the model.
    pub fn satisfies(&self, clause: &CClause) -> bool {
        clause
            .iter()
            .any(|literal| self.value_of(literal.atom()) == literal.polarity())
    }
}
