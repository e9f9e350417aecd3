/*!
Tools for accumulating a formula.

A formula is a conjunction of clauses over a range of atoms, built by interweaving two basic methods:
- [fresh_atom](Formula::fresh_atom) (or [fresh_literal](Formula::fresh_literal)), to obtain a fresh atom (or the literal asserting a fresh atom).
- [add_clause](Formula::add_clause), to add a clause over atoms already obtained.

Validation happens when a clause is added: every literal must be non-zero and over a minted atom, and a clause which fails validation leaves no trace in the formula.

# Example

```rust
# use stoat_sat::formula::Formula;
# use stoat_sat::types::err::{self};
let mut formula = Formula::default();

let p = formula.fresh_literal().unwrap();
let q = formula.fresh_literal().unwrap();

assert!(formula.add_clause(vec![p, -q]).is_ok());

// Atom 3 has not been minted.
assert_eq!(
    formula.add_clause(vec![p, 3]),
    Err(err::ErrorKind::Formula(err::FormulaError::InvalidLiteral))
);
assert_eq!(formula.clause_count(), 1);
```
*/

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// A conjunction of clauses over a contiguous range of atoms, under construction.
#[derive(Clone, Debug, Default)]
pub struct Formula {
    /// The clauses of the formula, in order of addition.
    clauses: Vec<CClause>,

    /// The count of atoms minted, with the atoms being `1..=atom_count`.
    atom_count: Atom,
}

impl Formula {
    /// A fresh atom, distinct from every atom minted so far.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        if self.atom_count == ATOM_MAX {
            return Err(err::FormulaError::AtomsExhausted.into());
        }
        self.atom_count += 1;
        Ok(self.atom_count)
    }

    /// The literal asserting a fresh atom.
    pub fn fresh_literal(&mut self) -> Result<CLiteral, ErrorKind> {
        let atom = self.fresh_atom()?;
        Ok(CLiteral::new(atom, true))
    }

    /// `count` literals, each asserting a fresh atom.
    pub fn fresh_literals(&mut self, count: usize) -> Result<Vec<CLiteral>, ErrorKind> {
        let mut literals = Vec::with_capacity(count);
        for _ in 0..count {
            literals.push(self.fresh_literal()?);
        }
        Ok(literals)
    }

    /// The count of atoms minted.
    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }

    /// The count of clauses added.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The clauses of the formula, in order of addition.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// Whether `literal` is a literal over a minted atom.
    pub fn valid_literal(&self, literal: CLiteral) -> bool {
        literal != 0 && literal.atom() <= self.atom_count
    }

    /// Adds a clause to the formula, validating each literal.
    ///
    /// On an invalid literal the formula is left as it was, with no part of the clause stored.
    pub fn add_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        for literal in &clause {
            if !self.valid_literal(*literal) {
                return Err(err::FormulaError::InvalidLiteral.into());
            }
        }
        self.clauses.push(clause);
        Ok(())
    }

    /// Adds a clause known to be over minted atoms, without revalidation.
    pub fn adopt_clause(&mut self, clause: CClause) {
        debug_assert!(clause.iter().all(|literal| self.valid_literal(*literal)));
        self.clauses.push(clause);
    }

    /// Consumes the formula, yielding the atom count and the clauses.
    ///
    /// Used when a [Context](crate::context::Context) takes ownership of the formula as its root step.
    pub fn into_parts(self) -> (Atom, Vec<CClause>) {
        (self.atom_count, self.clauses)
    }
}
