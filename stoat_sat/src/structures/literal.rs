//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical representation of a literal is a signed non-zero integer whose magnitude is the atom and whose sign is the polarity.
//! So, the literal asserting atom `3` is `3`, and the literal denying atom `3` is `-3`.
//!
//! An example:
//!
//! ```rust
//! # use stoat_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.negate(), CLiteral::new(79, false));
//! assert_eq!(-literal, literal.negate());
//! ```
//!
//! As the representation is an integer, `0` is expressible but is *not* a literal.
//! Operations which accept literals from outside the library guard against zero (see [Formula::add_clause](crate::formula::Formula::add_clause)); operations internal to the library rely on the guard.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a polarity.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The atom of the literal, offset to index a structure sized to the atoms of a formula.
    fn index(&self) -> usize;

    /// Whether the literal and `other` are made from the same atom, with any polarities.
    fn same_atom(&self, other: &Self) -> bool;
}

/// The canonical representation of a literal, with sign indicating polarity.
pub type CLiteral = i32;

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn index(&self) -> usize {
        (self.unsigned_abs() - 1) as usize
    }

    fn same_atom(&self, other: &Self) -> bool {
        self.unsigned_abs() == other.unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_involutes() {
        let literal = CLiteral::new(3, true);

        assert_eq!(literal, literal.negate().negate());
        assert!(literal.same_atom(&literal.negate()));
        assert_ne!(literal.polarity(), literal.negate().polarity());
    }

    #[test]
    fn atoms_survive_polarity() {
        let atom: Atom = 11;

        assert_eq!(CLiteral::new(atom, true).atom(), atom);
        assert_eq!(CLiteral::new(atom, false).atom(), atom);
        assert_eq!(CLiteral::new(atom, false).index(), 10);
    }
}
