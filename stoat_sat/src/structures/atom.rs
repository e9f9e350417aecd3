/*!
(The internal representation of) an atom, aka. a 'variable'.

Each atom is a u32 *a* such that either:
- *a* is 1, or:
- *a - 1* is an atom.

So, the atoms of a formula are [1..*n*] for some *n*, and `a - 1` addresses any structure sized to the atoms of the formula (a valuation, a scratch buffer, etc.).

Atoms are bounded above by [ATOM_MAX] so that every atom has a home in the signed representation of a [literal](crate::structures::literal), with the sign free to carry the polarity.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
- `0` is not an atom. This keeps the integer representation of literals total, as `-0` distinguishes nothing.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX as Atom;
