/*!
Error types used in the library.

- All of these are raised eagerly, at the call which supplied the offending input.
- None of these are raised by a solve. A solve always runs to a verdict.

Names of the error enums overlap with the modules they belong to, and so throughout the library `err::{self}` is used to prefix uses of the types with `err::`.
*/

/// A union of varied error kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error when accumulating a formula.
    Formula(FormulaError),

    /// An error when posting to the finite-domain layer.
    Domain(DomainError),
}

/// Noted errors when accumulating a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// A clause mentions a literal which is zero, or whose atom has not been minted.
    InvalidLiteral,

    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Noted errors when posting to the finite-domain layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DomainError {
    /// A domain whose lower bound exceeds its upper bound.
    InvalidRange,

    /// A distinctness constraint over domains whose bounds disagree.
    InvalidSort,

    /// An equality constraint whose constant falls outside the domain.
    InvalidConstant,
}

impl From<DomainError> for ErrorKind {
    fn from(e: DomainError) -> Self {
        ErrorKind::Domain(e)
    }
}
