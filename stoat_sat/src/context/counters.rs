/// Counts for various things which count, roughly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    /// The total number of iterations through a solve.
    pub iterations: usize,

    /// A count of all free decisions made.
    pub decisions: usize,

    /// A count of all unit clauses propagated.
    pub propagations: usize,

    /// A count of all pure literals eliminated.
    pub pure_literals: usize,

    /// A count of every conflict seen during a solve.
    pub conflicts: usize,

    /// A count of returns to an earlier free decision following a conflict.
    pub backtracks: usize,
}
