/*!
Steps, the nodes of the search tree.

A step holds the clauses still open at one point of the search, together with the decision whose application produced those clauses.
A solve maintains a stack of steps, rooted in the clauses of the formula.

Each step owns its clauses outright. Nothing is shared with the step below, so:
- Reducing a step allocates a fresh clause set with the decision applied.
- Backtracking is dropping steps, and dropping a step releases its clauses.

This trades memory for simplicity. The cost is noted, deliberate, and paid per decision.

# Invariants

- The root step carries no decision, is at level 0, and is not free.
- A step produced by [reduce](Step::reduce) with `free` set is one level above its parent; otherwise it shares its parent's level.
- No clause of a step mentions the atom of any decision on the path to the step.
*/

use crate::structures::{
    clause::{CClause, Clause, Reduction},
    literal::CLiteral,
};

/// The classification of a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// No clauses remain, so every clause of the formula holds.
    Satisfied,

    /// Some clause is empty, so no extension of the decisions made can satisfy the formula.
    Conflict,

    /// Clauses remain and none is empty.
    Open,
}

/// One node of the search tree: a clause set, and the decision which produced it.
pub struct Step {
    /// The clauses still open at this point of the search.
    clauses: Vec<CClause>,

    /// The literal whose application produced this step, absent for the root.
    decision: Option<CLiteral>,

    /// The count of free decisions on the path to this step.
    level: usize,

    /// Whether the decision was free, rather than forced by a unit clause or a pure literal.
    free: bool,
}

impl Step {
    /// The root step, holding the clauses of a formula with no decision applied.
    pub fn root(clauses: Vec<CClause>) -> Self {
        Step {
            clauses,
            decision: None,
            level: 0,
            free: false,
        }
    }

    /// The decision whose application produced this step, absent for the root.
    pub fn decision(&self) -> Option<CLiteral> {
        self.decision
    }

    /// The count of free decisions on the path to this step.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Whether the decision of this step was free.
    pub fn free(&self) -> bool {
        self.free
    }

    /// The clauses still open at this step.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The classification of the step: satisfied, conflicting, or open.
    pub fn status(&self) -> Status {
        if self.clauses.is_empty() {
            return Status::Satisfied;
        }
        match self.clauses.iter().any(|clause| clause.is_empty()) {
            true => Status::Conflict,
            false => Status::Open,
        }
    }

    /// The step which follows this step by applying `literal`.
    ///
    /// Every clause is reduced by the literal: satisfied clauses are dropped, and the rest are copied with the literal's atom removed.
    pub fn reduce(&self, literal: CLiteral, free: bool) -> Step {
        let mut clauses = Vec::with_capacity(self.clauses.len());
        for clause in &self.clauses {
            match clause.reduce(literal) {
                Reduction::Satisfied => {}
                Reduction::Reduced(reduced) => clauses.push(reduced),
            }
        }
        Step {
            clauses,
            decision: Some(literal),
            level: match free {
                true => self.level + 1,
                false => self.level,
            },
            free,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_status() {
        assert_eq!(Step::root(vec![]).status(), Status::Satisfied);
        assert_eq!(Step::root(vec![vec![]]).status(), Status::Conflict);
        assert_eq!(Step::root(vec![vec![1]]).status(), Status::Open);
    }

    #[test]
    fn reduction_levels() {
        let root = Step::root(vec![vec![1, 2], vec![-1, 2], vec![-2, 3]]);

        let forced = root.reduce(2, false);
        assert_eq!(forced.level(), 0);
        assert_eq!(forced.clauses(), &[vec![3]]);

        let free = root.reduce(1, true);
        assert_eq!(free.level(), 1);
        assert_eq!(free.clauses(), &[vec![2], vec![-2, 3]]);
    }
}
