/*!
Unit propagation.

A unit clause holds exactly one literal, and every satisfying extension of the decisions made must include that literal.
So, the literal may be applied without a choice being made, and without a level being consumed.

The scan takes the first unit clause in clause order.
Clause order is insertion order, preserved by reduction, which keeps the whole search deterministic.
*/

use crate::{
    search::Step,
    structures::{clause::Clause, literal::CLiteral},
};

impl Step {
    /// The literal of the first unit clause of the step, in clause order.
    pub fn first_unit(&self) -> Option<CLiteral> {
        self.clauses().iter().find_map(|clause| clause.unit())
    }
}
