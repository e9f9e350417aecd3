/*!
Free decisions.

When no literal is forced the search guesses: the positive literal of the lowest atom not yet decided anywhere on the stack.
Positive first is a fixed convention, with the negative polarity reserved for [backtracking](crate::procedures::backtrack).

The decided atoms are marked in a scratch buffer owned by the context, so choosing allocates nothing.

Note, an open step always leaves some atom undecided: applying a literal removes its atom from every clause, so the open clauses of a step mention undecided atoms only.
*/

use crate::{
    context::Context,
    search::Step,
    structures::literal::{CLiteral, Literal},
};

impl Context {
    /// The positive literal of the lowest atom without a decision on the stack.
    ///
    /// An associated function over the relevant parts of a context, as the caller holds a borrow of the step stack.
    pub(crate) fn choose_literal(steps: &[Step], used_atoms: &mut [bool]) -> CLiteral {
        used_atoms.fill(false);

        for step in steps {
            if let Some(decision) = step.decision() {
                used_atoms[decision.index()] = true;
            }
        }

        for (index, used) in used_atoms.iter().enumerate() {
            if !used {
                return CLiteral::new(index as u32 + 1, true);
            }
        }

        unreachable!("an open step entails an undecided atom")
    }
}
