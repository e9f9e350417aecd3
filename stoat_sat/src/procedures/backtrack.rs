/*!
Chronological backtracking.

On conflict the search returns to the most recent free decision whose other polarity is untried, by popping steps from the stack.

A free decision has its other polarity untried exactly when its recorded decision is positive: free decisions are made positive first, and the step pushed on flipping carries the negative literal, so is passed over if popped later.
Forced steps (units, pures) never consume a flip, and are simply popped.

If no step qualifies the stack empties, and the solve loop reads the empty stack as exhaustion of the search.
*/

use crate::{context::Context, misc::log::targets, structures::literal::Literal};

impl Context {
    /// Pops the stack to the most recent free positive decision, and pushes the step applying its negation.
    ///
    /// May empty the stack, when every free decision has had both polarities tried.
    pub(crate) fn backtrack(&mut self) {
        self.counters.backtracks += 1;

        while let Some(step) = self.steps.pop() {
            let Some(decision) = step.decision() else {
                // The root has been popped, and the stack is empty.
                continue;
            };

            if step.free() && decision.polarity() {
                let flip = decision.negate();
                log::trace!(target: targets::BACKTRACK, "Flip {decision} to {flip}");

                let next = match self.steps.last() {
                    Some(top) => top.reduce(flip, true),
                    None => unreachable!("the root step records no decision"),
                };
                self.steps.push(next);
                return;
            }
        }

        log::trace!(target: targets::BACKTRACK, "Search exhausted");
    }
}
