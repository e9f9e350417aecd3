/*!
Determines the satisfiability of the formula in a context.

# Overview

Each iteration of the loop inspects the top step of the stack and does exactly one of:

- Returns *satisfiable*, if the step holds no clauses. The model is read from the decisions on the stack.
- Returns *unsatisfiable*, if the step holds an empty clause at level 0, or the stack has emptied.
- Backtracks, if the step holds an empty clause above level 0.
- Pushes a forced step, if some clause is unit or some atom is pure.
- Pushes a free decision, otherwise.

Roughly, the loop is as diagrammed:

```none
          +-----------------+
  +-------| choose_literal  |
  |       +-----------------+
  |               ⌃
  |               | if nothing is forced
  |               |
  |               |           +-----> satisfiable, if no clauses remain
  ⌄   +-------------------+   |
--+-->| unit? pure? empty? |---+
  ⌃   +-------------------+   |
  |               |           +-----> unsatisfiable, if in conflict at level 0
  |               |
  |               | if in conflict above level 0
  |               ⌄
  |          +-----------+
  +----------| backtrack |
             +-----------+
```

Forced steps precede pure literals, pure literals precede free decisions, and each scan takes its first qualifying candidate in clause or atom order.
Together with positive-first branching this fixes the search order completely: identical formulas yield identical models.

# Example

```rust
# use stoat_sat::config::Config;
# use stoat_sat::context::Context;
# use stoat_sat::formula::Formula;
# use stoat_sat::reports::Solution;
# use stoat_sat::structures::literal::Literal;
let mut formula = Formula::default();
let literals = formula.fresh_literals(3).unwrap();
let [p, q, r] = *literals.as_slice() else {
    unreachable!()
};

formula.add_clause(vec![-p, q]).unwrap();
formula.add_clause(vec![-q, r]).unwrap();
formula.add_clause(vec![p]).unwrap();

let mut context = Context::from_formula(formula, Config::default());

match context.solve() {
    Solution::Satisfiable(model) => {
        assert!(model.value_of(p.atom()));
        assert!(model.value_of(q.atom()));
        assert!(model.value_of(r.atom()));
    }
    Solution::Unsatisfiable => unreachable!(),
}
```
*/

use crate::{
    context::{Context, ContextState},
    misc::log::targets,
    reports::Solution,
    search::Status,
    structures::valuation::Model,
};

impl Context {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// Always runs to a verdict.
    /// On a repeated call the verdict is returned from the recorded state, with a satisfiable model re-read from the surviving stack.
    pub fn solve(&mut self) -> Solution<Model> {
        match self.state {
            ContextState::Satisfiable => return Solution::Satisfiable(self.stack_model()),
            ContextState::Unsatisfiable => return Solution::Unsatisfiable,
            ContextState::Input => {}
        }

        loop {
            self.counters.iterations += 1;

            let Some(step) = self.steps.last() else {
                // Backtracking exhausted the stack.
                self.state = ContextState::Unsatisfiable;
                return Solution::Unsatisfiable;
            };

            match step.status() {
                Status::Satisfied => {
                    log::info!(
                        "Satisfiable after {} iterations",
                        self.counters.iterations
                    );
                    self.state = ContextState::Satisfiable;
                    return Solution::Satisfiable(self.stack_model());
                }

                Status::Conflict => {
                    self.counters.conflicts += 1;

                    if step.level() == 0 {
                        self.state = ContextState::Unsatisfiable;
                        return Solution::Unsatisfiable;
                    }
                    self.backtrack();
                }

                Status::Open => {
                    let free;
                    let literal = if let Some(unit) = step.first_unit() {
                        self.counters.propagations += 1;
                        log::trace!(target: targets::PROPAGATION, "Unit {unit}");
                        free = false;
                        unit
                    } else {
                        let pure = match self.config.pure_literals {
                            true => step.pure_literal(&mut self.occurrence),
                            false => None,
                        };
                        match pure {
                            Some(pure) => {
                                self.counters.pure_literals += 1;
                                log::trace!(target: targets::PURE, "Pure {pure}");
                                free = false;
                                pure
                            }
                            None => {
                                let choice =
                                    Self::choose_literal(&self.steps, &mut self.used_atoms);
                                self.counters.decisions += 1;
                                log::trace!(
                                    target: targets::DECISION,
                                    "Decided {choice} at level {}",
                                    step.level() + 1
                                );
                                free = true;
                                choice
                            }
                        }
                    };

                    let next = step.reduce(literal, free);
                    self.steps.push(next);
                }
            }
        }
    }

    /// The model witnessed by the current stack, if the context is satisfiable.
    pub fn model(&self) -> Option<Model> {
        match self.state {
            ContextState::Satisfiable => Some(self.stack_model()),
            _ => None,
        }
    }

    /// The model read from the decisions on the stack.
    fn stack_model(&self) -> Model {
        Model::from_steps(self.atom_count, &self.steps)
    }
}
