/*!
The finite-domain layer: integer-valued variables compiled to clauses.

A domain is a contiguous range of integers `[from, to]`, represented one-hot: one fresh atom per value, with clauses requiring that exactly one of the atoms holds.
On this representation the supported constraints compile directly:

- `distinct` over domains with equal bounds: for each value, no two domains may both take it (a binary clause per value per pair).
- Equality with a constant: a unit clause on the value's atom.

One-hot scales poorly for wide domains, but keeps both the compilation and the decoding of a model trivial.

A [DomainId] is a plain handle into the context which minted it.
Handles from one context are not meaningful to another, and a call to [solve](DomainContext::solve) invalidates the handles minted before it: their values live on in the returned model, while the context starts clean.

# Example

Three variables over `[1, 3]`, pairwise distinct, with the middle one pinned.

```rust
# use stoat_sat::domains::DomainContext;
# use stoat_sat::reports::Solution;
let mut context = DomainContext::default();

let low = context.new_domain(1, 3).unwrap();
let mid = context.new_domain(1, 3).unwrap();
let high = context.new_domain(1, 3).unwrap();

context.distinct(&[low, mid, high]).unwrap();
context.equal_to_constant(mid, 2).unwrap();

match context.solve() {
    Solution::Satisfiable(model) => {
        assert_eq!(model.value_of(mid), 2);
        let pair = [model.value_of(low), model.value_of(high)];
        assert!(pair.contains(&1) && pair.contains(&3));
    }
    Solution::Unsatisfiable => unreachable!(),
}
```
*/

use crate::{
    config::Config,
    context::{Context, Counters},
    formula::Formula,
    misc::log::targets,
    reports::Solution,
    structures::{
        atom::ATOM_MAX,
        literal::{CLiteral, Literal},
        valuation::Model,
    },
    types::err::{self, ErrorKind},
};

/// A handle to a domain, minted by [new_domain](DomainContext::new_domain) and invalidated by the next [solve](DomainContext::solve).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DomainId(u32);

/// The representation of a domain: one positive literal per value, lowest value first.
struct DomainInfo {
    /// The literal asserting `offset + i` is at index `i`.
    literals: Vec<CLiteral>,

    /// The lowest value of the domain.
    offset: i32,
}

impl DomainInfo {
    /// The count of values in the domain.
    fn size(&self) -> usize {
        self.literals.len()
    }

    /// The value of the domain on `model`.
    ///
    /// Panics if the one-hot clauses posted for the domain do not constrain the model, as happens if the model was obtained before the domain was created, or from some unrelated context.
    fn decode(&self, model: &Model) -> i32 {
        let mut value = None;
        for (index, literal) in self.literals.iter().enumerate() {
            if model.value_of(literal.atom()) {
                assert!(
                    value.is_none(),
                    "two values hold on a model of a one-hot domain"
                );
                value = Some(self.offset + index as i32);
            }
        }
        match value {
            Some(value) => value,
            None => panic!("no value holds on a model of a one-hot domain"),
        }
    }
}

/// The values of every domain of a context, read from a model.
///
/// Values are decoded once, when the solution is built, so reads are constant time.
/// The boolean model remains available through [assignments](DomainModel::assignments).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainModel {
    /// The value of each domain, indexed as the domains were minted.
    values: Vec<i32>,

    /// The boolean model the values were decoded from.
    model: Model,
}

impl DomainModel {
    /// The value of `domain` on the model.
    pub fn value_of(&self, domain: DomainId) -> i32 {
        self.values[domain.0 as usize]
    }

    /// The underlying boolean model.
    pub fn assignments(&self) -> &Model {
        &self.model
    }
}

/// A context for accumulating domains and constraints over them.
///
/// Clauses compiled from constraints land in an internal [Formula].
/// A call to [solve](DomainContext::solve) consumes the formula together with the domains minted so far, so the context may be reused from a clean slate.
#[derive(Default)]
pub struct DomainContext {
    /// The formula the constraints compile to.
    formula: Formula,

    /// The representation of each domain minted.
    domains: Vec<DomainInfo>,

    /// The configuration handed to each solve.
    config: Config,

    /// Counters from the most recent solve.
    counters: Counters,
}

impl DomainContext {
    /// A context which hands `config` to each solve.
    pub fn with_config(config: Config) -> Self {
        DomainContext {
            config,
            ..Default::default()
        }
    }

    /// A fresh domain over the values `[from, to]`, inclusive at both ends.
    ///
    /// Posts the one-hot representation: some value holds, and no two values hold together.
    pub fn new_domain(&mut self, from: i32, to: i32) -> Result<DomainId, ErrorKind> {
        if from > to {
            return Err(err::DomainError::InvalidRange.into());
        }

        let size = to as i64 - from as i64 + 1;
        if size > ATOM_MAX as i64 {
            return Err(err::FormulaError::AtomsExhausted.into());
        }
        let size = size as usize;
        let literals = self.formula.fresh_literals(size)?;

        // Some value holds…
        self.formula.adopt_clause(literals.clone());

        // …and no two values hold together.
        for i in 0..size {
            for j in i + 1..size {
                self.formula
                    .adopt_clause(vec![literals[i].negate(), literals[j].negate()]);
            }
        }

        let id = DomainId(self.domains.len() as u32);
        log::trace!(target: targets::DOMAINS, "Domain {id:?} over [{from}, {to}]");

        self.domains.push(DomainInfo {
            literals,
            offset: from,
        });
        Ok(id)
    }

    /// Requires the given domains to take pairwise distinct values.
    ///
    /// The domains must agree on their bounds.
    /// For each value, a binary clause per pair of domains forbids both taking the value.
    pub fn distinct(&mut self, domains: &[DomainId]) -> Result<(), ErrorKind> {
        let Some((first, rest)) = domains.split_first() else {
            return Ok(());
        };

        let offset = self.domains[first.0 as usize].offset;
        let size = self.domains[first.0 as usize].size();
        for domain in rest {
            let info = &self.domains[domain.0 as usize];
            if info.offset != offset || info.size() != size {
                return Err(err::DomainError::InvalidSort.into());
            }
        }

        for index in 0..size {
            for (position, left) in domains.iter().enumerate() {
                for right in &domains[position + 1..] {
                    let left_takes = self.domains[left.0 as usize].literals[index];
                    let right_takes = self.domains[right.0 as usize].literals[index];
                    self.formula
                        .adopt_clause(vec![left_takes.negate(), right_takes.negate()]);
                }
            }
        }

        Ok(())
    }

    /// Requires `domain` to take the value `constant`.
    ///
    /// The constant must lie within the domain's bounds.
    pub fn equal_to_constant(
        &mut self,
        domain: DomainId,
        constant: i32,
    ) -> Result<(), ErrorKind> {
        let info = &self.domains[domain.0 as usize];
        if constant < info.offset || constant > info.offset + (info.size() as i32 - 1) {
            return Err(err::DomainError::InvalidConstant.into());
        }

        let literal = info.literals[(constant - info.offset) as usize];
        self.formula.adopt_clause(vec![literal]);
        Ok(())
    }

    /// The formula the constraints have compiled to, for posting plain clauses alongside.
    pub fn formula_mut(&mut self) -> &mut Formula {
        &mut self.formula
    }

    /// Counters from the most recent solve.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Determines the satisfiability of the accumulated constraints.
    ///
    /// The call consumes the accumulated formula and domains, leaving fresh empty ones in their place: domains minted and constraints posted afterwards are considered by a further solve alone.
    /// On satisfiability the values of the consumed domains are decoded from the model.
    /// Handles minted before the call address the returned model only, not the context.
    pub fn solve(&mut self) -> Solution<DomainModel> {
        let formula = std::mem::take(&mut self.formula);
        let domains = std::mem::take(&mut self.domains);
        let mut context = Context::from_formula(formula, self.config);

        let solution = context.solve();
        self.counters = context.counters;

        match solution {
            Solution::Satisfiable(model) => {
                let values = domains.iter().map(|domain| domain.decode(&model)).collect();
                Solution::Satisfiable(DomainModel { values, model })
            }
            Solution::Unsatisfiable => Solution::Unsatisfiable,
        }
    }
}
