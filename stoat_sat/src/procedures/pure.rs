/*!
Pure literal elimination.

An atom is pure (relative to the open clauses) when every occurrence of the atom carries the same polarity.
Valuing the atom to match that polarity satisfies every clause it occurs in, and can never introduce a conflict, so the matching literal may be applied without consuming a level.

The scan classifies every atom by walking every open clause, then takes the lowest pure atom.
The classification buffer is owned by the context and reused across calls, so the scan allocates nothing.

Note: the scan walks the whole clause set each time it runs.
This is the expensive part of a solve on formulas of any size, and may be switched off through [Config::pure_literals](crate::config::Config::pure_literals).
*/

use crate::{
    search::Step,
    structures::literal::{CLiteral, Literal},
};

/// The polarities with which an atom occurs across the open clauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occurrence {
    /// The atom does not occur. Not pure: there is nothing to satisfy.
    Never,

    /// Every occurrence is positive.
    Positive,

    /// Every occurrence is negative.
    Negative,

    /// Occurrences with both polarities.
    Mixed,
}

impl Occurrence {
    /// The classification after noting one further occurrence with the given polarity.
    fn noting(self, polarity: bool) -> Self {
        match (self, polarity) {
            (Occurrence::Never, true) => Occurrence::Positive,
            (Occurrence::Never, false) => Occurrence::Negative,
            (Occurrence::Positive, true) => Occurrence::Positive,
            (Occurrence::Negative, false) => Occurrence::Negative,
            _ => Occurrence::Mixed,
        }
    }
}

impl Step {
    /// The literal of the lowest pure atom of the step, if some atom is pure.
    ///
    /// `occurrence` is scratch sized to the atoms of the formula, reset on entry.
    pub fn pure_literal(&self, occurrence: &mut [Occurrence]) -> Option<CLiteral> {
        occurrence.fill(Occurrence::Never);

        for clause in self.clauses() {
            for literal in clause {
                let cell = &mut occurrence[literal.index()];
                *cell = cell.noting(literal.polarity());
            }
        }

        occurrence
            .iter()
            .enumerate()
            .find_map(|(index, classification)| match classification {
                Occurrence::Positive => Some(CLiteral::new(index as u32 + 1, true)),
                Occurrence::Negative => Some(CLiteral::new(index as u32 + 1, false)),
                Occurrence::Never | Occurrence::Mixed => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Step;

    #[test]
    fn lowest_pure_atom_wins() {
        // 1 is mixed, 2 occurs only negatively, 3 only positively.
        let step = Step::root(vec![vec![1, -2], vec![-1, 3], vec![-2, 3]]);
        let mut scratch = vec![Occurrence::Never; 3];

        assert_eq!(step.pure_literal(&mut scratch), Some(-2));
    }

    #[test]
    fn absent_atoms_are_not_pure() {
        // 1 is mixed and 2 does not occur.
        let step = Step::root(vec![vec![1], vec![-1]]);
        let mut scratch = vec![Occurrence::Never; 2];

        assert_eq!(step.pure_literal(&mut scratch), None);
    }
}
