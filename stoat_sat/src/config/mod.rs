/*!
Configuration of a context.

The search has one optional ingredient: pure literal elimination.
The scan for pure literals walks every clause of the top step each time it runs, which is correct but costly on large formulas, and the search remains sound and complete without it (unit propagation and branching suffice).
The switch keeps both arrangements available.
*/

/// The primary configuration structure.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Eliminate pure literals before making a free decision.
    pub pure_literals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pure_literals: true,
        }
    }
}
