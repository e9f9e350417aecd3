/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made at the interesting points of a solve.
Note, no log implementation is provided.
For details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const PROPAGATION: &str = "propagation";
    pub const PURE: &str = "pure";
    pub const DECISION: &str = "decision";
    pub const BACKTRACK: &str = "backtrack";
    pub const DOMAINS: &str = "domains";
}
