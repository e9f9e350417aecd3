//! The algorithm for deciding satisfiability, factored into a collection of procedures.
//!
//! - [propagation]: unit clauses force their literal.
//! - [pure]: atoms occurring with a single polarity may be valued to match it.
//! - [decision]: a free choice of atom and polarity, when nothing is forced.
//! - [backtrack]: the undoing of free choices on conflict.
//! - [solve]: the loop which ties the above together.

pub mod backtrack;
pub mod decision;
pub mod propagation;
pub mod pure;
pub mod solve;
