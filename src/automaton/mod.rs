//! The automaton pipeline: NFA graph, subset construction, minimization,
//! and the packed match-time representation.
//!
//! # Module Organization
//!
//! - `nfa`: the mutable ε-NFA arena that patterns lower into
//! - `subset`: NFA → raw DFA with ambiguity resolution
//! - `minimize`: partition refinement to the minimal DFA
//! - `packed`: the packed transition table, state handles, persistence

mod minimize;
mod nfa;
mod packed;
mod subset;

pub use nfa::{Nfa, NfaTransition};
pub use packed::{DfaState, PackedDfa, DEAD};

pub(crate) use minimize::minimize;
pub(crate) use subset::dfa_from_nfa;

#[cfg(test)]
mod tests;
