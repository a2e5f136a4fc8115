//! The raw and packed DFA representations, and the state handle used at
//! match time.
//!
//! A [`RawDfa`] is the working form produced by subset construction and
//! minimization: per state, an optional accept tag and a sorted list of
//! disjoint `(first, last, target)` transitions. Code units outside every
//! listed range are implicit dead transitions.
//!
//! A [`PackedDfa`] is the immutable artifact used for matching: per state,
//! a sorted array of inclusive upper bounds partitioning the whole code-unit
//! space, and a parallel target array where [`DEAD`] marks the gaps. A
//! transition lookup is one binary search. The packed table is freely
//! shareable across threads; [`DfaState`] handles are just an `Arc` plus an
//! index.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::hashing;
use crate::DfaError;

/// Sentinel target meaning "no transition".
pub const DEAD: u32 = u32::MAX;

/// One state of a [`RawDfa`].
#[derive(Clone, Debug)]
pub(crate) struct DfaStateInfo<T> {
    pub accept: Option<T>,
    /// Sorted by `first`; ranges are disjoint.
    pub transitions: Vec<(u16, u16, u32)>,
}

/// The flat DFA form passed between pipeline stages.
#[derive(Clone)]
pub(crate) struct RawDfa<T> {
    pub states: Vec<DfaStateInfo<T>>,
    /// One start-state index per language, in build order.
    pub start_states: Vec<u32>,
}

#[derive(Clone, Serialize, Deserialize)]
struct PackedState<T> {
    accept: Option<T>,
    /// Inclusive upper bounds, ascending, partitioning `[0, 0xFFFF]`
    /// exhaustively. The last entry is always `0xFFFF`.
    ranges: Vec<u16>,
    /// Parallel to `ranges`; [`DEAD`] marks intervals with no transition.
    targets: Vec<u32>,
}

/// The immutable packed DFA shared by every start state of a build.
#[derive(Clone, Serialize, Deserialize)]
pub struct PackedDfa<T> {
    states: Vec<PackedState<T>>,
    start_states: Vec<u32>,
}

impl<T: Clone> PackedDfa<T> {
    pub(crate) fn from_raw(raw: &RawDfa<T>) -> Self {
        let states = raw
            .states
            .iter()
            .map(|info| {
                let mut ranges = Vec::with_capacity(info.transitions.len() * 2 + 1);
                let mut targets = Vec::with_capacity(info.transitions.len() * 2 + 1);
                let mut next_unit: u32 = 0;
                for &(first, last, target) in &info.transitions {
                    if (first as u32) > next_unit {
                        ranges.push(first - 1);
                        targets.push(DEAD);
                    }
                    ranges.push(last);
                    targets.push(target);
                    next_unit = last as u32 + 1;
                }
                if next_unit <= 0xFFFF {
                    ranges.push(0xFFFF);
                    targets.push(DEAD);
                }
                PackedState {
                    accept: info.accept.clone(),
                    ranges,
                    targets,
                }
            })
            .collect();
        PackedDfa {
            states,
            start_states: raw.start_states.clone(),
        }
    }

    /// Number of states in the packed table.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Handles for the per-language start states, in build order.
    pub fn start_states(self: Arc<Self>) -> Vec<DfaState<T>> {
        self.start_states
            .iter()
            .map(|&index| DfaState {
                dfa: Arc::clone(&self),
                index,
            })
            .collect()
    }
}

impl<T: Serialize> PackedDfa<T> {
    /// Serialize to a self-describing character stream ending in a 32-char
    /// base-32 checksum of the body.
    pub fn condense(&self) -> Result<String, DfaError> {
        let body = serde_json::to_string(self)
            .map_err(|e| DfaError::Serialization(e.to_string()))?;
        Ok(hashing::seal(body))
    }
}

impl<T: DeserializeOwned> PackedDfa<T> {
    /// Rebuild a packed DFA from [`condense`](PackedDfa::condense) output,
    /// rejecting streams whose checksum does not verify.
    pub fn produce(text: &str) -> Result<Self, DfaError> {
        let body =
            hashing::unseal(text).ok_or_else(|| DfaError::CorruptCache(String::new()))?;
        serde_json::from_str(body).map_err(|_| DfaError::CorruptCache(String::new()))
    }
}

/// A state of a packed DFA. Cheap to clone; equality is identity within one
/// packed table.
#[derive(Clone)]
pub struct DfaState<T> {
    dfa: Arc<PackedDfa<T>>,
    index: u32,
}

impl<T> PartialEq for DfaState<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.dfa, &other.dfa) && self.index == other.index
    }
}

impl<T> Eq for DfaState<T> {}

impl<T> std::hash::Hash for DfaState<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.dfa) as usize).hash(state);
        self.index.hash(state);
    }
}

impl<T> std::fmt::Debug for DfaState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DfaState").field("index", &self.index).finish()
    }
}

impl<T> DfaState<T> {
    /// Step on one code unit. Returns the successor state, or `None` when
    /// the transition is dead.
    pub fn next_state(&self, c: u16) -> Option<DfaState<T>> {
        let state = &self.dfa.states[self.index as usize];
        let slot = state.ranges.partition_point(|&upper| upper < c);
        let target = state.targets[slot];
        (target != DEAD).then(|| DfaState {
            dfa: Arc::clone(&self.dfa),
            index: target,
        })
    }

    /// The accept tag reported by this state, if any.
    pub fn accept(&self) -> Option<&T> {
        self.dfa.states[self.index as usize].accept.as_ref()
    }

    /// Invoke `f(first, last, target)` for every live transition interval,
    /// in ascending order.
    pub fn enumerate_transitions(&self, mut f: impl FnMut(u16, u16, DfaState<T>)) {
        let state = &self.dfa.states[self.index as usize];
        let mut first: u32 = 0;
        for (&upper, &target) in state.ranges.iter().zip(&state.targets) {
            if target != DEAD {
                f(
                    first as u16,
                    upper,
                    DfaState {
                        dfa: Arc::clone(&self.dfa),
                        index: target,
                    },
                );
            }
            first = upper as u32 + 1;
        }
    }

    /// This state's index in the packed table.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The packed table this state belongs to.
    pub fn dfa(&self) -> &Arc<PackedDfa<T>> {
        &self.dfa
    }
}
