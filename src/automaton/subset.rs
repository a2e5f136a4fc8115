//! Subset construction: NFA state sets become DFA states.
//!
//! Each DFA state is the ε-closure of a set of NFA states, canonicalized as
//! a sorted id list and interned so equal closures share one DFA state. A
//! boundary sweep over the closure's outgoing transitions produces the
//! minimal disjoint partition of the code-unit space, with one DFA
//! transition per partition whose target closure is non-empty.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::nfa::Nfa;
use super::packed::{DfaStateInfo, RawDfa};
use crate::builder::AmbiguityResolver;
use crate::DfaError;

/// Run subset construction from the given NFA start states. Accept-tag
/// collisions are handed to `resolver`; its error aborts the build.
pub(crate) fn dfa_from_nfa<T: Clone + Eq + Hash>(
    nfa: &Nfa<T>,
    nfa_start_states: &[u32],
    resolver: &AmbiguityResolver<T>,
) -> Result<RawDfa<T>, DfaError> {
    let mut interned: FxHashMap<Vec<u32>, u32> = FxHashMap::default();
    let mut closures: Vec<Vec<u32>> = Vec::new();
    let mut pending: VecDeque<u32> = VecDeque::new();

    let mut intern = |closure: Vec<u32>,
                      closures: &mut Vec<Vec<u32>>,
                      pending: &mut VecDeque<u32>|
     -> u32 {
        *interned.entry(closure).or_insert_with_key(|key| {
            let id = closures.len() as u32;
            closures.push(key.clone());
            pending.push_back(id);
            id
        })
    };

    let start_states: Vec<u32> = nfa_start_states
        .iter()
        .map(|&s| intern(nfa.eps_closure(&[s]), &mut closures, &mut pending))
        .collect();

    let mut states: Vec<DfaStateInfo<T>> = Vec::new();
    while let Some(id) = pending.pop_front() {
        let closure = closures[id as usize].clone();

        // Accept tag: the distinct tags of the closure, in state-id order.
        let mut accepts: Vec<T> = Vec::new();
        for &q in &closure {
            if let Some(tag) = nfa.accept(q) {
                if !accepts.contains(tag) {
                    accepts.push(tag.clone());
                }
            }
        }
        let accept = if accepts.len() > 1 {
            Some(resolver(&accepts)?)
        } else {
            accepts.pop()
        };

        // Boundary sweep. Every transition contributes an enter point at
        // `first` and a leave point at `last + 1`; between consecutive
        // points the active transition set is constant.
        let edges: Vec<_> = closure
            .iter()
            .flat_map(|&q| nfa.transitions(q).iter().copied())
            .collect();
        let mut points: Vec<u32> = Vec::with_capacity(edges.len() * 2);
        let mut enters: FxHashMap<u32, Vec<usize>> = FxHashMap::default();
        let mut leaves: FxHashMap<u32, Vec<usize>> = FxHashMap::default();
        for (i, t) in edges.iter().enumerate() {
            points.push(t.first as u32);
            points.push(t.last as u32 + 1);
            enters.entry(t.first as u32).or_default().push(i);
            leaves.entry(t.last as u32 + 1).or_default().push(i);
        }
        points.sort_unstable();
        points.dedup();

        let mut transitions: Vec<(u16, u16, u32)> = Vec::new();
        let mut active: Vec<usize> = Vec::new();
        for w in points.windows(2) {
            let (lo, hi) = (w[0], w[1] - 1);
            if let Some(gone) = leaves.get(&lo) {
                active.retain(|i| !gone.contains(i));
            }
            if let Some(added) = enters.get(&lo) {
                active.extend_from_slice(added);
            }
            if active.is_empty() {
                continue;
            }
            let targets: Vec<u32> = active.iter().map(|&i| edges[i].to).collect();
            let target = intern(nfa.eps_closure(&targets), &mut closures, &mut pending);
            if let Some(prev) = transitions.last_mut() {
                if prev.2 == target && prev.1 as u32 + 1 == lo {
                    prev.1 = hi as u16;
                    continue;
                }
            }
            transitions.push((lo as u16, hi as u16, target));
        }

        debug_assert_eq!(states.len(), id as usize);
        states.push(DfaStateInfo {
            accept,
            transitions,
        });
    }

    Ok(RawDfa {
        states,
        start_states,
    })
}
