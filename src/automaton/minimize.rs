//! DFA minimization by hash-signature partition refinement.
//!
//! States start partitioned by accept value. Each pass computes a signature
//! per state from its current class and its class-remapped transition list,
//! rebuckets by signature, and repeats until no class splits. Classes are
//! then renumbered by BFS from the start states so the output is
//! reproducible, and one representative per reachable class is emitted.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::packed::{DfaStateInfo, RawDfa};

pub(crate) fn minimize<T: Clone + Eq + Hash>(dfa: &RawDfa<T>) -> RawDfa<T> {
    let n = dfa.states.len();
    if n == 0 {
        return RawDfa {
            states: Vec::new(),
            start_states: dfa.start_states.clone(),
        };
    }

    // Initial partition: one class per distinct accept value, ids in
    // first-appearance order.
    let mut class_of: Vec<u32> = Vec::with_capacity(n);
    {
        let mut by_accept: FxHashMap<&Option<T>, u32> = FxHashMap::default();
        for state in &dfa.states {
            let next = by_accept.len() as u32;
            class_of.push(*by_accept.entry(&state.accept).or_insert(next));
        }
    }

    // Refine until stable.
    let mut class_count = class_of.iter().map(|&c| c + 1).max().unwrap_or(0);
    loop {
        let mut buckets: FxHashMap<(u32, Vec<(u16, u16, u32)>), u32> = FxHashMap::default();
        let mut next_classes: Vec<u32> = Vec::with_capacity(n);
        for (i, state) in dfa.states.iter().enumerate() {
            let signature = (
                class_of[i],
                remap_transitions(&state.transitions, &class_of),
            );
            let next = buckets.len() as u32;
            next_classes.push(*buckets.entry(signature).or_insert(next));
        }
        let next_count = buckets.len() as u32;
        class_of = next_classes;
        if next_count == class_count {
            break;
        }
        class_count = next_count;
    }

    // Renumber reachable classes by BFS from the start states and emit one
    // representative per class.
    let mut representative: FxHashMap<u32, usize> = FxHashMap::default();
    for (i, &c) in class_of.iter().enumerate() {
        representative.entry(c).or_insert(i);
    }
    let mut renumbered: FxHashMap<u32, u32> = FxHashMap::default();
    let mut order: Vec<u32> = Vec::new();
    let mut queue: VecDeque<u32> = VecDeque::new();
    let mut visit = |class: u32,
                     renumbered: &mut FxHashMap<u32, u32>,
                     order: &mut Vec<u32>,
                     queue: &mut VecDeque<u32>|
     -> u32 {
        *renumbered.entry(class).or_insert_with(|| {
            let id = order.len() as u32;
            order.push(class);
            queue.push_back(class);
            id
        })
    };
    let start_states: Vec<u32> = dfa
        .start_states
        .iter()
        .map(|&s| {
            visit(
                class_of[s as usize],
                &mut renumbered,
                &mut order,
                &mut queue,
            )
        })
        .collect();
    let mut states: Vec<DfaStateInfo<T>> = Vec::new();
    while let Some(class) = queue.pop_front() {
        let rep = &dfa.states[representative[&class]];
        let transitions = remap_transitions(&rep.transitions, &class_of)
            .into_iter()
            .map(|(first, last, target)| {
                (
                    first,
                    last,
                    visit(target, &mut renumbered, &mut order, &mut queue),
                )
            })
            .collect();
        states.push(DfaStateInfo {
            accept: rep.accept.clone(),
            transitions,
        });
    }

    RawDfa {
        states,
        start_states,
    }
}

// Map transition targets to their classes, merging ranges that become
// adjacent and same-class so equivalent states get equal signatures.
fn remap_transitions(transitions: &[(u16, u16, u32)], class_of: &[u32]) -> Vec<(u16, u16, u32)> {
    let mut out: Vec<(u16, u16, u32)> = Vec::with_capacity(transitions.len());
    for &(first, last, target) in transitions {
        let class = class_of[target as usize];
        if let Some(prev) = out.last_mut() {
            if prev.2 == class && prev.1 as u32 + 1 == first as u32 {
                prev.1 = last;
                continue;
            }
        }
        out.push((first, last, class));
    }
    out
}
