//! The mutable NFA graph that patterns lower into.
//!
//! States live in an arena and are addressed by dense `u32` ids, so cyclic
//! fragments (repetition loops) need no ownership gymnastics and the graph
//! serializes trivially. Additions are append-only; a state's identity is
//! its index.

use smallvec::SmallVec;

/// A labeled transition between NFA states. The bounds are inclusive.
#[derive(Clone, Copy, Debug)]
pub struct NfaTransition {
    pub to: u32,
    pub first: u16,
    pub last: u16,
}

#[derive(Clone)]
struct NfaState<T> {
    accept: Option<T>,
    transitions: SmallVec<[NfaTransition; 2]>,
    /// Epsilon targets, kept sorted for cheap dedup and deterministic
    /// closure computation.
    epsilons: SmallVec<[u32; 2]>,
}

/// A non-deterministic finite automaton with range-labeled and ε-transitions.
#[derive(Clone)]
pub struct Nfa<T> {
    states: Vec<NfaState<T>>,
}

impl<T> Default for Nfa<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Nfa<T> {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Number of states in the automaton.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Add a state, optionally accepting with the given tag. Returns its id.
    pub fn add_state(&mut self, accept: Option<T>) -> u32 {
        let id = self.states.len() as u32;
        self.states.push(NfaState {
            accept,
            transitions: SmallVec::new(),
            epsilons: SmallVec::new(),
        });
        id
    }

    /// Add a transition on all code units from `first` to `last` inclusive.
    pub fn add_transition(&mut self, from: u32, to: u32, first: u16, last: u16) {
        debug_assert!(first <= last);
        self.states[from as usize]
            .transitions
            .push(NfaTransition { to, first, last });
    }

    /// Add an ε-transition. Duplicate edges are dropped; ε-closure cost
    /// dominates subset construction, so the edge lists stay minimal.
    pub fn add_epsilon(&mut self, from: u32, to: u32) {
        let epsilons = &mut self.states[from as usize].epsilons;
        if let Err(pos) = epsilons.binary_search(&to) {
            epsilons.insert(pos, to);
        }
    }

    /// The accept tag of a state, if any.
    pub fn accept(&self, state: u32) -> Option<&T> {
        self.states[state as usize].accept.as_ref()
    }

    /// The labeled transitions out of a state, in insertion order.
    pub fn transitions(&self, state: u32) -> &[NfaTransition] {
        &self.states[state as usize].transitions
    }

    /// The ε-targets of a state, ascending.
    pub fn epsilons(&self, state: u32) -> &[u32] {
        &self.states[state as usize].epsilons
    }

    /// The set of states reachable from `starts` by ε-edges alone, as a
    /// sorted, deduplicated id list.
    pub fn eps_closure(&self, starts: &[u32]) -> Vec<u32> {
        let mut closure: Vec<u32> = Vec::with_capacity(starts.len());
        let mut stack: Vec<u32> = Vec::with_capacity(starts.len());
        for &s in starts {
            if let Err(pos) = closure.binary_search(&s) {
                closure.insert(pos, s);
                stack.push(s);
            }
        }
        while let Some(q) = stack.pop() {
            for &e in self.epsilons(q) {
                if let Err(pos) = closure.binary_search(&e) {
                    closure.insert(pos, e);
                    stack.push(e);
                }
            }
        }
        closure
    }

    /// Return a start state accepting the same language as `start` minus the
    /// empty string. The new state carries every labeled transition reachable
    /// from `start` through ε-edges, no accept, and no ε-edges of its own, so
    /// no ε-path from it can accept without consuming input.
    pub fn disemptify(&mut self, start: u32) -> u32 {
        let closure = self.eps_closure(&[start]);
        let mut edges: SmallVec<[NfaTransition; 2]> = SmallVec::new();
        for &q in &closure {
            edges.extend_from_slice(self.transitions(q));
        }
        let new_start = self.add_state(None);
        self.states[new_start as usize].transitions = edges;
        new_start
    }

    /// A permutation-stable structural hash over the graph in declaration
    /// order, used to key caches for caller-assembled NFAs.
    pub fn structural_hash(&self) -> u64 {
        // FNV-1a, folding in every edge and accept marker.
        let mut hash: u64 = 0xCBF2_9CE4_8422_2325;
        let mut mix = |v: u64| {
            hash = (hash ^ v).wrapping_mul(0x0000_0100_0000_01B3);
        };
        for state in &self.states {
            mix(if state.accept.is_some() { 2 } else { 1 });
            for t in &state.transitions {
                mix(t.to as u64);
                mix(t.first as u64);
                mix(t.last as u64);
            }
            mix(0);
            for &e in &state.epsilons {
                mix(e as u64);
            }
            mix(0);
        }
        hash
    }
}
