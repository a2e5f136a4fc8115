use std::collections::HashSet;
use std::sync::Arc;

use super::*;
use crate::char_range::CharRange;
use crate::pattern::Pattern;
use crate::DfaError;

fn no_resolver(tags: &[u32]) -> Result<u32, DfaError> {
    Err(DfaError::Ambiguity(
        tags.iter().map(|t| t.to_string()).collect(),
    ))
}

fn single_start(nfa: &Nfa<u32>, start: u32) -> DfaState<u32> {
    let raw = dfa_from_nfa(nfa, &[start], &no_resolver).unwrap();
    let minimal = minimize(&raw);
    let mut states = Arc::new(PackedDfa::from_raw(&minimal)).start_states();
    states.remove(0)
}

fn accepts(start: &DfaState<u32>, text: &str) -> bool {
    let mut state = start.clone();
    for u in text.encode_utf16() {
        match state.next_state(u) {
            Some(next) => state = next,
            None => return false,
        }
    }
    state.accept().is_some()
}

fn pattern_start(pattern: &Pattern) -> (Nfa<u32>, u32) {
    let mut nfa: Nfa<u32> = Nfa::new();
    let accept = nfa.add_state(Some(1));
    let start = pattern.add_to_nfa(&mut nfa, accept);
    (nfa, start)
}

fn pattern_dfa(pattern: &Pattern) -> DfaState<u32> {
    let (nfa, start) = pattern_start(pattern);
    single_start(&nfa, start)
}

fn count_states(start: &DfaState<u32>) -> usize {
    let mut seen: HashSet<DfaState<u32>> = HashSet::new();
    let mut togo = vec![start.clone()];
    seen.insert(start.clone());
    while let Some(state) = togo.pop() {
        state.enumerate_transitions(|_, _, next| {
            if seen.insert(next.clone()) {
                togo.push(next);
            }
        });
    }
    seen.len()
}

#[test]
fn test_epsilon_edges_deduplicate() {
    let mut nfa: Nfa<u32> = Nfa::new();
    let a = nfa.add_state(None);
    let b = nfa.add_state(Some(1));
    nfa.add_epsilon(a, b);
    nfa.add_epsilon(a, b);
    assert_eq!(nfa.epsilons(a), &[b]);
}

#[test]
fn test_eps_closure_follows_chains_and_cycles() {
    let mut nfa: Nfa<u32> = Nfa::new();
    let a = nfa.add_state(None);
    let b = nfa.add_state(None);
    let c = nfa.add_state(Some(1));
    nfa.add_epsilon(a, b);
    nfa.add_epsilon(b, c);
    nfa.add_epsilon(c, a);
    assert_eq!(nfa.eps_closure(&[a]), vec![a, b, c]);
}

#[test]
fn test_subset_construction_splits_overlapping_ranges() {
    // Two NFA edges overlap on 'd'..='f'; the DFA must partition them.
    let mut nfa: Nfa<u32> = Nfa::new();
    let start = nfa.add_state(None);
    let x = nfa.add_state(Some(1));
    let y = nfa.add_state(Some(2));
    nfa.add_transition(start, x, 'a' as u16, 'f' as u16);
    nfa.add_transition(start, y, 'd' as u16, 'k' as u16);

    let raw = dfa_from_nfa(&nfa, &[start], &|tags: &[u32]| Ok(tags[0] + tags[1]))
        .unwrap();
    let transitions = &raw.states[raw.start_states[0] as usize].transitions;
    assert_eq!(transitions.len(), 3);
    assert_eq!(transitions[0].0, 'a' as u16);
    assert_eq!(transitions[0].1, 'c' as u16);
    assert_eq!(transitions[1].0, 'd' as u16);
    assert_eq!(transitions[1].1, 'f' as u16);
    assert_eq!(transitions[2].0, 'g' as u16);
    assert_eq!(transitions[2].1, 'k' as u16);
    assert_ne!(transitions[0].2, transitions[1].2);
    assert_ne!(transitions[1].2, transitions[2].2);
}

#[test]
fn test_subset_construction_resolver_error_propagates() {
    let mut nfa: Nfa<u32> = Nfa::new();
    let start = nfa.add_state(None);
    let x = nfa.add_state(Some(1));
    let y = nfa.add_state(Some(2));
    nfa.add_transition(start, x, 'a' as u16, 'a' as u16);
    nfa.add_transition(start, y, 'a' as u16, 'a' as u16);
    assert!(matches!(
        dfa_from_nfa(&nfa, &[start], &no_resolver),
        Err(DfaError::Ambiguity(_))
    ));
}

#[test]
fn test_minimization_merges_equivalent_states() {
    // alt("ab", "cb") has two equivalent after-first-char NFA paths; the
    // minimal DFA is start, one merged middle state, and the accept.
    let pattern = Pattern::alt(vec![Pattern::literal("ab"), Pattern::literal("cb")]);
    let start = pattern_dfa(&pattern);
    assert!(accepts(&start, "ab"));
    assert!(accepts(&start, "cb"));
    assert!(!accepts(&start, "a"));
    assert!(!accepts(&start, "ac"));
    assert_eq!(count_states(&start), 3);
    assert_eq!(start.dfa().state_count(), 3);
}

#[test]
fn test_minimality_no_two_states_equivalent() {
    let pattern = Pattern::alt(vec![
        Pattern::literal("if"),
        Pattern::literal("iffy"),
        Pattern::repeat1(Pattern::char_range(CharRange::digits())),
    ]);
    let start = pattern_dfa(&pattern);
    // No two reachable states may share accept and transition function.
    let mut summaries: Vec<(bool, Vec<(u16, u16, u32)>)> = Vec::new();
    let mut seen = HashSet::new();
    let mut togo = vec![start.clone()];
    seen.insert(start.index());
    while let Some(state) = togo.pop() {
        let mut transitions = Vec::new();
        state.enumerate_transitions(|first, last, next| {
            transitions.push((first, last, next.index()));
            if seen.insert(next.index()) {
                togo.push(next);
            }
        });
        let summary = (state.accept().is_some(), transitions);
        assert!(
            !summaries.contains(&summary),
            "state {} duplicates an earlier state",
            state.index()
        );
        summaries.push(summary);
    }
}

#[test]
fn test_packed_coverage_is_total() {
    let pattern = Pattern::repeat1(Pattern::char_range(CharRange::category("L").unwrap()));
    let start = pattern_dfa(&pattern);
    // Every code unit gets a definite answer; probing the extremes and a
    // sample across the space must never panic.
    for c in (0u32..=0xFFFF).step_by(257).chain([0, 0xFFFF]) {
        let _ = start.next_state(c as u16);
    }
    assert!(start.next_state('A' as u16).is_some());
    assert!(start.next_state(0xFFFF).is_none());
}

#[test]
fn test_enumerate_transitions_skips_dead_gaps() {
    let pattern = Pattern::char_range(
        CharRange::builder()
            .add_range('a' as u16, 'c' as u16)
            .add_range('x' as u16, 'z' as u16)
            .build(),
    );
    let start = pattern_dfa(&pattern);
    let mut seen = Vec::new();
    start.enumerate_transitions(|first, last, _| seen.push((first, last)));
    assert_eq!(seen, vec![('a' as u16, 'c' as u16), ('x' as u16, 'z' as u16)]);
}

#[test]
fn test_reverse_equivalence() {
    let pattern = Pattern::seq(vec![
        Pattern::literal("ab"),
        Pattern::repeat(Pattern::char_range(CharRange::digits())),
        Pattern::maybe(Pattern::literal("z")),
    ]);
    let forward = pattern_dfa(&pattern);
    let backward = pattern_dfa(&pattern.reversed());
    for text in ["ab", "ab123", "ab9z", "abz", "ba", "ab12x", "", "z21ba"] {
        let reversed: String = text.chars().rev().collect();
        assert_eq!(
            accepts(&forward, text),
            accepts(&backward, &reversed),
            "pattern vs reverse disagree on {text:?}"
        );
    }
}

#[test]
fn test_disemptify_drops_only_the_empty_string() {
    // maybe("ab") accepts "" and "ab"; after disemptify only "ab" remains.
    let pattern = Pattern::maybe(Pattern::literal("ab"));
    let (mut nfa, start) = pattern_start(&pattern);
    let trimmed = nfa.disemptify(start);
    let dfa = single_start(&nfa, trimmed);
    assert!(accepts(&dfa, "ab"));
    assert!(!accepts(&dfa, ""));
    assert!(!accepts(&dfa, "a"));
}

#[test]
fn test_disemptify_keeps_loops() {
    // a* accepts "", "a", "aa", ...; disemptified it accepts one or more.
    let pattern = Pattern::repeat(Pattern::char_range(CharRange::single('a' as u16)));
    let (mut nfa, start) = pattern_start(&pattern);
    let trimmed = nfa.disemptify(start);
    let dfa = single_start(&nfa, trimmed);
    assert!(!accepts(&dfa, ""));
    assert!(accepts(&dfa, "a"));
    assert!(accepts(&dfa, "aaaa"));
    assert!(!accepts(&dfa, "ab"));
}

#[test]
fn test_determinism_identical_builds() {
    let pattern = Pattern::alt(vec![
        Pattern::literal("while"),
        Pattern::repeat1(Pattern::char_range(CharRange::category("Word").unwrap())),
    ]);
    let a = pattern_dfa(&pattern);
    let b = pattern_dfa(&pattern);
    assert_eq!(a.dfa().state_count(), b.dfa().state_count());
    // Structurally identical: same transitions state by state.
    for index in 0..a.dfa().state_count() as u32 {
        let collect = |start: &DfaState<u32>| {
            let mut out = Vec::new();
            let mut seen = HashSet::new();
            let mut togo = vec![start.clone()];
            while let Some(s) = togo.pop() {
                if s.index() == index {
                    s.enumerate_transitions(|f, l, n| out.push((f, l, n.index())));
                    break;
                }
                s.enumerate_transitions(|_, _, next| {
                    if seen.insert(next.index()) {
                        togo.push(next);
                    }
                });
            }
            out
        };
        assert_eq!(collect(&a), collect(&b));
    }
}

#[test]
fn test_condense_produce_round_trip() {
    let pattern = Pattern::repeat1(Pattern::char_range(CharRange::hex_digits()));
    let (nfa, start) = pattern_start(&pattern);
    let raw = dfa_from_nfa(&nfa, &[start], &no_resolver).unwrap();
    let packed = PackedDfa::from_raw(&minimize(&raw));
    let condensed = packed.condense().unwrap();
    let revived: PackedDfa<u32> = PackedDfa::produce(&condensed).unwrap();
    assert_eq!(revived.state_count(), packed.state_count());
    let mut states = Arc::new(revived).start_states();
    let start = states.remove(0);
    assert!(accepts(&start, "c0ffee"));
    assert!(!accepts(&start, "c0ffeg"));
}

#[test]
fn test_produce_rejects_corruption() {
    let pattern = Pattern::literal("x");
    let (nfa, start) = pattern_start(&pattern);
    let raw = dfa_from_nfa(&nfa, &[start], &no_resolver).unwrap();
    let packed = PackedDfa::from_raw(&minimize(&raw));
    let mut condensed = packed.condense().unwrap();
    condensed.replace_range(2..3, "!");
    assert!(matches!(
        PackedDfa::<u32>::produce(&condensed),
        Err(DfaError::CorruptCache(_))
    ));
    assert!(matches!(
        PackedDfa::<u32>::produce("short"),
        Err(DfaError::CorruptCache(_))
    ));
}
