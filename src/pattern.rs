//! The pattern algebra and its lowering into NFA fragments.
//!
//! Patterns are tagged sum values built with the combinator constructors
//! below; there is no regex syntax. Each pattern knows how to append a
//! sub-automaton to an [`Nfa`] whose accepting edge enters a caller-supplied
//! target state, how to produce the pattern for its reverse language, and
//! how to compute a structural hash for builder cache keys.

use crate::automaton::Nfa;
use crate::char_range::CharRange;
use crate::hashing::Mixer;

/// A pattern over 16-bit code units.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches the empty string.
    Empty,
    /// Matches any single code unit in the set.
    Chars(CharRange),
    /// Matches the children in order.
    Seq(Vec<Pattern>),
    /// Matches any one child.
    Alt(Vec<Pattern>),
    /// Matches the child zero or more times.
    Repeat(Box<Pattern>),
    /// Matches the child zero or more times, always contributing a distinct
    /// start state (usable as a standalone leading any-run).
    MaybeRepeat(Box<Pattern>),
    /// Matches the child one or more times.
    Repeat1(Box<Pattern>),
    /// Matches the child or the empty string.
    Maybe(Box<Pattern>),
    /// Matches the child with every contained character set expanded to its
    /// case-independent form.
    CaseInsensitive(Box<Pattern>),
}

impl Pattern {
    /// A pattern matching one code unit from `r`.
    pub fn char_range(r: CharRange) -> Pattern {
        Pattern::Chars(r)
    }

    /// A pattern matching exactly the code units of `text` in order.
    pub fn literal(text: &str) -> Pattern {
        Pattern::Seq(
            text.encode_utf16()
                .map(|u| Pattern::Chars(CharRange::single(u)))
                .collect(),
        )
    }

    pub fn seq(patterns: Vec<Pattern>) -> Pattern {
        Pattern::Seq(patterns)
    }

    pub fn alt(patterns: Vec<Pattern>) -> Pattern {
        Pattern::Alt(patterns)
    }

    /// Zero or more repetitions of `p`.
    pub fn repeat(p: Pattern) -> Pattern {
        Pattern::Repeat(Box::new(p))
    }

    /// Zero or more repetitions of `p`, with a start state of its own even
    /// when `p` is empty.
    pub fn maybe_repeat(p: Pattern) -> Pattern {
        Pattern::MaybeRepeat(Box::new(p))
    }

    /// One or more repetitions of `p`.
    pub fn repeat1(p: Pattern) -> Pattern {
        Pattern::Repeat1(Box::new(p))
    }

    /// `p` or nothing.
    pub fn maybe(p: Pattern) -> Pattern {
        Pattern::Maybe(Box::new(p))
    }

    /// `p` with case-independent character sets.
    pub fn case_insensitive(p: Pattern) -> Pattern {
        Pattern::CaseInsensitive(Box::new(p))
    }

    /// The pattern recognizing the reverse of this pattern's language.
    pub fn reversed(&self) -> Pattern {
        match self {
            Pattern::Empty => Pattern::Empty,
            Pattern::Chars(r) => Pattern::Chars(r.clone()),
            Pattern::Seq(ps) => Pattern::Seq(ps.iter().rev().map(Pattern::reversed).collect()),
            Pattern::Alt(ps) => Pattern::Alt(ps.iter().map(Pattern::reversed).collect()),
            Pattern::Repeat(p) => Pattern::Repeat(Box::new(p.reversed())),
            Pattern::MaybeRepeat(p) => Pattern::MaybeRepeat(Box::new(p.reversed())),
            Pattern::Repeat1(p) => Pattern::Repeat1(Box::new(p.reversed())),
            Pattern::Maybe(p) => Pattern::Maybe(Box::new(p.reversed())),
            Pattern::CaseInsensitive(p) => Pattern::CaseInsensitive(Box::new(p.reversed())),
        }
    }

    /// Append this pattern's sub-automaton to `nfa`, with its accepting edge
    /// entering `target`. Returns the fragment's start state.
    pub fn add_to_nfa<T: Clone>(&self, nfa: &mut Nfa<T>, target: u32) -> u32 {
        self.add(nfa, target, false)
    }

    fn add<T: Clone>(&self, nfa: &mut Nfa<T>, target: u32, case_i: bool) -> u32 {
        match self {
            Pattern::Empty => target,
            Pattern::Chars(r) => {
                let expanded;
                let r = if case_i {
                    expanded = CharRange::builder().add_range_of(r).expand_cases().build();
                    &expanded
                } else {
                    r
                };
                let start = nfa.add_state(None);
                for (first, last) in r.ranges() {
                    nfa.add_transition(start, target, first, last);
                }
                start
            }
            Pattern::Seq(ps) => {
                let mut next = target;
                for p in ps.iter().rev() {
                    next = p.add(nfa, next, case_i);
                }
                next
            }
            Pattern::Alt(ps) => {
                let start = nfa.add_state(None);
                for p in ps {
                    let child_start = p.add(nfa, target, case_i);
                    nfa.add_epsilon(start, child_start);
                }
                start
            }
            Pattern::Repeat(p) => {
                if matches!(**p, Pattern::Empty) {
                    return target;
                }
                add_loop(p, nfa, target, case_i)
            }
            Pattern::MaybeRepeat(p) => add_loop(p, nfa, target, case_i),
            Pattern::Repeat1(p) => {
                let rest = Pattern::Repeat(p.clone()).add(nfa, target, case_i);
                p.add(nfa, rest, case_i)
            }
            Pattern::Maybe(p) => {
                let start = nfa.add_state(None);
                let child_start = p.add(nfa, target, case_i);
                nfa.add_epsilon(start, child_start);
                nfa.add_epsilon(start, target);
                start
            }
            Pattern::CaseInsensitive(p) => p.add(nfa, target, true),
        }
    }

    /// A 64-bit hash of the pattern's structure, stable across processes.
    /// Used in builder cache keys.
    pub fn structural_hash(&self) -> u64 {
        let mut m = Mixer::new();
        self.hash_into(&mut m);
        m.finish()
    }

    fn hash_into(&self, m: &mut Mixer) {
        match self {
            Pattern::Empty => m.write(0),
            Pattern::Chars(r) => {
                m.write(1);
                m.write(r.bounds().len() as u64);
                for &b in r.bounds() {
                    m.write(b as u64);
                }
            }
            Pattern::Seq(ps) => {
                m.write(2);
                m.write(ps.len() as u64);
                for p in ps {
                    m.write(p.structural_hash());
                }
            }
            Pattern::Alt(ps) => {
                m.write(3);
                m.write(ps.len() as u64);
                for p in ps {
                    m.write(p.structural_hash());
                }
            }
            Pattern::Repeat(p) => {
                m.write(4);
                m.write(p.structural_hash());
            }
            Pattern::MaybeRepeat(p) => {
                m.write(5);
                m.write(p.structural_hash());
            }
            Pattern::Repeat1(p) => {
                m.write(6);
                m.write(p.structural_hash());
            }
            Pattern::Maybe(p) => {
                m.write(7);
                m.write(p.structural_hash());
            }
            Pattern::CaseInsensitive(p) => {
                m.write(8);
                m.write(p.structural_hash());
            }
        }
    }
}

// Loop construction shared by Repeat and MaybeRepeat: the loop state both
// re-enters the body and exits to the target, so the body runs zero or more
// times.
fn add_loop<T: Clone>(p: &Pattern, nfa: &mut Nfa<T>, target: u32, case_i: bool) -> u32 {
    let loop_state = nfa.add_state(None);
    let body_start = p.add(nfa, loop_state, case_i);
    nfa.add_epsilon(loop_state, body_start);
    nfa.add_epsilon(loop_state, target);
    loop_state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_hash_distinguishes_variants() {
        let a = Pattern::literal("ab");
        let b = Pattern::literal("ba");
        assert_ne!(a.structural_hash(), b.structural_hash());
        assert_eq!(a.structural_hash(), Pattern::literal("ab").structural_hash());

        let r = Pattern::repeat(Pattern::char_range(CharRange::digits()));
        let mr = Pattern::maybe_repeat(Pattern::char_range(CharRange::digits()));
        assert_ne!(r.structural_hash(), mr.structural_hash());
    }

    #[test]
    fn test_reversed_literal() {
        let p = Pattern::literal("abc").reversed();
        match p {
            Pattern::Seq(ps) => {
                assert_eq!(ps.len(), 3);
                match &ps[0] {
                    Pattern::Chars(r) => assert!(r.contains('c' as u16)),
                    other => panic!("expected Chars, got {other:?}"),
                }
            }
            other => panic!("expected Seq, got {other:?}"),
        }
    }

    #[test]
    fn test_reversed_is_involution_on_hash() {
        let p = Pattern::alt(vec![
            Pattern::literal("for"),
            Pattern::seq(vec![
                Pattern::char_range(CharRange::ascii_lower()),
                Pattern::repeat(Pattern::char_range(CharRange::digits())),
            ]),
        ]);
        assert_eq!(
            p.reversed().reversed().structural_hash(),
            p.structural_hash()
        );
    }

    #[test]
    fn test_empty_adds_no_state() {
        let mut nfa: Nfa<u32> = Nfa::new();
        let target = nfa.add_state(Some(1));
        let start = Pattern::Empty.add_to_nfa(&mut nfa, target);
        assert_eq!(start, target);
        assert_eq!(nfa.len(), 1);
    }

    #[test]
    fn test_maybe_repeat_always_allocates() {
        let mut nfa: Nfa<u32> = Nfa::new();
        let target = nfa.add_state(Some(1));
        let repeat = Pattern::repeat(Pattern::Empty).add_to_nfa(&mut nfa, target);
        assert_eq!(repeat, target);
        let maybe_repeat = Pattern::maybe_repeat(Pattern::Empty).add_to_nfa(&mut nfa, target);
        assert_ne!(maybe_repeat, target);
    }
}
