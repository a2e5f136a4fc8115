//! dfamatch: compile pattern sets into DFAs for simultaneous multi-pattern
//! matching, scanning, and search-and-replace over 16-bit code units.
//!
//! Patterns are built with the [`Pattern`] combinators over [`CharRange`]
//! character sets — there is no regex syntax. A [`DfaBuilder`] compiles an
//! insertion-ordered mapping from accept tags to patterns into a minimal
//! packed DFA; each input code unit advances a [`DfaState`], and a state
//! reports at most one match tag.
//!
//! ```
//! use dfamatch::{CharRange, DfaBuilder, Pattern};
//!
//! let mut builder = DfaBuilder::new();
//! builder.add_pattern(Pattern::literal("for"), "FOR".to_string());
//! builder.add_pattern(
//!     Pattern::repeat1(Pattern::char_range(CharRange::digits())),
//!     "NUMBER".to_string(),
//! );
//! let searcher = builder.build_string_searcher(None).unwrap();
//!
//! let text: Vec<u16> = "for 42".encode_utf16().collect();
//! let matches: Vec<_> = searcher.find_all(&text).collect();
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[1], (4, 6, "NUMBER".to_string()));
//! ```
//!
//! Building is the expensive step; do it once per pattern set. The packed
//! DFA is immutable afterwards and freely shareable across threads, and a
//! [`BuilderCache`] can persist condensed DFAs between runs.

mod automaton;
mod builder;
mod char_range;
mod hashing;
mod pattern;
mod search;
mod unicode_data;

use std::fmt;

pub use automaton::{DfaState, Nfa, NfaTransition, PackedDfa, DEAD};
pub use builder::{
    build_from_nfa, AmbiguityResolver, BuilderCache, DfaBuilder, MemBuilderCache,
};
pub use char_range::{
    case_fold, to_lower_char, to_upper_char, CharRange, CharRangeBuilder, MAX_CHAR,
};
pub use pattern::Pattern;
pub use search::{
    replacements, Matches, SearchAndReplace, SearchAndReplaceBuilder, StringMatcher,
    StringReplacement, StringSearcher,
};

/// Errors raised while building or rehydrating DFAs. Matching itself never
/// fails; it reports "no match".
#[derive(Debug)]
pub enum DfaError {
    /// Patterns for several distinct tags accept the same string and the
    /// resolver declined to pick one. Carries the colliding tags' debug
    /// renderings.
    Ambiguity(Vec<String>),
    /// A cached payload failed its checksum. Carries the cache key.
    CorruptCache(String),
    /// A pattern combinator was asked for an unsupported construction.
    /// Reserved; never produced by the combinators in this crate.
    InvalidPattern,
    /// An accept tag could not be serialized for caching.
    Serialization(String),
}

impl fmt::Display for DfaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DfaError::Ambiguity(tags) => {
                write!(f, "patterns for multiple results match the same string: {tags:?}")
            }
            DfaError::CorruptCache(key) => write!(f, "cached DFA failed checksum: {key}"),
            DfaError::InvalidPattern => write!(f, "unsupported pattern construction"),
            DfaError::Serialization(msg) => write!(f, "cannot serialize DFA: {msg}"),
        }
    }
}

impl std::error::Error for DfaError {}
