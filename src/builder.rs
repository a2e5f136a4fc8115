//! Compiles pattern sets into shared minimal DFAs.
//!
//! Given an insertion-ordered mapping from accept tags to patterns,
//! [`DfaBuilder`] produces a DFA that matches a sequence of code units
//! against all of those patterns simultaneously. Several languages (subsets
//! of the tags) can be built in one call; the resulting start states share
//! one globally minimized packed table.
//!
//! Building a DFA is the expensive step, so a [`BuilderCache`] can remember
//! condensed DFAs keyed by a 32-character digest of everything that goes
//! into a build: the DFA type, the languages, and each included pattern's
//! structural hash, all in insertion order, so the same inputs always
//! produce the same key.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::automaton::{dfa_from_nfa, minimize, DfaState, Nfa, PackedDfa};
use crate::char_range::CharRange;
use crate::hashing::TripleMixer;
use crate::pattern::Pattern;
use crate::DfaError;

/// Resolves accept-tag collisions: called with the set of tags (at least
/// two) whose patterns accept the same string, it must pick or combine them
/// into one, or fail the build.
pub type AmbiguityResolver<T> = dyn Fn(&[T]) -> Result<T, DfaError>;

/// A shared store of condensed pre-built DFAs. Implementations provide
/// their own synchronization.
pub trait BuilderCache: Send + Sync {
    /// The item previously cached under `key`, if any.
    fn get_cached_item(&self, key: &str) -> Option<String>;

    /// Called when an item has been built, giving the cache an opportunity
    /// to store it.
    fn maybe_cache_item(&self, key: &str, item: &str);
}

/// A [`BuilderCache`] backed by an in-process map, with a hit counter.
#[derive(Default)]
pub struct MemBuilderCache {
    entries: Mutex<HashMap<String, String>>,
    hits: AtomicUsize,
}

impl MemBuilderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Number of successful lookups so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }
}

impl BuilderCache for MemBuilderCache {
    fn get_cached_item(&self, key: &str) -> Option<String> {
        let item = self.entries.lock().get(key).cloned();
        if item.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        item
    }

    fn maybe_cache_item(&self, key: &str, item: &str) {
        self.entries
            .lock()
            .insert(key.to_string(), item.to_string());
    }
}

const DFA_TYPE_MATCHER: u64 = 0;
const DFA_TYPE_REVERSE_FINDER: u64 = 1;

/// Builds DFAs that find patterns in code-unit sequences.
pub struct DfaBuilder<T> {
    patterns: IndexMap<T, Vec<Pattern>>,
    cache: Option<Arc<dyn BuilderCache>>,
}

impl<T> Default for DfaBuilder<T>
where
    T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DfaBuilder<T>
where
    T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + 'static,
{
    /// A builder with no cache.
    pub fn new() -> Self {
        Self {
            patterns: IndexMap::new(),
            cache: None,
        }
    }

    /// A builder that consults `cache` before building and offers it every
    /// freshly built DFA.
    pub fn with_cache(cache: Arc<dyn BuilderCache>) -> Self {
        Self {
            patterns: IndexMap::new(),
            cache: Some(cache),
        }
    }

    /// Forget every pattern added so far.
    pub fn clear(&mut self) {
        self.patterns.clear();
    }

    /// Associate `pattern` with `accept`. A tag may have several patterns;
    /// the tag is reported when any of them matches.
    pub fn add_pattern(&mut self, pattern: Pattern, accept: T) {
        self.patterns
            .entry(accept)
            .or_insert_with(Vec::new)
            .push(pattern);
    }

    /// Build one DFA matching every pattern added to this builder.
    pub fn build(
        &self,
        resolver: Option<&AmbiguityResolver<T>>,
    ) -> Result<DfaState<T>, DfaError> {
        let all: Vec<Vec<T>> = vec![self.patterns.keys().cloned().collect()];
        let mut states = self.build_languages(&all, resolver)?;
        Ok(states.remove(0))
    }

    /// Build one DFA for the patterns whose tags are in `language`.
    pub fn build_language(
        &self,
        language: &[T],
        resolver: Option<&AmbiguityResolver<T>>,
    ) -> Result<DfaState<T>, DfaError> {
        let languages = vec![language.to_vec()];
        let mut states = self.build_languages(&languages, resolver)?;
        Ok(states.remove(0))
    }

    /// Build DFAs for several languages simultaneously. The returned start
    /// states correspond to `languages` by position and share one minimized
    /// packed table.
    pub fn build_languages(
        &self,
        languages: &[Vec<T>],
        resolver: Option<&AmbiguityResolver<T>>,
    ) -> Result<Vec<DfaState<T>>, DfaError> {
        if languages.is_empty() {
            return Ok(Vec::new());
        }
        let packed = match &self.cache {
            Some(cache) => {
                let key = self.cache_key(DFA_TYPE_MATCHER, languages);
                match cache.get_cached_item(&key) {
                    Some(text) => PackedDfa::produce(&text)
                        .map_err(|_| DfaError::CorruptCache(key))?,
                    None => {
                        let packed = self.assemble(languages, resolver)?;
                        cache.maybe_cache_item(&key, &packed.condense()?);
                        packed
                    }
                }
            }
            None => self.assemble(languages, resolver)?,
        };
        Ok(Arc::new(packed).start_states())
    }

    /// Build the reverse finder for every pattern in this builder.
    ///
    /// Driven over a string backwards from the end, the reverse finder
    /// reports `true` at exactly the positions where a non-empty match of
    /// some pattern starts. Gating a forward scan on those positions is much
    /// faster than attempting a match everywhere, especially on inputs with
    /// few matches.
    pub fn build_reverse_finder(&self) -> Result<DfaState<bool>, DfaError> {
        let all: Vec<Vec<T>> = vec![self.patterns.keys().cloned().collect()];
        self.build_reverse_finder_for(&all)
    }

    /// Build the reverse finder for the union of the given languages.
    pub fn build_reverse_finder_for(
        &self,
        languages: &[Vec<T>],
    ) -> Result<DfaState<bool>, DfaError> {
        let packed = match &self.cache {
            Some(cache) => {
                let key = self.cache_key(DFA_TYPE_REVERSE_FINDER, languages);
                match cache.get_cached_item(&key) {
                    Some(text) => PackedDfa::produce(&text)
                        .map_err(|_| DfaError::CorruptCache(key))?,
                    None => {
                        let packed = self.assemble_reverse_finder(languages)?;
                        cache.maybe_cache_item(&key, &packed.condense()?);
                        packed
                    }
                }
            }
            None => self.assemble_reverse_finder(languages)?,
        };
        let mut states = Arc::new(packed).start_states();
        Ok(states.remove(0))
    }

    /// Package a forward DFA and a reverse finder for all patterns into a
    /// [`StringSearcher`](crate::StringSearcher).
    pub fn build_string_searcher(
        &self,
        resolver: Option<&AmbiguityResolver<T>>,
    ) -> Result<crate::StringSearcher<T>, DfaError> {
        Ok(crate::StringSearcher::new(
            self.build(resolver)?,
            self.build_reverse_finder()?,
        ))
    }

    fn assemble(
        &self,
        languages: &[Vec<T>],
        resolver: Option<&AmbiguityResolver<T>>,
    ) -> Result<PackedDfa<T>, DfaError> {
        let mut nfa: Nfa<T> = Nfa::new();
        let nfa_start_states: Vec<u32> =
            languages.iter().map(|_| nfa.add_state(None)).collect();

        for (tag, pattern_list) in &self.patterns {
            if pattern_list.is_empty() {
                continue;
            }
            // One accept state per tag, shared by every language that
            // includes the tag.
            let mut match_start: Option<u32> = None;
            for (i, language) in languages.iter().enumerate() {
                if !language.contains(tag) {
                    continue;
                }
                let start = *match_start.get_or_insert_with(|| {
                    let accept_state = nfa.add_state(Some(tag.clone()));
                    if pattern_list.len() > 1 {
                        let union = nfa.add_state(None);
                        for pattern in pattern_list {
                            let fragment = pattern.add_to_nfa(&mut nfa, accept_state);
                            nfa.add_epsilon(union, fragment);
                        }
                        union
                    } else {
                        pattern_list[0].add_to_nfa(&mut nfa, accept_state)
                    }
                });
                nfa.add_epsilon(nfa_start_states[i], start);
            }
        }

        let raw = dfa_from_nfa(
            &nfa,
            &nfa_start_states,
            resolver.unwrap_or(&default_resolver),
        )?;
        let minimal = minimize(&raw);
        Ok(PackedDfa::from_raw(&minimal))
    }

    fn assemble_reverse_finder(&self, languages: &[Vec<T>]) -> Result<PackedDfa<bool>, DfaError> {
        let mut nfa: Nfa<bool> = Nfa::new();
        let mut start = nfa.add_state(None);
        let end_state = nfa.add_state(Some(true));

        // An NFA matching the reverse of every included pattern.
        for (tag, pattern_list) in &self.patterns {
            if pattern_list.is_empty() {
                continue;
            }
            for language in languages {
                if !language.contains(tag) {
                    continue;
                }
                for pattern in pattern_list {
                    let fragment = pattern.reversed().add_to_nfa(&mut nfa, end_state);
                    nfa.add_epsilon(start, fragment);
                }
            }
        }

        // Omit the empty string, then allow anything first so the finder
        // can flag every start position in one right-to-left sweep.
        start = nfa.disemptify(start);
        start = Pattern::maybe_repeat(Pattern::char_range(CharRange::all()))
            .add_to_nfa(&mut nfa, start);

        let raw = dfa_from_nfa(&nfa, &[start], &default_resolver)?;
        let minimal = minimize(&raw);
        Ok(PackedDfa::from_raw(&minimal))
    }

    fn cache_key(&self, dfa_type: u64, languages: &[Vec<T>]) -> String {
        let mut mixer = TripleMixer::new();
        mixer.write(dfa_type);
        mixer.write(languages.len() as u64);
        for (tag, pattern_list) in &self.patterns {
            if pattern_list.is_empty() || !languages.iter().any(|l| l.contains(tag)) {
                continue;
            }
            mixer.write(pattern_list.len() as u64);
            if languages.len() > 1 {
                // Membership bitmap, 32 languages per word.
                let mut bits: u64 = u64::from(languages[0].contains(tag));
                for (i, language) in languages.iter().enumerate().skip(1) {
                    if i & 31 == 0 {
                        mixer.write(bits);
                        bits = 0;
                    }
                    if language.contains(tag) {
                        bits |= 1 << (i & 31);
                    }
                }
                mixer.write(bits);
            }
            for pattern in pattern_list {
                mixer.write(pattern.structural_hash());
            }
        }
        mixer.key_digest()
    }
}

/// Compile a caller-assembled NFA through subset construction and
/// minimization. The returned start states correspond to `nfa_start_states`
/// by position. When `cache` is given, the result is memoized under a key
/// derived from the start states and the NFA's structural hash.
pub fn build_from_nfa<T>(
    nfa: &Nfa<T>,
    nfa_start_states: &[u32],
    resolver: Option<&AmbiguityResolver<T>>,
    cache: Option<&dyn BuilderCache>,
) -> Result<Vec<DfaState<T>>, DfaError>
where
    T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + 'static,
{
    let key = cache.map(|_| {
        let mut mixer = TripleMixer::new();
        for &s in nfa_start_states {
            mixer.write(s as u64);
        }
        mixer.write(nfa.structural_hash());
        mixer.key_digest()
    });
    if let (Some(cache), Some(key)) = (cache, &key) {
        if let Some(text) = cache.get_cached_item(key) {
            let packed: PackedDfa<T> =
                PackedDfa::produce(&text).map_err(|_| DfaError::CorruptCache(key.clone()))?;
            return Ok(Arc::new(packed).start_states());
        }
    }
    let raw = dfa_from_nfa(nfa, nfa_start_states, resolver.unwrap_or(&default_resolver))?;
    let packed = PackedDfa::from_raw(&minimize(&raw));
    if let (Some(cache), Some(key)) = (cache, &key) {
        cache.maybe_cache_item(key, &packed.condense()?);
    }
    Ok(Arc::new(packed).start_states())
}

fn default_resolver<T: Clone + Debug>(tags: &[T]) -> Result<T, DfaError> {
    Err(DfaError::Ambiguity(
        tags.iter().map(|t| format!("{t:?}")).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_builder() -> DfaBuilder<String> {
        let mut builder = DfaBuilder::new();
        builder.add_pattern(Pattern::literal("if"), "IF".to_string());
        builder.add_pattern(Pattern::literal("for"), "FOR".to_string());
        builder.add_pattern(
            Pattern::seq(vec![
                Pattern::char_range(CharRange::ascii_lower()),
                Pattern::repeat(Pattern::char_range(CharRange::digits())),
            ]),
            "NAME".to_string(),
        );
        builder
    }

    fn prefer_first(tags: &[String]) -> Result<String, DfaError> {
        Ok(tags[0].clone())
    }

    fn run(start: &DfaState<String>, text: &str) -> Option<String> {
        let mut state = start.clone();
        for u in text.encode_utf16() {
            state = state.next_state(u)?;
        }
        state.accept().cloned()
    }

    #[test]
    fn test_build_matches_all_patterns() {
        let start = keyword_builder().build(Some(&prefer_first)).unwrap();
        assert_eq!(run(&start, "if"), Some("IF".to_string()));
        assert_eq!(run(&start, "for"), Some("FOR".to_string()));
        assert_eq!(run(&start, "x123"), Some("NAME".to_string()));
        assert_eq!(run(&start, "xyz"), None);
        assert_eq!(run(&start, "iff"), None);
    }

    #[test]
    fn test_default_resolver_reports_ambiguity() {
        let mut builder = DfaBuilder::new();
        builder.add_pattern(Pattern::literal("dup"), "A".to_string());
        builder.add_pattern(Pattern::literal("dup"), "B".to_string());
        match builder.build(None) {
            Err(DfaError::Ambiguity(tags)) => assert_eq!(tags.len(), 2),
            other => panic!("expected ambiguity error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_language_list() {
        let states = keyword_builder().build_languages(&[], None).unwrap();
        assert!(states.is_empty());
    }

    #[test]
    fn test_empty_pattern_list_for_tag_is_ignored() {
        let mut builder = keyword_builder();
        builder.patterns.insert("GHOST".to_string(), Vec::new());
        let start = builder.build(Some(&prefer_first)).unwrap();
        assert_eq!(run(&start, "if"), Some("IF".to_string()));
    }

    #[test]
    fn test_multiple_languages_share_states() {
        let builder = keyword_builder();
        let langs = vec![
            vec!["IF".to_string(), "NAME".to_string()],
            vec!["FOR".to_string()],
        ];
        let states = builder.build_languages(&langs, Some(&prefer_first)).unwrap();
        assert_eq!(states.len(), 2);
        assert!(Arc::ptr_eq(states[0].dfa(), states[1].dfa()));
        assert_eq!(run(&states[0], "if"), Some("IF".to_string()));
        assert_eq!(run(&states[0], "for"), None);
        assert_eq!(run(&states[1], "for"), Some("FOR".to_string()));
        assert_eq!(run(&states[1], "if"), None);
    }

    #[test]
    fn test_multiple_patterns_per_tag() {
        let mut builder = DfaBuilder::new();
        builder.add_pattern(Pattern::literal("cat"), "PET".to_string());
        builder.add_pattern(Pattern::literal("dog"), "PET".to_string());
        let start = builder.build(None).unwrap();
        assert_eq!(run(&start, "cat"), Some("PET".to_string()));
        assert_eq!(run(&start, "dog"), Some("PET".to_string()));
        assert_eq!(run(&start, "cog"), None);
    }

    #[test]
    fn test_cache_stores_once_and_hits_on_rebuild() {
        let cache = Arc::new(MemBuilderCache::new());

        let mut builder: DfaBuilder<String> = DfaBuilder::with_cache(cache.clone());
        builder.add_pattern(Pattern::literal("if"), "IF".to_string());
        builder.add_pattern(Pattern::literal("for"), "FOR".to_string());
        builder.build(None).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 0);

        builder.clear();
        builder.add_pattern(Pattern::literal("if"), "IF".to_string());
        builder.add_pattern(Pattern::literal("for"), "FOR".to_string());
        let start = builder.build(None).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(run(&start, "for"), Some("FOR".to_string()));

        let mut fresh: DfaBuilder<String> = DfaBuilder::with_cache(cache.clone());
        fresh.add_pattern(Pattern::literal("if"), "IF".to_string());
        fresh.add_pattern(Pattern::literal("for"), "FOR".to_string());
        fresh.build(None).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 2);
    }

    #[test]
    fn test_corrupt_cache_entry_is_reported() {
        let cache = Arc::new(MemBuilderCache::new());
        let mut builder: DfaBuilder<String> = DfaBuilder::with_cache(cache.clone());
        builder.add_pattern(Pattern::literal("if"), "IF".to_string());
        builder.build(None).unwrap();

        // Flip a byte in the stored payload.
        let key = {
            let entries = cache.entries.lock();
            entries.keys().next().cloned()
        }
        .unwrap();
        {
            let mut entries = cache.entries.lock();
            let payload = entries.get_mut(&key).unwrap();
            payload.replace_range(0..1, "~");
        }
        match builder.build(None) {
            Err(DfaError::CorruptCache(k)) => assert_eq!(k, key),
            other => panic!("expected corrupt cache error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_cache_key_is_stable_and_order_sensitive() {
        let a = keyword_builder();
        let b = keyword_builder();
        let langs: Vec<Vec<String>> = vec![a.patterns.keys().cloned().collect()];
        assert_eq!(
            a.cache_key(DFA_TYPE_MATCHER, &langs),
            b.cache_key(DFA_TYPE_MATCHER, &langs)
        );
        assert_ne!(
            a.cache_key(DFA_TYPE_MATCHER, &langs),
            a.cache_key(DFA_TYPE_REVERSE_FINDER, &langs)
        );

        let mut reordered = DfaBuilder::new();
        reordered.add_pattern(Pattern::literal("for"), "FOR".to_string());
        reordered.add_pattern(Pattern::literal("if"), "IF".to_string());
        reordered.add_pattern(
            Pattern::seq(vec![
                Pattern::char_range(CharRange::ascii_lower()),
                Pattern::repeat(Pattern::char_range(CharRange::digits())),
            ]),
            "NAME".to_string(),
        );
        assert_ne!(
            a.cache_key(DFA_TYPE_MATCHER, &langs),
            reordered.cache_key(DFA_TYPE_MATCHER, &langs)
        );
    }

    #[test]
    fn test_build_from_nfa() {
        let mut nfa: Nfa<u8> = Nfa::new();
        let start = nfa.add_state(None);
        let accept = nfa.add_state(Some(7));
        nfa.add_transition(start, accept, 'a' as u16, 'z' as u16);
        let states = build_from_nfa(&nfa, &[start], None, None).unwrap();
        assert_eq!(states.len(), 1);
        let next = states[0].next_state('q' as u16).unwrap();
        assert_eq!(next.accept(), Some(&7));
        assert!(states[0].next_state('A' as u16).is_none());
    }

    #[test]
    fn test_build_from_nfa_uses_cache() {
        let cache = MemBuilderCache::new();
        let mut nfa: Nfa<u8> = Nfa::new();
        let start = nfa.add_state(None);
        let accept = nfa.add_state(Some(1));
        nfa.add_transition(start, accept, 0, 9);
        build_from_nfa(&nfa, &[start], None, Some(&cache)).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 0);
        build_from_nfa(&nfa, &[start], None, Some(&cache)).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
    }
}
