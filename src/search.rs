//! Match drivers: longest-match scanning, whole-string searching, and
//! search-and-replace.
//!
//! Drivers operate on `&[u16]` code-unit slices; the `&str` conveniences
//! convert through UTF-16. A driver holds per-invocation scratch only, so
//! construct one per thread or task; the packed DFA behind it is shared
//! freely.

use std::sync::Arc;

use crate::automaton::DfaState;
use crate::builder::{AmbiguityResolver, DfaBuilder};
use crate::char_range::{to_lower_char, to_upper_char};
use crate::pattern::Pattern;
use crate::DfaError;

/// Finds the longest pattern match at a given position.
pub struct StringMatcher<T> {
    start: DfaState<T>,
}

impl<T: Clone> StringMatcher<T> {
    pub fn new(start: DfaState<T>) -> Self {
        Self { start }
    }

    /// The longest match starting at `pos`, as `(end, tag)` where `end` is
    /// one past the last matched code unit. `None` when no pattern matches.
    pub fn match_at(&self, src: &[u16], pos: usize) -> Option<(usize, T)> {
        let mut state = self.start.clone();
        let mut best = state.accept().map(|tag| (pos, tag.clone()));
        let mut i = pos;
        while i < src.len() {
            match state.next_state(src[i]) {
                Some(next) => {
                    state = next;
                    i += 1;
                    if let Some(tag) = state.accept() {
                        best = Some((i, tag.clone()));
                    }
                }
                None => break,
            }
        }
        best
    }

    /// The DFA start state this matcher scans from.
    pub fn start(&self) -> &DfaState<T> {
        &self.start
    }
}

/// Finds all non-overlapping matches in a string, in order.
///
/// A first pass drives the reverse finder right-to-left over the whole
/// input, flagging every position where some non-empty match begins. The
/// forward pass then only attempts matches at flagged positions, skipping
/// the bulk of a non-matching input in O(1) per position.
pub struct StringSearcher<T> {
    matcher: StringMatcher<T>,
    reverse_finder: DfaState<bool>,
}

impl<T: Clone> StringSearcher<T> {
    pub fn new(start: DfaState<T>, reverse_finder: DfaState<bool>) -> Self {
        Self {
            matcher: StringMatcher::new(start),
            reverse_finder,
        }
    }

    /// The forward longest-match driver.
    pub fn matcher(&self) -> &StringMatcher<T> {
        &self.matcher
    }

    /// Flags for every position of `src`: true where some non-empty match
    /// begins.
    pub fn match_starts(&self, src: &[u16]) -> Vec<bool> {
        let mut flags = vec![false; src.len()];
        let mut state = self.reverse_finder.clone();
        for i in (0..src.len()).rev() {
            // The leading any-run makes the finder total; a dead step can
            // only mean a caller-supplied finder, so start over.
            state = match state.next_state(src[i]) {
                Some(next) => next,
                None => self.reverse_finder.clone(),
            };
            if state.accept().copied().unwrap_or(false) {
                flags[i] = true;
            }
        }
        flags
    }

    /// Iterate `(start, end, tag)` for every match, in strictly ascending,
    /// non-overlapping order.
    pub fn find_all<'a>(&'a self, src: &'a [u16]) -> Matches<'a, T> {
        Matches {
            searcher: self,
            src,
            flags: self.match_starts(src),
            pos: 0,
        }
    }

    /// Replace every match in `text`, choosing the replacement text per
    /// match via `selector`. The selector writes into the destination and
    /// returns 0, or a source position to resume scanning from.
    pub fn find_and_replace(
        &self,
        text: &str,
        mut selector: impl FnMut(&mut Vec<u16>, &T, &[u16], usize, usize) -> usize,
    ) -> String {
        let src: Vec<u16> = text.encode_utf16().collect();
        let flags = self.match_starts(&src);
        let mut dest: Vec<u16> = Vec::with_capacity(src.len());
        let mut pos = 0;
        while pos < src.len() {
            if flags[pos] {
                if let Some((end, tag)) = self.matcher.match_at(&src, pos) {
                    if end > pos {
                        let resume = selector(&mut dest, &tag, &src, pos, end);
                        pos = if resume == 0 { end } else { resume.max(pos + 1) };
                        continue;
                    }
                }
            }
            dest.push(src[pos]);
            pos += 1;
        }
        String::from_utf16_lossy(&dest)
    }
}

/// Iterator over a searcher's matches. See [`StringSearcher::find_all`].
pub struct Matches<'a, T> {
    searcher: &'a StringSearcher<T>,
    src: &'a [u16],
    flags: Vec<bool>,
    pos: usize,
}

impl<T: Clone> Iterator for Matches<'_, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.src.len() {
            let pos = self.pos;
            if self.flags[pos] {
                if let Some((end, tag)) = self.searcher.matcher.match_at(self.src, pos) {
                    if end > pos {
                        self.pos = end;
                        return Some((pos, end, tag));
                    }
                }
            }
            self.pos += 1;
        }
        None
    }
}

/// Writes replacement text for one match. Receives the destination buffer,
/// the source, and the match bounds; returns 0 to resume scanning right
/// after the match, or an absolute source position (greater than the match
/// start, possibly before its end) to resume from.
pub type StringReplacement = Arc<dyn Fn(&mut Vec<u16>, &[u16], usize, usize) -> usize + Send + Sync>;

/// Common replacements for use with [`SearchAndReplaceBuilder`].
pub mod replacements {
    use super::*;

    /// Leaves the matching substring unmodified.
    pub fn ignore() -> StringReplacement {
        Arc::new(|dest, src, start, end| {
            dest.extend_from_slice(&src[start..end]);
            0
        })
    }

    /// Deletes the matching substring.
    pub fn delete() -> StringReplacement {
        Arc::new(|_dest, _src, _start, _end| 0)
    }

    /// Converts the matching substring to upper case, code unit by code
    /// unit.
    pub fn to_upper() -> StringReplacement {
        Arc::new(|dest, src, start, end| {
            dest.extend(src[start..end].iter().map(|&u| to_upper_char(u)));
            0
        })
    }

    /// Converts the matching substring to lower case, code unit by code
    /// unit.
    pub fn to_lower() -> StringReplacement {
        Arc::new(|dest, src, start, end| {
            dest.extend(src[start..end].iter().map(|&u| to_lower_char(u)));
            0
        })
    }

    /// Collapses the match to a single newline if it contains one,
    /// otherwise to a single space.
    pub fn space_or_newline() -> StringReplacement {
        Arc::new(|dest, src, start, end| {
            if src[start..end].contains(&(b'\n' as u16)) {
                dest.push(b'\n' as u16);
            } else {
                dest.push(b' ' as u16);
            }
            0
        })
    }

    /// Replaces every match with `text`.
    pub fn literal(text: &str) -> StringReplacement {
        let units: Vec<u16> = text.encode_utf16().collect();
        Arc::new(move |dest, _src, _start, _end| {
            dest.extend_from_slice(&units);
            0
        })
    }

    /// Surrounds the inner replacement's output with `prefix` and `suffix`.
    pub fn surround(prefix: &str, inner: StringReplacement, suffix: &str) -> StringReplacement {
        let prefix: Vec<u16> = prefix.encode_utf16().collect();
        let suffix: Vec<u16> = suffix.encode_utf16().collect();
        Arc::new(move |dest, src, start, end| {
            dest.extend_from_slice(&prefix);
            let resume = inner(dest, src, start, end);
            dest.extend_from_slice(&suffix);
            resume
        })
    }
}

/// Accumulates `(pattern, replacement)` pairs and builds a
/// [`SearchAndReplace`].
///
/// When one string is matched by several patterns, the earliest-added
/// replacement wins.
#[derive(Default)]
pub struct SearchAndReplaceBuilder {
    builder: DfaBuilder<usize>,
    replacements: Vec<StringReplacement>,
}

impl SearchAndReplaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every replacement added so far.
    pub fn clear(&mut self) {
        self.builder.clear();
        self.replacements.clear();
    }

    /// Apply `replacement` wherever `pattern` matches.
    pub fn add_replacement(
        &mut self,
        pattern: Pattern,
        replacement: StringReplacement,
    ) -> &mut Self {
        self.builder.add_pattern(pattern, self.replacements.len());
        self.replacements.push(replacement);
        self
    }

    /// Build the replacer for everything added so far.
    pub fn build_string_replacer(&self) -> Result<SearchAndReplace, DfaError> {
        let earliest: &AmbiguityResolver<usize> =
            &|tags: &[usize]| Ok(tags.iter().copied().min().unwrap_or(0));
        Ok(SearchAndReplace {
            searcher: self.builder.build_string_searcher(Some(earliest))?,
            replacements: self.replacements.clone(),
        })
    }
}

/// Rewrites every pattern match in a string. Built by
/// [`SearchAndReplaceBuilder`].
pub struct SearchAndReplace {
    searcher: StringSearcher<usize>,
    replacements: Vec<StringReplacement>,
}

impl SearchAndReplace {
    /// Apply every replacement to `text` and return the rewritten string.
    pub fn apply(&self, text: &str) -> String {
        self.searcher.find_and_replace(text, |dest, &tag, src, start, end| {
            self.replacements[tag](dest, src, start, end)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_range::CharRange;

    fn units(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    fn ident_pattern() -> Pattern {
        // [A-Za-z_][A-Za-z0-9_]*
        let first = CharRange::builder()
            .add_range(b'A' as u16, b'Z' as u16)
            .add_range(b'a' as u16, b'z' as u16)
            .add_char(b'_' as u16)
            .build();
        let rest = first.union(&CharRange::digits());
        Pattern::seq(vec![
            Pattern::char_range(first),
            Pattern::repeat(Pattern::char_range(rest)),
        ])
    }

    fn lower_word1() -> Pattern {
        Pattern::repeat1(Pattern::char_range(CharRange::ascii_lower()))
    }

    fn alnum_word1() -> Pattern {
        let alnum = CharRange::ascii_lower().union(&CharRange::digits());
        Pattern::repeat1(Pattern::char_range(alnum))
    }

    #[test]
    fn test_longest_match_prefers_identifier() {
        let mut builder = DfaBuilder::new();
        builder.add_pattern(Pattern::literal("if"), "IF".to_string());
        builder.add_pattern(ident_pattern(), "ID".to_string());
        let prefer_if: &AmbiguityResolver<String> = &|tags| {
            Ok(tags
                .iter()
                .find(|t| t.as_str() == "IF")
                .cloned()
                .unwrap_or_else(|| tags[0].clone()))
        };
        let searcher = builder.build_string_searcher(Some(prefer_if)).unwrap();
        let src = units("if ifx");
        let matches: Vec<_> = searcher.find_all(&src).collect();
        assert_eq!(
            matches,
            vec![
                (0, 2, "IF".to_string()),
                (3, 6, "ID".to_string()),
            ]
        );
    }

    #[test]
    fn test_match_at_longest() {
        let mut builder = DfaBuilder::new();
        builder.add_pattern(lower_word1(), 0usize);
        let searcher = builder.build_string_searcher(None).unwrap();
        let src = units("abc1");
        assert_eq!(searcher.matcher().match_at(&src, 0), Some((3, 0)));
        assert_eq!(searcher.matcher().match_at(&src, 3), None);
    }

    #[test]
    fn test_match_starts_flags_exactly_the_viable_positions() {
        let mut builder = DfaBuilder::new();
        builder.add_pattern(Pattern::literal("ab"), 0usize);
        let searcher = builder.build_string_searcher(None).unwrap();
        let src = units("xabyab");
        let flags = searcher.match_starts(&src);
        assert_eq!(flags, vec![false, true, false, false, true, false]);
    }

    #[test]
    fn test_find_all_is_ascending_and_non_overlapping() {
        let mut builder = DfaBuilder::new();
        builder.add_pattern(alnum_word1(), 0usize);
        let searcher = builder.build_string_searcher(None).unwrap();
        let src = units(" one two  three ");
        let matches: Vec<_> = searcher.find_all(&src).collect();
        assert_eq!(matches, vec![(1, 4, 0), (5, 8, 0), (10, 15, 0)]);
    }

    #[test]
    fn test_replacement_surround_to_upper() {
        let mut builder = SearchAndReplaceBuilder::new();
        let letters = CharRange::ascii_lower().union(&CharRange::ascii_upper());
        builder.add_replacement(
            Pattern::repeat1(Pattern::char_range(letters)),
            replacements::surround("(", replacements::to_upper(), ")"),
        );
        let replacer = builder.build_string_replacer().unwrap();
        assert_eq!(replacer.apply(" one two three "), " (ONE) (TWO) (THREE) ");
    }

    #[test]
    fn test_replacement_delete_ignore() {
        let mut builder = SearchAndReplaceBuilder::new();
        builder.add_replacement(Pattern::literal("three"), replacements::ignore());
        builder.add_replacement(alnum_word1(), replacements::delete());
        let replacer = builder.build_string_replacer().unwrap();
        assert_eq!(
            replacer.apply(" one two  three   four five "),
            "    three     "
        );
    }

    #[test]
    fn test_replacement_space_or_newline() {
        let mut builder = SearchAndReplaceBuilder::new();
        builder.add_replacement(
            Pattern::repeat1(Pattern::char_range(CharRange::ascii_white())),
            replacements::space_or_newline(),
        );
        let replacer = builder.build_string_replacer().unwrap();
        assert_eq!(
            replacer.apply("    one \n two\r\n\r\nthree  \t four\n\n\nfive "),
            " one\ntwo\nthree four\nfive "
        );
    }

    #[test]
    fn test_replacement_case_insensitive_case_folding() {
        let mut builder = SearchAndReplaceBuilder::new();
        let tail = Pattern::repeat(Pattern::char_range(CharRange::ascii_lower()));
        builder.add_replacement(
            Pattern::case_insensitive(Pattern::seq(vec![
                Pattern::literal("u"),
                tail.clone(),
            ])),
            replacements::to_upper(),
        );
        builder.add_replacement(
            Pattern::case_insensitive(Pattern::seq(vec![Pattern::literal("l"), tail])),
            replacements::to_lower(),
        );
        let replacer = builder.build_string_replacer().unwrap();
        assert_eq!(replacer.apply("lAbCd uAbCd"), "labcd UABCD");
    }

    #[test]
    fn test_replacement_literal_string() {
        let mut builder = SearchAndReplaceBuilder::new();
        let letters = CharRange::ascii_lower().union(&CharRange::ascii_upper());
        builder.add_replacement(
            Pattern::repeat1(Pattern::char_range(letters)),
            replacements::literal("x"),
        );
        let replacer = builder.build_string_replacer().unwrap();
        assert_eq!(replacer.apply(" one two  three   four five "), " x x  x   x x ");
    }

    #[test]
    fn test_replacement_repositioning() {
        // Rewrite each "word word" pair as "word, " and resume at the second
        // word, chaining the pairs together.
        let mut builder = SearchAndReplaceBuilder::new();
        let word = alnum_word1();
        let spaces = Pattern::repeat1(Pattern::char_range(CharRange::single(b' ' as u16)));
        builder.add_replacement(
            Pattern::seq(vec![word.clone(), spaces, word]),
            Arc::new(|dest: &mut Vec<u16>, src: &[u16], start: usize, _end: usize| {
                let mut e = start;
                while src[e] != b' ' as u16 {
                    e += 1;
                }
                dest.extend_from_slice(&src[start..e]);
                dest.extend_from_slice(&units(", "));
                while src[e] == b' ' as u16 {
                    e += 1;
                }
                e
            }),
        );
        let replacer = builder.build_string_replacer().unwrap();
        assert_eq!(
            replacer.apply(" one two  three   four five "),
            " one, two, three, four, five "
        );
    }

    #[test]
    fn test_no_matches_copies_input() {
        let mut builder = SearchAndReplaceBuilder::new();
        builder.add_replacement(Pattern::literal("zzz"), replacements::delete());
        let replacer = builder.build_string_replacer().unwrap();
        assert_eq!(replacer.apply("nothing to see"), "nothing to see");
    }

    #[test]
    fn test_find_and_replace_with_selector() {
        let mut builder = DfaBuilder::new();
        builder.add_pattern(Pattern::literal("if"), "IF".to_string());
        builder.add_pattern(Pattern::literal("for"), "FOR".to_string());
        let searcher = builder.build_string_searcher(None).unwrap();
        let out = searcher.find_and_replace("if x for y", |dest, tag, src, s, e| {
            dest.push(b'[' as u16);
            dest.extend(tag.encode_utf16());
            dest.push(b'=' as u16);
            dest.extend_from_slice(&src[s..e]);
            dest.push(b']' as u16);
            0
        });
        assert_eq!(out, "[IF=if] x [FOR=for] y");
    }
}
