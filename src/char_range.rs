//! Character sets over 16-bit code units.
//!
//! A [`CharRange`] stores the set as a sorted boundary array: a code unit is
//! a member iff an odd number of boundaries are less than or equal to it.
//! This represents any subset of the code-unit space as a disjoint ordered
//! union of ranges while keeping membership a single binary search.
//!
//! [`CharRangeBuilder`] assembles sets incrementally from characters, ranges,
//! and other sets, supports complement/intersection/difference, and can make
//! a set case independent. Named Unicode category sets (`"L"`, `"Nd"`,
//! `"Word"`, ...) expand from embedded delta tables on first use and are
//! cached for the life of the process.

use std::sync::OnceLock;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::unicode_data::{CASE_DELTAS, CASE_LOWERS, CASE_UPPERS, CATEGORIES};

/// Largest code unit.
pub const MAX_CHAR: u16 = 0xFFFF;

/// An immutable set of 16-bit code units.
#[derive(Clone, PartialEq, Eq)]
pub struct CharRange {
    // Sorted, strictly increasing. A code unit c is in the set iff the
    // number of bounds <= c is odd. Even length unless the set contains
    // MAX_CHAR, in which case the final range has no closing bound.
    bounds: Vec<u16>,
}

impl std::fmt::Debug for CharRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharRange")
            .field("ranges", &self.ranges().collect::<Vec<_>>())
            .finish()
    }
}

impl std::hash::Hash for CharRange {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // FNV-1a over the boundary array, folding in code units.
        let mut hash: u64 = 0xCBF2_9CE4_8422_2325;
        for &b in &self.bounds {
            hash = (hash ^ b as u64).wrapping_mul(0x0000_0100_0000_01B3);
        }
        state.write_u64(hash);
    }
}

impl CharRange {
    /// The set containing every code unit.
    pub fn all() -> CharRange {
        CharRange { bounds: vec![0] }
    }

    /// The empty set.
    pub fn none() -> CharRange {
        CharRange { bounds: Vec::new() }
    }

    /// The set containing exactly `c`.
    pub fn single(c: u16) -> CharRange {
        CharRange::range(c, c)
    }

    /// The set of all code units from `from` to `to`, inclusive, in either
    /// order.
    pub fn range(from: u16, to: u16) -> CharRange {
        let (first, last) = if from <= to { (from, to) } else { (to, from) };
        let bounds = if last == MAX_CHAR {
            vec![first]
        } else {
            vec![first, last + 1]
        };
        CharRange { bounds }
    }

    /// The set of code units appearing in `chars`.
    pub fn any_of(chars: &str) -> CharRange {
        if chars.is_empty() {
            return CharRange::none();
        }
        CharRange::builder().add_chars(chars).build()
    }

    /// The set of every code unit NOT appearing in `chars`.
    pub fn not_any_of(chars: &str) -> CharRange {
        if chars.is_empty() {
            return CharRange::all();
        }
        CharRange::builder().add_chars(chars).invert().build()
    }

    /// Decimal digits 0-9.
    pub fn digits() -> CharRange {
        CharRange::range(b'0' as u16, b'9' as u16)
    }

    /// Octal digits 0-7.
    pub fn octal_digits() -> CharRange {
        CharRange::range(b'0' as u16, b'7' as u16)
    }

    /// Hexadecimal digits 0-9, a-f, and A-F.
    pub fn hex_digits() -> CharRange {
        CharRange::builder()
            .add_range(b'0' as u16, b'9' as u16)
            .add_range(b'A' as u16, b'F' as u16)
            .add_range(b'a' as u16, b'f' as u16)
            .build()
    }

    /// ASCII lower-case letters.
    pub fn ascii_lower() -> CharRange {
        CharRange::range(b'a' as u16, b'z' as u16)
    }

    /// ASCII upper-case letters.
    pub fn ascii_upper() -> CharRange {
        CharRange::range(b'A' as u16, b'Z' as u16)
    }

    /// ASCII whitespace, i.e. all code units from 0 through the space.
    pub fn ascii_white() -> CharRange {
        CharRange::range(0, b' ' as u16)
    }

    /// Look up a named Unicode category set (`"L"`, `"Lu"`, `"Nd"`, `"P"`,
    /// `"Word"`, `"IdentifierStart"`, ...). The boundary array is expanded
    /// from the embedded delta tables on first use and cached.
    pub fn category(name: &str) -> Option<CharRange> {
        static CACHE: OnceLock<Mutex<FxHashMap<&'static str, CharRange>>> = OnceLock::new();
        let cache = CACHE.get_or_init(|| Mutex::new(FxHashMap::default()));
        let mut guard = cache.lock();
        if let Some(r) = guard.get(name) {
            return Some(r.clone());
        }
        let &(interned, directory, data) = CATEGORIES.iter().find(|(n, _, _)| *n == name)?;
        let range = from_category_data(directory, data);
        guard.insert(interned, range.clone());
        Some(range)
    }

    /// Start building a set incrementally.
    pub fn builder() -> CharRangeBuilder {
        CharRangeBuilder::new()
    }

    /// True iff `c` is in the set.
    pub fn contains(&self, c: u16) -> bool {
        self.bounds.partition_point(|&b| b <= c) & 1 != 0
    }

    /// True iff the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// The set of code units this one does not contain.
    pub fn complement(&self) -> CharRange {
        if self.bounds.is_empty() {
            return CharRange::all();
        }
        if self.bounds[0] == 0 {
            CharRange {
                bounds: self.bounds[1..].to_vec(),
            }
        } else {
            let mut bounds = Vec::with_capacity(self.bounds.len() + 1);
            bounds.push(0);
            bounds.extend_from_slice(&self.bounds);
            CharRange { bounds }
        }
    }

    /// The union of this set and `other`.
    pub fn union(&self, other: &CharRange) -> CharRange {
        CharRange::builder()
            .add_range_of(self)
            .add_range_of(other)
            .build()
    }

    /// The intersection of this set and `other`.
    pub fn intersect(&self, other: &CharRange) -> CharRange {
        CharRange::builder()
            .add_range_of(self)
            .intersect_with(other)
            .build()
    }

    /// This set with every member of `other` removed.
    pub fn exclude(&self, other: &CharRange) -> CharRange {
        CharRange::builder()
            .add_range_of(self)
            .exclude_range(other)
            .build()
    }

    /// The raw boundary array.
    pub fn bounds(&self) -> &[u16] {
        &self.bounds
    }

    /// Iterate the disjoint inclusive ranges `(first, last)` of the set in
    /// ascending order.
    pub fn ranges(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        (0..self.bounds.len()).step_by(2).map(move |i| {
            let first = self.bounds[i];
            let last = if i + 1 < self.bounds.len() {
                self.bounds[i + 1] - 1
            } else {
                MAX_CHAR
            };
            (first, last)
        })
    }

    fn from_bounds(bounds: Vec<u16>) -> CharRange {
        CharRange { bounds }
    }
}

fn from_category_data(directory: &[u16], data: &str) -> CharRange {
    let mut b = CharRange::builder();
    let mut j: u32 = 0;
    let mut chars = data.chars();
    while let (Some(a), Some(z)) = (chars.next(), chars.next()) {
        j += directory[a as usize - 32] as u32;
        let first = j as u16;
        j += directory[z as usize - 32] as u32;
        b.add_range(first, j as u16);
    }
    b.build()
}

/// Incrementally builds [`CharRange`]s.
///
/// Starts empty; add and remove characters, then call
/// [`build`](CharRangeBuilder::build) to produce an immutable set. The
/// builder may keep being modified and used to produce further sets.
pub struct CharRangeBuilder {
    // Breakpoint multiset. An "in" at code unit c is the key c*2; an "out"
    // at c is c*2+1 and means the set stops just before c. A unit is in the
    // set when the signed in/out depth at or before it is positive. In
    // normalized form the keys are sorted and strictly alternate in, out.
    inouts: Vec<u32>,
    normalized: bool,
}

impl Default for CharRangeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CharRangeBuilder {
    pub fn new() -> Self {
        Self {
            inouts: Vec::new(),
            normalized: true,
        }
    }

    /// Forget everything added so far; `build` will return the empty set.
    pub fn clear(&mut self) -> &mut Self {
        self.inouts.clear();
        self.normalized = true;
        self
    }

    /// Add a single code unit to the set.
    pub fn add_char(&mut self, c: u16) -> &mut Self {
        self.add_range(c, c)
    }

    /// Add every code unit of `chars` to the set.
    pub fn add_chars(&mut self, chars: &str) -> &mut Self {
        for u in chars.encode_utf16() {
            self.add_range(u, u);
        }
        self
    }

    /// Add all code units from `first` to `last` inclusive, in either order.
    pub fn add_range(&mut self, first: u16, last: u16) -> &mut Self {
        let (first, last) = if first <= last {
            (first, last)
        } else {
            (last, first)
        };
        self.normalized = false;
        self.inouts.push((first as u32) << 1);
        if last < MAX_CHAR {
            self.inouts.push(((last as u32 + 1) << 1) | 1);
        }
        self
    }

    /// Add every member of another set.
    pub fn add_range_of(&mut self, cr: &CharRange) -> &mut Self {
        self.inouts.reserve(cr.bounds.len());
        for (i, &b) in cr.bounds.iter().enumerate() {
            self.normalized = false;
            self.inouts.push(((b as u32) << 1) | (i as u32 & 1));
        }
        self
    }

    /// Remove every member of `cr` from the set.
    pub fn exclude_range(&mut self, cr: &CharRange) -> &mut Self {
        self.invert();
        self.add_range_of(cr);
        self.invert();
        self
    }

    /// Keep only the members that `cr` also contains.
    pub fn intersect_with(&mut self, cr: &CharRange) -> &mut Self {
        self.exclude_range(&cr.complement());
        self
    }

    /// Make the current set case independent: for every member, its single
    /// code-unit lower-case and upper-case companions are added too.
    pub fn expand_cases(&mut self) -> &mut Self {
        self.normalize();
        let snapshot = self.inouts.clone();
        for i in (0..snapshot.len()).step_by(2) {
            let first = (snapshot[i] >> 1) as u16;
            let last = if i + 1 < snapshot.len() {
                ((snapshot[i + 1] >> 1) - 1) as u16
            } else {
                MAX_CHAR
            };
            expand_case_range(first, last, self);
        }
        self
    }

    /// Invert the set: afterwards it contains exactly the code units it did
    /// not contain before.
    pub fn invert(&mut self) -> &mut Self {
        self.normalize();
        if self.inouts.is_empty() {
            // empty -> ALL
            self.inouts.push(0);
            return self;
        }
        if self.inouts[0] == 0 {
            // set includes 0; shift left, flipping in/out kinds
            for i in 0..self.inouts.len() - 1 {
                self.inouts[i] = self.inouts[i + 1] ^ 1;
            }
            self.inouts.pop();
        } else {
            // set excludes 0; shift right, flipping, and open at 0
            self.inouts.push(0);
            for i in (1..self.inouts.len()).rev() {
                self.inouts[i] = self.inouts[i - 1] ^ 1;
            }
            self.inouts[0] = 0;
        }
        self
    }

    /// Produce a [`CharRange`] for the current set without altering it.
    pub fn build(&mut self) -> CharRange {
        self.normalize();
        if self.inouts.is_empty() {
            return CharRange::none();
        }
        CharRange::from_bounds(self.inouts.iter().map(|&x| (x >> 1) as u16).collect())
    }

    fn normalize(&mut self) {
        if !self.normalized && !self.inouts.is_empty() {
            self.inouts.sort_unstable();
            let len = self.inouts.len();
            let mut d = 0;
            let mut depth: i32 = 0;
            let mut s = 0;
            while s < len {
                let old_depth = depth;
                let inout = self.inouts[s];
                s += 1;
                depth += if inout & 1 == 0 { 1 } else { -1 };
                // fold all breakpoints at the same code unit
                while s < len && self.inouts[s] >> 1 == inout >> 1 {
                    depth += if self.inouts[s] & 1 == 0 { 1 } else { -1 };
                    s += 1;
                }
                if depth > 0 {
                    if old_depth <= 0 {
                        self.inouts[d] = inout & !1;
                        d += 1;
                    }
                } else if old_depth > 0 {
                    self.inouts[d] = inout | 1;
                    d += 1;
                }
            }
            self.inouts.truncate(d);
        }
        self.normalized = true;
    }
}

/// The single code-unit lower-case companion of `c` if it has one,
/// otherwise `c` itself.
pub fn case_fold(c: u16) -> u16 {
    match CASE_UPPERS.binary_search(&c) {
        Ok(i) => CASE_LOWERS[i],
        Err(_) => c,
    }
}

/// Simple single code-unit lower-case mapping.
pub fn to_lower_char(c: u16) -> u16 {
    match case_delta(c) {
        Some((lower, _)) => c.wrapping_add(lower),
        None => c,
    }
}

/// Simple single code-unit upper-case mapping.
pub fn to_upper_char(c: u16) -> u16 {
    match case_delta(c) {
        Some((_, upper)) => c.wrapping_add(upper),
        None => c,
    }
}

// Finger search for the delta-table entry covering c: exponential probe to
// bracket the first entry whose end >= c, then binary search within.
fn case_delta_index(c: u16) -> usize {
    let table = CASE_DELTAS;
    let mut lo = 0;
    let mut hi = 1;
    while hi < table.len() && table[hi].1 < c {
        lo = hi + 1;
        hi <<= 1;
    }
    hi = hi.min(table.len());
    while hi > lo {
        let mid = lo + ((hi - lo) >> 1);
        if table[mid].1 < c {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

fn case_delta(c: u16) -> Option<(u16, u16)> {
    let i = case_delta_index(c);
    let &(start, end, lower, upper) = CASE_DELTAS.get(i)?;
    (start <= c && c <= end).then_some((lower, upper))
}

fn expand_case_range(first: u16, last: u16, target: &mut CharRangeBuilder) {
    let table = CASE_DELTAS;
    for &(start, end, lower, upper) in &table[case_delta_index(first)..] {
        if start > last {
            break;
        }
        let sub_first = start.max(first);
        let sub_last = end.min(last);
        if sub_last < sub_first {
            continue;
        }
        if lower != 0 {
            target.add_range(sub_first.wrapping_add(lower), sub_last.wrapping_add(lower));
        }
        if upper != 0 {
            target.add_range(sub_first.wrapping_add(upper), sub_last.wrapping_add(upper));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(c: char) -> u16 {
        c as u16
    }

    #[test]
    fn test_contains() {
        let r = CharRange::range(u('a'), u('z'));
        assert!(r.contains(u('a')));
        assert!(r.contains(u('m')));
        assert!(r.contains(u('z')));
        assert!(!r.contains(u('A')));
        assert!(!r.contains(u('{')));
    }

    #[test]
    fn test_all_none_single() {
        assert!(CharRange::all().contains(0));
        assert!(CharRange::all().contains(MAX_CHAR));
        assert!(!CharRange::none().contains(0));
        assert!(CharRange::none().is_empty());
        let s = CharRange::single(u('x'));
        assert!(s.contains(u('x')));
        assert!(!s.contains(u('w')));
        assert!(!s.contains(u('y')));
    }

    #[test]
    fn test_range_to_max() {
        let r = CharRange::range(0xFF00, MAX_CHAR);
        assert_eq!(r.bounds().len(), 1);
        assert!(r.contains(MAX_CHAR));
        assert!(!r.contains(0xFEFF));
    }

    #[test]
    fn test_complement_involution() {
        for r in [
            CharRange::none(),
            CharRange::all(),
            CharRange::any_of("aeiou"),
            CharRange::range(0, u(' ')),
            CharRange::range(0xFF00, MAX_CHAR),
        ] {
            assert_eq!(r.complement().complement(), r);
        }
    }

    #[test]
    fn test_union_with_complement_is_all() {
        let r = CharRange::any_of("abcXYZ");
        assert_eq!(r.union(&r.complement()), CharRange::all());
        assert_eq!(r.intersect(&r.complement()), CharRange::none());
    }

    #[test]
    fn test_exclude() {
        let letters = CharRange::builder()
            .add_range(u('a'), u('z'))
            .add_range(u('A'), u('Z'))
            .build();
        let lower = letters.exclude(&CharRange::ascii_upper());
        assert!(lower.contains(u('q')));
        assert!(!lower.contains(u('Q')));
    }

    #[test]
    fn test_builder_overlapping_ranges_normalize() {
        let r = CharRange::builder()
            .add_range(u('a'), u('m'))
            .add_range(u('g'), u('z'))
            .add_char(u('g'))
            .build();
        assert_eq!(r, CharRange::range(u('a'), u('z')));
    }

    #[test]
    fn test_not_any_of() {
        let r = CharRange::not_any_of("abc");
        assert!(!r.contains(u('b')));
        assert!(r.contains(u('d')));
        assert!(r.contains(0));
        assert!(r.contains(MAX_CHAR));
    }

    #[test]
    fn test_categories() {
        let ll = CharRange::category("Ll").unwrap();
        assert!(ll.contains(u('a')));
        assert!(ll.contains(u('z')));
        assert!(!ll.contains(u('A')));
        assert!(!ll.contains(u('Z')));

        let start = CharRange::category("IdentifierStart").unwrap();
        assert!(start.contains(u('_')));
        assert!(!start.contains(u('9')));

        let word = CharRange::category("Word").unwrap();
        assert!(word.contains(u('_')));
        assert!(word.contains(u('7')));
        assert!(!word.contains(u(' ')));

        assert!(CharRange::category("NoSuchCategory").is_none());
    }

    #[test]
    fn test_category_round_trips_complement() {
        for name in ["L", "Nd", "P", "Zs"] {
            let r = CharRange::category(name).unwrap();
            assert_eq!(r.complement().complement(), r, "category {name}");
        }
    }

    #[test]
    fn test_case_fold() {
        assert_eq!(case_fold(u('A')), u('a'));
        assert_eq!(case_fold(u('a')), u('a'));
        assert_eq!(case_fold(u('7')), u('7'));
        assert_eq!(case_fold(u('Ä')), u('ä'));
    }

    #[test]
    fn test_simple_case_maps() {
        assert_eq!(to_upper_char(u('a')), u('A'));
        assert_eq!(to_lower_char(u('A')), u('a'));
        assert_eq!(to_upper_char(u('é')), u('É'));
        assert_eq!(to_lower_char(u('-')), u('-'));
        assert_eq!(to_upper_char(0), 0);
        assert_eq!(to_lower_char(MAX_CHAR), MAX_CHAR);
    }

    #[test]
    fn test_expand_cases() {
        let r = CharRange::builder().add_char(u('q')).expand_cases().build();
        assert!(r.contains(u('q')));
        assert!(r.contains(u('Q')));

        let r = CharRange::builder()
            .add_range(u('a'), u('z'))
            .expand_cases()
            .build();
        assert!(r.contains(u('A')));
        assert!(r.contains(u('Z')));
        assert!(r.contains(u('m')));
    }
}
