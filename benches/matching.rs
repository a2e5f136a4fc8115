//! Benchmarks for dfamatch build and scan paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dfamatch::{AmbiguityResolver, CharRange, DfaBuilder, Pattern, StringSearcher};

const KEYWORD: u8 = 0;
const IDENT: u8 = 1;
const NUMBER: u8 = 2;

fn keyword_searcher() -> StringSearcher<u8> {
    let mut builder = DfaBuilder::new();
    for kw in ["fn", "let", "match", "while", "for", "return"] {
        builder.add_pattern(Pattern::literal(kw), KEYWORD);
    }
    let word = CharRange::category("Word").unwrap();
    builder.add_pattern(Pattern::repeat1(Pattern::char_range(word)), IDENT);
    builder.add_pattern(
        Pattern::repeat1(Pattern::char_range(CharRange::digits())),
        NUMBER,
    );
    let prefer_lowest: &AmbiguityResolver<u8> =
        &|tags| Ok(tags.iter().copied().min().unwrap_or(IDENT));
    builder.build_string_searcher(Some(prefer_lowest)).unwrap()
}

fn sample_input() -> Vec<u16> {
    let mut text = String::new();
    for i in 0..200 {
        text.push_str(&format!("fn item{i} = while x{i} < {i} {{ return {i} }} ; "));
    }
    text.encode_utf16().collect()
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_tokenizer", |b| {
        b.iter(|| black_box(keyword_searcher()))
    });
}

fn bench_find_all(c: &mut Criterion) {
    let searcher = keyword_searcher();
    let input = sample_input();
    c.bench_function("find_all_tokens", |b| {
        b.iter(|| black_box(searcher.find_all(black_box(&input)).count()))
    });
}

fn bench_no_matches(c: &mut Criterion) {
    let mut builder = DfaBuilder::new();
    builder.add_pattern(Pattern::literal("needle"), 0usize);
    let searcher = builder.build_string_searcher(None).unwrap();
    let input: Vec<u16> = "-- -- -- -- ".repeat(500).encode_utf16().collect();
    c.bench_function("scan_without_matches", |b| {
        b.iter(|| black_box(searcher.find_all(black_box(&input)).count()))
    });
}

criterion_group!(benches, bench_build, bench_find_all, bench_no_matches);
criterion_main!(benches);
