//! Benchmarks for both engines over synthetic catalogs.
//!
//! Catalog sizes bracket what a store actually serves:
//! - small:  50 activities   (a classroom mirror)
//! - medium: 500 activities  (the public store)
//! - large:  2000 activities (store plus archived versions)
//!
//! Run with: cargo bench

use activity_search::{
    rank_all, AppRecord, Catalog, EngineKind, FullTextIndex, FullTextOptions, SearchConfig,
    SearchSession,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ============================================================================
// CATALOG SIMULATION
// ============================================================================

const SIZES: &[(&str, usize)] = &[("small", 50), ("medium", 500), ("large", 2000)];

const VOCABULARY: &[&str] = &[
    "paint", "draw", "music", "turtle", "blocks", "chat", "write", "read", "math", "science",
    "game", "puzzle", "story", "physics", "memorize", "measure", "record", "speak", "map",
    "clock", "abacus", "fraction", "letter", "word", "color", "sound", "planet", "star",
];

/// Deterministic pseudo-random word picker.
fn word(seed: usize) -> &'static str {
    VOCABULARY[(seed.wrapping_mul(2_654_435_761) >> 7) % VOCABULARY.len()]
}

fn text(seed: usize, words: usize) -> String {
    (0..words).map(|i| word(seed * 31 + i)).collect::<Vec<_>>().join(" ")
}

fn make_catalog(size: usize) -> Catalog {
    let records = (0..size)
        .map(|i| AppRecord {
            summary: Some(text(i + 1, 12)),
            description: Some(text(i + 7, 40)),
            tags: (0..3).map(|t| word(i * 3 + t).to_string()).collect(),
            ..AppRecord::named(text(i, 2))
        })
        .collect();
    Catalog::new(records)
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_all");
    for &(name, size) in SIZES {
        let catalog = make_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("two_words", name), &catalog, |b, catalog| {
            b.iter(|| rank_all(black_box(catalog.records()), black_box("turtle music")))
        });
    }
    group.finish();
}

fn bench_fulltext_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("fulltext_build");
    let options = FullTextOptions::default();
    for &(name, size) in SIZES {
        let catalog = make_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &catalog, |b, catalog| {
            b.iter(|| FullTextIndex::build(black_box(catalog), &options.fields))
        });
    }
    group.finish();
}

fn bench_fulltext_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("fulltext_search");
    let options = FullTextOptions::default();
    for &(name, size) in SIZES {
        let catalog = make_catalog(size);
        let index = FullTextIndex::build(&catalog, &options.fields);
        group.bench_with_input(BenchmarkId::new("exact", name), &index, |b, index| {
            b.iter(|| index.search(black_box("turtle"), &options))
        });
        group.bench_with_input(BenchmarkId::new("typo", name), &index, |b, index| {
            b.iter(|| index.search(black_box("turtel muisc"), &options))
        });
    }
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let config = SearchConfig {
        engine: EngineKind::FullText,
        ..SearchConfig::default()
    };
    let mut session = SearchSession::with_catalog(config, make_catalog(500));
    c.bench_function("session_fulltext_medium", |b| {
        b.iter(|| session.perform_search(black_box("paint")))
    });
}

criterion_group!(
    benches,
    bench_rank,
    bench_fulltext_build,
    bench_fulltext_search,
    bench_session
);
criterion_main!(benches);
