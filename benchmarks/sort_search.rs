//! Sort and search benchmark
//!
//! Measures the stable merge sort and both search paths (exact-title binary
//! search vs. linear substring fallback) at several catalog sizes.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use shelf_cache::{BookDraft, Catalog, MemoryRecordStore, SortKey};

const GENRES: &[&str] = &[
    "SciFi",
    "Dystopian",
    "Romance",
    "History",
    "Fantasy",
    "Crime",
];

fn random_word(rng: &mut StdRng) -> String {
    let len = rng.gen_range(4..12);
    (0..len)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

fn build_catalog(count: usize, seed: u64) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut catalog = Catalog::new(Box::new(MemoryRecordStore::new()));

    for _ in 0..count {
        let title = format!("{} {}", random_word(&mut rng), random_word(&mut rng));
        let author = format!("{} {}", random_word(&mut rng), random_word(&mut rng));
        let genre = *GENRES.choose(&mut rng).unwrap();
        catalog
            .add(
                BookDraft::new(title)
                    .with_author(author)
                    .with_genre(genre)
                    .with_year(rng.gen_range(1900..2026))
                    .with_copies(rng.gen_range(1..10)),
            )
            .unwrap();
    }

    catalog
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for &count in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("by_title", count), &count, |b, &count| {
            b.iter_batched(
                || build_catalog(count, 42),
                |mut catalog| catalog.sort(SortKey::Title),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for &count in &[100usize, 1_000, 10_000] {
        let mut catalog = build_catalog(count, 42);
        catalog.sort(SortKey::Title);
        let exact_title = catalog.get_all()[count / 2].title.clone();

        group.bench_with_input(
            BenchmarkId::new("exact_title", count),
            &exact_title,
            |b, title| b.iter(|| catalog.search(title)),
        );

        group.bench_with_input(
            BenchmarkId::new("fallback_scan", count),
            &count,
            |b, _| b.iter(|| catalog.search("scifi")),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sort, bench_search);
criterion_main!(benches);
