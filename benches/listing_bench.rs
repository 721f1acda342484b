//! Listing pipeline throughput.
//!
//! Runs filter, sort and page over the sample catalog repeated to
//! several sizes, for a few representative screen queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use trekview_core::logging::LogContext;
use trekview_core::pipeline::{run_listing, ListingQuery};
use trekview_core::query::{ActiveFilterSet, Pager, SortState};
use trekview_core::records::{sample_treks, Trek, TrekField};

fn catalog(size: usize) -> Vec<Trek> {
    let base = sample_treks();
    (0..size)
        .map(|i| {
            let mut trek = base[i % base.len()].clone();
            trek.id = format!("{}-{i}", trek.id);
            trek.review_count = (trek.review_count + i as u32 * 7) % 2_000;
            trek.price_usd += (i % 97) as f64;
            trek
        })
        .collect()
}

fn queries() -> Vec<(&'static str, ListingQuery<TrekField>)> {
    let moderate = ActiveFilterSet::new()
        .with_exact(TrekField::Difficulty, "Moderate")
        .with_range(TrekField::Duration, 1.0, 30.0)
        .unwrap_or_default();
    vec![
        ("unfiltered", ListingQuery::new()),
        (
            "moderate_by_popularity",
            ListingQuery::new()
                .with_filters(moderate)
                .with_sort(SortState::descending(TrekField::Popularity)),
        ),
        (
            "search_by_name",
            ListingQuery::new()
                .with_filters(ActiveFilterSet::new().with_query("glacier"))
                .with_sort(SortState::ascending(TrekField::Name))
                .with_page(3),
        ),
    ]
}

fn bench_listing(c: &mut Criterion) {
    let ctx = LogContext::new("bench");
    let pager = Pager::new(12).unwrap();
    let mut group = c.benchmark_group("listing");

    for size in [100usize, 1_000, 10_000] {
        let treks = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        for (name, query) in queries() {
            group.bench_with_input(BenchmarkId::new(name, size), &treks, |b, treks| {
                b.iter(|| run_listing(black_box(treks), &query, &pager, &ctx).matched_count)
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_listing);
criterion_main!(benches);
