//! Benchmarks for view derivation and windowing

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use directory_core::{Department, Employee};
use directory_query::{Directory, IncrementalCursor, Paginator, ViewMemo, ViewQuery, compute_view};
use std::hint::black_box;

const FIRST_NAMES: [&str; 8] = ["Emily", "Michael", "Sophia", "James", "Emma", "Olivia", "Ava", "Liam"];
const LAST_NAMES: [&str; 6] = ["Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller"];
const SLUGS: [&str; 5] = ["beauty", "fragrances", "furniture", "groceries", "laptops"];

/// Realistic directory of `n` employees spread over five departments
fn directory(n: usize) -> Directory {
    let employees = FIRST_NAMES
        .iter()
        .cycle()
        .zip(LAST_NAMES.iter().cycle())
        .zip(SLUGS.iter().cycle())
        .take(n)
        .enumerate()
        .map(|(i, ((first, last), slug))| Employee {
            id: i as u64 + 1,
            first_name: (*first).to_string(),
            last_name: (*last).to_string(),
            email: format!("user{i}@x.dummyjson.com"),
            departement: (*slug).to_string(),
            ..Employee::default()
        })
        .collect();
    let departments = SLUGS
        .iter()
        .map(|slug| Department {
            slug: (*slug).to_string(),
            name: (*slug).to_string(),
            url: None,
        })
        .collect();
    Directory::new(employees, departments)
}

/// Benchmark the raw filter over growing collections
fn bench_compute_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_view");

    for size in [30usize, 208, 5_000] {
        let directory = directory(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("search_and_department", size), &directory, |b, d| {
            b.iter(|| compute_view(black_box(d.employees()), black_box("em"), black_box("laptops")))
        });
        group.bench_with_input(BenchmarkId::new("unfiltered", size), &directory, |b, d| {
            b.iter(|| compute_view(black_box(d.employees()), "", ""))
        });
    }

    group.finish();
}

/// Benchmark memo hits against recomputation
fn bench_memo(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_memo");
    let directory = directory(5_000);
    let query = ViewQuery::new("john", "beauty");

    group.bench_function("hit", |b| {
        let mut memo = ViewMemo::new();
        let _ = memo.view(&directory, &query);
        b.iter(|| memo.view(black_box(&directory), black_box(&query)))
    });
    group.bench_function("miss", |b| {
        b.iter(|| directory.view(black_box(&query)))
    });

    group.finish();
}

/// Benchmark both presentation windows over a derived view
fn bench_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("windows");
    let directory = directory(5_000);
    let view = directory.view(&ViewQuery::default());
    let paginator = Paginator::new(10).unwrap_or_else(|_| unreachable!());

    group.bench_function("paged", |b| {
        b.iter(|| {
            let window = paginator.window(view.len(), black_box(42));
            view.slice(window.range())
        })
    });
    group.bench_function("incremental", |b| {
        let cursor = IncrementalCursor::default().next().next();
        b.iter(|| view.slice(0..cursor.rendered_len(view.len())))
    });

    group.finish();
}

criterion_group!(benches, bench_compute_view, bench_memo, bench_windows);
criterion_main!(benches);
