//! Benchmarks for graph parsing and package collection
//!
//! Large monorepos produce `go mod graph` dumps with tens of thousands of
//! edges; these keep the single-pass pipeline honest at that scale.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gomodcount::parser::parse_edge;
use gomodcount::pipeline::Pipeline;

/// Build a synthetic graph dump with `edges` lines over `modules` modules.
///
/// Every seventh module lives under the excluded platform prefix.
fn create_graph_dump(edges: usize, modules: usize) -> String {
    let module = |i: usize| {
        if i % 7 == 0 {
            format!("github.com/golang/mod{}", i)
        } else {
            format!("example.com/org{}/mod{}", i % 13, i)
        }
    };

    let mut dump = String::new();
    for i in 0..edges {
        let source = i % modules;
        let target = (i * 31 + 17) % modules;
        if i < modules / 10 {
            dump.push_str(&format!("example.com/root {}@v1.{}.0\n", module(target), i % 5));
        } else {
            dump.push_str(&format!(
                "{}@v1.{}.0 {}@v2.{}.0\n",
                module(source),
                i % 3,
                module(target),
                i % 4
            ));
        }
    }
    dump
}

/// Benchmark parsing alone
fn bench_parse_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_edges");

    for size in [1_000, 10_000, 50_000].iter() {
        let dump = create_graph_dump(*size, size / 4);

        group.bench_with_input(BenchmarkId::new("edges", size), &dump, |b, dump| {
            b.iter(|| {
                for line in dump.lines() {
                    black_box(parse_edge(line).ok());
                }
            });
        });
    }

    group.finish();
}

/// Benchmark the full parse and collect pass
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = Pipeline::default();

    for size in [1_000, 10_000, 50_000].iter() {
        let dump = create_graph_dump(*size, size / 4);

        group.bench_with_input(BenchmarkId::new("edges", size), &dump, |b, dump| {
            b.iter(|| black_box(pipeline.run_str(dump).ok()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_edges, bench_pipeline);
criterion_main!(benches);
