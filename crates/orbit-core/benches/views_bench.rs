//! Criterion benchmarks for the view derivations and the validator.
//!
//! Every keystroke in the search box re-derives the dashboard, so filtering a
//! large document must stay well below a frame.
//!
//! Run with:
//! ```bash
//! cargo bench --package orbit-core --bench views_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orbit_core::{filter_groups, validate, DashboardView, Service, ServiceGroup, ServicesConfig};

// ── Document fixture builders ─────────────────────────────────────────────────

/// Creates a document with `groups` groups of `per_group` services each, and
/// one favorite per group.
fn build_document(groups: usize, per_group: usize) -> ServicesConfig {
    let groups: Vec<ServiceGroup> = (0..groups)
        .map(|g| ServiceGroup {
            name: format!("group-{g}"),
            icon: None,
            services: (0..per_group)
                .map(|s| Service {
                    id: format!("svc-{g}-{s}"),
                    name: format!("Service {g}/{s}"),
                    description: format!("Self-hosted application number {s}"),
                    url: format!("http://10.0.{g}.{s}"),
                    icon: "📦".to_string(),
                    color: None,
                })
                .collect(),
        })
        .collect();

    let favorites = (0..groups.len()).map(|g| format!("svc-{g}-0")).collect();

    ServicesConfig {
        groups,
        favorites,
        ..ServicesConfig::default()
    }
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_filter_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_groups");
    for size in [10usize, 50, 200] {
        let doc = build_document(size, 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| filter_groups(black_box(&doc.groups), black_box("number 7")))
        });
    }
    group.finish();
}

fn bench_dashboard_view(c: &mut Criterion) {
    let doc = build_document(50, 10);
    c.bench_function("dashboard_view_no_query", |b| {
        b.iter(|| DashboardView::build(black_box(&doc), black_box("")))
    });
}

fn bench_validate(c: &mut Criterion) {
    let value = serde_json::to_value(build_document(50, 10)).expect("fixture serialises");
    c.bench_function("validate_500_services", |b| {
        b.iter(|| validate(black_box(&value)))
    });
}

criterion_group!(benches, bench_filter_groups, bench_dashboard_view, bench_validate);
criterion_main!(benches);
