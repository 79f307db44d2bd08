use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use wayfarer_core::prelude::*;

fn bundled() -> DefaultDataset {
    DefaultDataset::from_json_str(include_str!("../data/travel_recommendation_api.json"))
        .expect("bundled dataset parses")
}

/// Repeat the bundled dataset so the scans have something to chew on.
fn inflated(copies: usize) -> DefaultDataset {
    let base = bundled();
    let mut db = DefaultDataset::default();
    for i in 0..copies {
        for c in base.countries() {
            let mut c = c.clone();
            c.name = format!("{} {i}", c.name);
            for city in &mut c.cities {
                city.name = format!("{} #{i}", city.name);
            }
            db.countries.push(c);
        }
        db.temples.extend(base.temples().iter().cloned());
        db.beaches.extend(base.beaches().iter().cloned());
    }
    db
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for copies in [1usize, 50] {
        let db = inflated(copies);
        for query in ["beach", "tokyo", "brazil", "historic temples", "xyzzynotreal"] {
            group.bench_with_input(
                BenchmarkId::new(query, copies),
                &db,
                |b, db| b.iter(|| search(black_box(db), black_box(query)).len()),
            );
        }
    }
    group.finish();
}

fn bench_time(c: &mut Criterion) {
    let zones = ZoneTable::default();
    c.bench_function("resolve_time/inferred", |b| {
        b.iter(|| zones.resolve(black_box(&("Taj Mahal, India", None::<&str>))))
    });
}

criterion_group!(benches, bench_search, bench_time);
criterion_main!(benches);
