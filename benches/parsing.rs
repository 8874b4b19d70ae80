use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lax_json::{from_str, to_string};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

fn sample_users(count: u32) -> Vec<User> {
    (0..count)
        .map(|i| User {
            id: i,
            name: format!("User {}", i),
            email: format!("user{}@example.com", i),
            active: i % 2 == 0,
        })
        .collect()
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let doc = "{\"id\": 123, \"name\": \"Alice\", \"email\": \"alice@example.com\", \"active\": true}";

    c.bench_function("parse_simple_object", |b| {
        b.iter(|| from_str(black_box(doc)))
    });
}

fn benchmark_parse_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_array");

    for size in [10, 100, 1000].iter() {
        let doc = to_string(&sample_users(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| from_str(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 100, 1000].iter() {
        let users = sample_users(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &users, |b, users| {
            b.iter(|| to_string(black_box(users)))
        });
    }
    group.finish();
}

fn benchmark_key_search(c: &mut Criterion) {
    let users = sample_users(500);
    let doc = to_string(&users).unwrap();
    let tree = from_str(&doc).unwrap();

    c.bench_function("find_by_key_deep", |b| {
        b.iter(|| black_box(&tree).find_by_key("email"))
    });
}

fn benchmark_comparison_with_serde_json(c: &mut Criterion) {
    let users = sample_users(100);
    let mut group = c.benchmark_group("comparison");

    group.bench_function("lax_json_serialize", |b| {
        b.iter(|| to_string(black_box(&users)))
    });

    group.bench_function("serde_json_serialize", |b| {
        b.iter(|| serde_json::to_string_pretty(black_box(&users)))
    });

    let doc = to_string(&users).unwrap();
    let json_doc = serde_json::to_string_pretty(&users).unwrap();

    group.bench_function("lax_json_parse", |b| {
        b.iter(|| from_str(black_box(&doc)))
    });

    group.bench_function("serde_json_parse", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(&json_doc)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_parse_arrays,
    benchmark_serialize,
    benchmark_key_search,
    benchmark_comparison_with_serde_json
);
criterion_main!(benches);
