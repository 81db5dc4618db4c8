use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::Value as SerdeValue;
use sift_json::from_json;

// A sample "medium" JSON document
const MEDIUM_JSON: &str = r#"
{
    "name": "Babbage",
    "age": 30,
    "admin": true,
    "friends": ["Ada", "Charles", "Grace"],
    "tasks": [
        { "id": 1, "title": "Parse JSON", "done": false },
        { "id": 2, "title": "Write docs", "done": true }
    ],
    "nested": {"key": [null, 1, 1.23e4]}
}
"#;

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("JSON Decoding");

    group.bench_function("sift_json::from_json", |b| {
        b.iter(|| {
            let _ = from_json(black_box(MEDIUM_JSON)).unwrap();
        })
    });

    // Baseline for comparison
    group.bench_function("serde_json::from_str", |b| {
        b.iter(|| {
            let _: SerdeValue = serde_json::from_str(black_box(MEDIUM_JSON)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
