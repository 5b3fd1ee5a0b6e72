use codspeed_criterion_compat::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jsoncanon::JsonValue;
use serde_json::json;

fn sample_document(width: usize) -> serde_json::Value {
    let mut records = Vec::with_capacity(width);
    for index in 0..width {
        records.push(json!({
            "id": index,
            "score": index as f64 * 0.30000000000000004,
            "label": format!("record-{index}-\u{20AC}"),
            "flags": {"zz": true, "aa": false, "m/n": null},
            "samples": [1e21, 1e20, 5e-324, -0.0, 333333333.3333333],
        }));
    }
    json!({"records": records, "version": 1, "empty": {}, "none": []})
}

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");

    for width in [10, 100, 1000] {
        let document = sample_document(width);
        let value = JsonValue::from(document.clone());
        group.bench_with_input(BenchmarkId::new("value", width), &value, |b, value| {
            b.iter(|| jsoncanon::canonicalize(value).expect("benchmark document is encodable"));
        });

        let text = serde_json::to_vec(&document).expect("benchmark document serializes");
        group.bench_with_input(BenchmarkId::new("text", width), &text, |b, text| {
            b.iter(|| jsoncanon::canonicalize_text(text).expect("benchmark document parses"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_canonicalize);
criterion_main!(benches);
