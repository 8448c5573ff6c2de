//! Benchmarks for document decoding and encoding.

use astreams::{to_document, Document};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};

fn sample_activity() -> Value {
    json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "type": "Create",
        "id": "https://example.com/activities/1",
        "actor": {"type": "Person", "id": "https://example.com/alice", "name": "Alice"},
        "published": "2024-03-01T12:30:00Z",
        "to": ["https://www.w3.org/ns/activitystreams#Public"],
        "object": {
            "type": "Note",
            "content": "Hello",
            "contentMap": {"en": "Hello", "fr": "Bonjour"},
            "attachment": [
                {"type": "Image", "url": "https://example.com/a.png", "mediaType": "image/png"},
                "https://example.com/b.png"
            ],
            "sensitive": false
        }
    })
}

fn outbox_page(items: usize) -> Value {
    let notes: Vec<Value> = (0..items)
        .map(|i| json!({"type": "Note", "id": format!("https://example.com/notes/{i}"), "content": "text"}))
        .collect();
    json!({"type": "OrderedCollectionPage", "totalItems": items, "orderedItems": notes})
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("activity");
    group.throughput(Throughput::Elements(1));

    let raw = sample_activity();
    group.bench_function("deserialize", |b| {
        b.iter(|| black_box(to_document(black_box(&raw))));
    });

    let doc: Document = match to_document(&raw) {
        Ok(doc) => doc,
        Err(e) => panic!("{e}"),
    };
    group.bench_function("serialize", |b| {
        b.iter(|| black_box(doc.serialize()));
    });

    group.finish();
}

fn bench_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("outbox_round_trip");

    for size in [1, 16, 256].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let raw = outbox_page(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let doc = to_document(black_box(&raw));
                black_box(doc.map(|d| d.serialize()))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_collection);
criterion_main!(benches);
