use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dxf_dimension_rs::render::compute_layout;
use dxf_dimension_rs::types::{CoordinateSystem, Handle, Vector3};
use dxf_dimension_rs::{CadDocument, Dimension};

fn document(count: usize) -> (CadDocument, Vec<Handle>) {
    let mut doc = CadDocument::new();
    let handles = (0..count)
        .map(|i| {
            let length = 1.0 + (i % 50) as f64;
            let y = i as f64 * 2.0;
            let dim = Dimension::linear(
                Vector3::new(0.0, y + 1.0, 0.0),
                Vector3::new(0.0, y, 0.0),
                Vector3::new(length, y, 0.0),
                0.0,
            );
            doc.add_entity(dim.into()).unwrap()
        })
        .collect();
    (doc, handles)
}

fn bench_layout(c: &mut Criterion) {
    let (doc, handles) = document(1);
    c.bench_function("compute_layout", |b| {
        b.iter(|| compute_layout(black_box(&doc), handles[0], CoordinateSystem::PassThrough, None))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_dimensions");
    for count in [100, 1000] {
        group.bench_function(format!("{count}"), |b| {
            b.iter_batched(
                || document(count),
                |(mut doc, handles)| doc.render_dimensions(&handles, CoordinateSystem::PassThrough),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
