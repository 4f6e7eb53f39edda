//! Benchmarks for PCD decoding and footprint area.
//!
//! Run with: cargo bench --bench decode

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pcdtools::{read_pcd, xy_footprint_area, Point, PointCloud, PcdWriter};
use std::io::Cursor;

/// Points on a spiral over a 100m x 100m area
fn generate_scene(n: usize) -> PointCloud {
    (0..n)
        .map(|i| {
            let t = i as f32 * 0.01;
            let r = 50.0 * (i as f32 / n as f32).sqrt();
            Point::from_xyz(r * t.cos(), r * t.sin(), (t * 1.7).sin())
        })
        .collect()
}

fn bench_binary_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_decode");

    for &n_points in &[10_000, 65_536, 262_144] {
        let bytes = PcdWriter::new(&generate_scene(n_points))
            .write_to_vec()
            .unwrap();

        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("points", n_points), &bytes, |b, bytes| {
            b.iter(|| read_pcd(Cursor::new(black_box(bytes.as_slice()))).unwrap())
        });
    }

    group.finish();
}

fn bench_footprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("footprint");
    let scene = generate_scene(65_536);

    for &precision in &[0.08f32, 1.0, 10.0] {
        group.throughput(Throughput::Elements(scene.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("precision", precision),
            &precision,
            |b, &precision| b.iter(|| xy_footprint_area(black_box(&scene), precision)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_binary_decode, bench_footprint);
criterion_main!(benches);
