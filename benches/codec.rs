use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use geocodec::{
    decode_feature_collection, encode_feature_collection, Feature, FeatureCollection, Geometry,
    Position, Value,
};

const SRID: u32 = 4326;
const SCALE: u32 = 10_000_000;

fn line_string_feature_collection(feature_count: usize) -> FeatureCollection {
    let features = (0..feature_count)
        .map(|i| {
            let base = i as f64 * 0.001;
            let points = (0..20)
                .map(|j| Position::new(base + j as f64 * 0.0001, base - j as f64 * 0.0001))
                .collect();
            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::LineString(points))),
                id: None,
                properties: None,
                foreign_members: None,
            }
        })
        .collect();
    FeatureCollection {
        bbox: None,
        features,
        name: None,
        foreign_members: None,
    }
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_feature_collection");
    for feature_count in [10usize, 100, 1_000] {
        let fc = line_string_feature_collection(feature_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(feature_count),
            &fc,
            |b, fc| b.iter(|| encode_feature_collection(fc, SRID, SCALE).unwrap()),
        );
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_feature_collection");
    for feature_count in [10usize, 100, 1_000] {
        let fc = line_string_feature_collection(feature_count);
        let bytes = encode_feature_collection(&fc, SRID, SCALE).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(feature_count),
            &bytes,
            |b, bytes| b.iter(|| decode_feature_collection(bytes).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
