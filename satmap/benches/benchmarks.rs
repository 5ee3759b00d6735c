use criterion::{criterion_group, criterion_main, Criterion};
use geo::geometry::Coord;
use image::Rgb;
use satmap::{Raster, SatelliteMap};

fn green_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("Green Classification");

    // Mix of green and non-green pixels at the default map size.
    let raster = Raster::from_fn(400, 400, |x, y| {
        #[allow(clippy::cast_precision_loss)]
        Rgb([
            (x % 7) as f32 / 7.0,
            (y % 11) as f32 / 11.0,
            ((x + y) % 5) as f32 / 5.0,
        ])
    });
    let map = SatelliteMap::from_raster(Coord { x: -0.1277, y: 51.5073 }, raster);

    group.bench_with_input("count_green 400x400", &map, |b, map| {
        b.iter(|| map.count_green(1.1).unwrap())
    });
    group.bench_with_input("render_green 400x400", &map, |b, map| {
        b.iter(|| map.render_green(1.1).unwrap())
    });
}

criterion_group!(benches, green_classification);
criterion_main!(benches);
