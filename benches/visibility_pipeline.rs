use std::hint::black_box;
use std::sync::Mutex;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pythagoras_explorer::core::actions::compute_visible_units::ports::draw_list_sink::DrawListSink;
use pythagoras_explorer::{
    Cancelled, ExpansionPlan, GeometricUnit, IterationCache, NeverCancel, Point,
    PythagorasGenerator, Viewport, compute_visible_units,
};

struct CountingSink(Mutex<usize>);

impl DrawListSink for CountingSink {
    fn publish(&self, _depth: u32, batch: Vec<GeometricUnit>) -> Result<(), Cancelled> {
        *self.0.lock().unwrap() += batch.len();
        Ok(())
    }
}

fn bench_cache_population(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_population");

    for depth in [10u32, 14] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let cache = IterationCache::new(PythagorasGenerator, 2000.0);
                black_box(cache.get_depth(depth).len())
            });
        });
    }

    group.finish();
}

fn bench_visible_expansion(c: &mut Criterion) {
    let cache = IterationCache::new(PythagorasGenerator, 2000.0);
    cache.ensure_depth(14);

    // Small window on the left lobe, zoomed far enough to expand to depth 24.
    let viewport = Viewport::new(Point::new(-2600.0, 3900.0), Point::new(-2400.0, 4050.0))
        .unwrap();
    let plan = ExpansionPlan {
        default_depth: 14,
        target_depth: 24,
        near_margin: 3.0,
    };

    c.bench_function("visible_expansion_14_to_24", |b| {
        b.iter(|| {
            let sink = CountingSink(Mutex::new(0));
            let report = compute_visible_units(&cache, viewport, plan, &NeverCancel, &sink).unwrap();
            black_box(report.published)
        });
    });
}

criterion_group!(benches, bench_cache_population, bench_visible_expansion);
criterion_main!(benches);
