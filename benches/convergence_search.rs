use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rescaler::constants::ConstantSet;
use rescaler::search::{Convergence, Rescaling, SearchBuilder};
use rescaler_decimal::DecimalContext;

fn convergence_search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Convergence search");
    for digits in [50, 100, 200] {
        let ctx = DecimalContext::new(digits).unwrap();
        let constants = ConstantSet::codata(&ctx).unwrap();
        let convergence = Convergence::with_defaults(&ctx).unwrap();
        let rescaling = Rescaling::HC_METRE;
        let pair = rescaling.pair(&constants).unwrap();
        let target = ctx.parse("1.0").unwrap();
        let search = SearchBuilder::new()
            .with_rescaling(&rescaling)
            .with_pair(&pair)
            .with_convergence_settings(&convergence)
            .with_context(&ctx)
            .build();

        group.bench_with_input(BenchmarkId::new("hc via metre", digits), &target, |b, target| {
            b.iter(|| search.run_loop(black_box(target)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, convergence_search_benchmark);
criterion_main!(benches);
