use cosmo_compat::{compute_compatibility, personality_metrics, score_match};
use cosmo_zodiac::parse_and_classify;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn compat_bench(c: &mut Criterion) {
    let (Ok(primary), Ok(candidate)) = (
        parse_and_classify("31/03/1981", None),
        parse_and_classify("15/11/1992", None),
    ) else {
        return;
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let mut group = c.benchmark_group("compat");
    group.bench_function("compute_compatibility", |b| {
        b.iter(|| compute_compatibility(black_box(&primary), &mut rng))
    });
    group.bench_function("score_match", |b| {
        b.iter(|| score_match(black_box(&primary), black_box(&candidate), &mut rng))
    });
    group.bench_function("personality_metrics", |b| {
        b.iter(|| personality_metrics(black_box(&primary)))
    });
    group.finish();
}

criterion_group!(benches, compat_bench);
criterion_main!(benches);
