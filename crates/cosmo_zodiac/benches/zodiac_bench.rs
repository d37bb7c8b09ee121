use cosmo_calendar::CalendarDate;
use cosmo_zodiac::{
    MayanCatalog, ProfileOptions, arabic_sign, celtic_sign, chinese_sign, classify, mayan_sign,
    parse_and_classify, vedic_sign, western_sign,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn classifier_bench(c: &mut Criterion) {
    let Ok(date) = CalendarDate::new(1990, 6, 15) else {
        return;
    };

    let mut group = c.benchmark_group("classifiers");
    group.bench_function("western", |b| b.iter(|| western_sign(black_box(date))));
    group.bench_function("chinese", |b| b.iter(|| chinese_sign(black_box(date.year()))));
    group.bench_function("vedic", |b| b.iter(|| vedic_sign(black_box(date))));
    group.bench_function("mayan", |b| {
        b.iter(|| mayan_sign(black_box(date), MayanCatalog::Tzolkin))
    });
    group.bench_function("celtic", |b| b.iter(|| celtic_sign(black_box(date))));
    group.bench_function("arabic", |b| b.iter(|| arabic_sign(black_box(date))));
    group.finish();
}

fn profile_bench(c: &mut Criterion) {
    let Ok(date) = CalendarDate::new(1990, 6, 15) else {
        return;
    };
    let options = ProfileOptions::default();

    let mut group = c.benchmark_group("profile");
    group.bench_function("classify", |b| b.iter(|| classify(black_box(date), &options)));
    group.bench_function("parse_and_classify", |b| {
        b.iter(|| parse_and_classify(black_box("15/06/1990"), None))
    });
    group.finish();
}

criterion_group!(benches, classifier_bench, profile_bench);
criterion_main!(benches);
