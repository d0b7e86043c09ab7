//! cargo bench --bench scan
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use email_regex::{
    engine::{EngineKind, EngineSelector},
    error::LoadError,
    Config,
};

const TEXT: &str = "fazboop <foo@bar.com> beep baz@boop.com\n\
    cid:image001.png@01bazz23.mx1e6980]www.facebook.com/example[cid:image002.png@03j570cf.ee\n\
    ##rfc822;beep@test.co.uk /images/some_logo@2x.jp foo@bar example.@gmail.com\n";

pub fn criterion_benchmark(c: &mut Criterion) {
    let fallback_only = EngineSelector::new(|| Err(LoadError::Probe("bench".into())));

    c.bench_function("compile_default", |b| {
        b.iter(|| black_box(Config::default()).compile().unwrap())
    });
    c.bench_function("compose_default", |b| {
        b.iter(|| black_box(Config::default()).pattern())
    });

    let safe = Config::default().compile().unwrap();
    let fallback = Config::default().compile_with(&fallback_only).unwrap();
    assert_eq!(fallback.engine(), EngineKind::Fallback);
    assert_eq!(safe.find_all(TEXT), fallback.find_all(TEXT));

    let text = TEXT.repeat(100);
    c.bench_function("find_all_safe", |b| {
        b.iter(|| safe.find_all(black_box(&text)).len())
    });
    c.bench_function("find_all_fallback", |b| {
        b.iter(|| fallback.find_all(black_box(&text)).len())
    });

    // Long runs of username characters followed by an almost-domain.
    let adversarial = format!("{}@{}", "a.".repeat(5000), "a-".repeat(5000));
    c.bench_function("adversarial_safe", |b| {
        b.iter(|| safe.is_match(black_box(&adversarial)))
    });
    c.bench_function("adversarial_fallback", |b| {
        b.iter(|| fallback.is_match(black_box(&adversarial)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
