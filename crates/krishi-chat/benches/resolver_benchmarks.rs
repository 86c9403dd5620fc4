//! Resolver benchmarks: keyword-table resolution across utterance shapes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use krishi_chat::ReplyResolver;

fn bench_resolve(c: &mut Criterion) {
    let resolver = ReplyResolver::new();

    c.bench_function("resolve_first_rule_hit", |b| {
        b.iter(|| resolver.resolve(black_box("what's the weather this week"), false))
    });

    c.bench_function("resolve_last_rule_hit", |b| {
        b.iter(|| resolver.resolve(black_box("please scan this leaf"), false))
    });

    c.bench_function("resolve_fallback", |b| {
        b.iter(|| resolver.resolve(black_box("hello, how are you today"), false))
    });

    c.bench_function("resolve_attachment_override", |b| {
        b.iter(|| resolver.resolve(black_box("ignored text"), true))
    });

    let long_utterance = "tell me something ".repeat(200);
    c.bench_function("resolve_long_unmatched", |b| {
        b.iter(|| resolver.resolve(black_box(long_utterance.as_str()), false))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
