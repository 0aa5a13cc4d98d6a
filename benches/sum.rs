use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dnum::{Context, Number, Result};

fn sum(ctx: &Context, n: u32) -> Result<Number> {
    let one = Number::new_in(1, ctx)?;
    let mut total = Number::new_in(0, ctx)?;
    for _ in 0..n {
        total = (&total + &one)?;
    }
    Ok(total)
}

fn sum_mixed(ctx: &Context, n: u32) -> Result<Number> {
    let step = Number::new_in(0.5, ctx)?;
    let mut total = Number::new_in(0, ctx)?;
    for _ in 0..n {
        total = (&total + &step)?;
    }
    Ok(total)
}

fn criterion_benchmark(c: &mut Criterion) {
    let pooled = Context::new().prefill(16);
    let unpooled = Context::unpooled();
    c.bench_function("sum 10000 pooled", |b| b.iter(|| sum(&pooled, black_box(10_000))));
    c.bench_function("sum 10000 unpooled", |b| b.iter(|| sum(&unpooled, black_box(10_000))));
    c.bench_function("sum 10000 mixed pooled", |b| {
        b.iter(|| sum_mixed(&pooled, black_box(10_000)))
    });
    c.bench_function("sum 10000 mixed unpooled", |b| {
        b.iter(|| sum_mixed(&unpooled, black_box(10_000)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
