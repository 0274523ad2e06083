use autha_users::user::is_email;
use criterion::{Criterion, criterion_group, criterion_main};

fn ascii_email_benchmark(c: &mut Criterion) {
    c.bench_function("is_email ascii", |b| {
        b.iter(|| is_email("first.last+tag@gravitalia.com"))
    });
}

fn unicode_email_benchmark(c: &mut Criterion) {
    c.bench_function("is_email unicode", |b| {
        b.iter(|| is_email("josé@bücher.de"))
    });
}

fn invalid_email_benchmark(c: &mut Criterion) {
    c.bench_function("is_email invalid", |b| {
        b.iter(|| is_email("a..b@mail.example.com"))
    });
}

criterion_group!(
    benches,
    ascii_email_benchmark,
    unicode_email_benchmark,
    invalid_email_benchmark
);
criterion_main!(benches);
