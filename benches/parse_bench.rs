use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lispish::{parse, tokenize};

const SOURCE: &str = r#"
(define fib
  (lambda (n)
    (if (< n 2)
        n
        (+ (fib (- n 1)) (fib (- n 2))))))
(define pi 3.14159)
(display (fib 10) "done")
"#;

fn scanner_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize nested program", |b| {
        b.iter(|| tokenize(black_box(SOURCE)).unwrap())
    });
}

fn parser_benchmark(c: &mut Criterion) {
    let tokens = tokenize(SOURCE).unwrap();

    c.bench_function("parse nested program", |b| {
        b.iter(|| parse(black_box(tokens.clone())).unwrap())
    });

    c.bench_function("tokenize and parse", |b| {
        b.iter(|| parse(tokenize(black_box(SOURCE)).unwrap()).unwrap())
    });
}

criterion_group!(benches, scanner_benchmark, parser_benchmark);
criterion_main!(benches);
