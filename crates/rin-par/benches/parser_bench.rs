use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rin_par::Parser;

const SAMPLE_PROGRAM: &str = r#"
fn fib(n: int) {
    if n <= 1 {
        return n;
    }
    let mut a = 0;
    let mut b = 1;
    let mut i = 2;
    while i <= n {
        let next = a + b;
        a = b;
        b = next;
        i = i + 1;
    }
    return b;
}

fn main() {
    let mut count = 0;
    while count < 20 {
        let v = fib(count);
        count = count + 1;
    }
}
"#;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse sample program", |b| {
        b.iter(|| {
            let mut parser = Parser::new(black_box(SAMPLE_PROGRAM));
            black_box(parser.parse_program())
        });
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
