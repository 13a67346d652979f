use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rin_lex::Lexer;

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

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize sample program", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(black_box(SAMPLE_PROGRAM));
            black_box(lexer.tokenize())
        });
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
