use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ratlex::Tokenizer;

const PROGRAM: &str = r#"
[* greatest common divisor *]
function gcd(a integer, b integer)
{
    while (b != 0) {
        if (a > b) a = a - b; else b = b - a; fi
    }
    return a;
}
real ratio;
ratio = 3.14159 * 2.0;
put(gcd(48, 18));
"#;

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();
    let source = PROGRAM.repeat(200);

    let mut group = c.benchmark_group("tokenizer");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("tokenize", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&source)).unwrap())
    });
    group.bench_function("scan_with_trivia", |b| {
        b.iter(|| tokenizer.scan(black_box(&source)).count())
    });
    group.finish();
}

// ベンチマークグループの定義
criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
