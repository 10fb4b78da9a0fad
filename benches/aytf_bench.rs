use criterion::{Criterion, black_box, criterion_group, criterion_main};

use telenumber::AsYouTypeFormatter;

fn aytf_benchmark(c: &mut Criterion) {
    let inputs = ["+16502530000", "02087712924", "01152345556789"];

    c.bench_function("AsYouTypeFormatter: input_digit() per keystroke", |b| {
        b.iter(|| {
            for input in inputs {
                let mut formatter = AsYouTypeFormatter::new("US");
                for ch in input.chars() {
                    black_box(formatter.input_digit(ch));
                }
            }
        })
    });
}

criterion_group!(benches, aytf_benchmark);
criterion_main!(benches);
