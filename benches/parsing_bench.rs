use criterion::{Criterion, black_box, criterion_group, criterion_main};

use telenumber::PHONE_NUMBER_UTIL;

use phonenumber::{self as rlp, country::Id};

type TestEntity = (&'static str, &'static str, Id);

fn setup_parsing_data() -> Vec<TestEntity> {
    use phonenumber::country::Id::*;
    vec![
        ("+1 650-253-0000", "US", US),
        ("(650) 253-0000", "US", US),
        ("+442087712924", "GB", GB),
        ("020 8771 2924", "GB", GB),
        ("011 15-2345-6789", "AR", AR),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("telenumber: parse()", |b| {
        b.iter(|| {
            for (number_str, region, _) in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.parse(black_box(number_str), black_box(*region));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for (number_str, _, region_id) in &numbers_to_parse {
                let _ = rlp::parse(black_box(Some(*region_id)), black_box(*number_str));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
