use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{distributions::Alphanumeric, Rng};

use textdistance::distance;

fn generate(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let lens = (2..128).step_by(2);

    let mut group = c.benchmark_group("Levenshtein");

    for i in lens.clone() {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("chars", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(distance::levenshtein::distance(
                    val.0.chars(),
                    val.1.chars(),
                ));
            })
        });

        group.bench_with_input(BenchmarkId::new("bytes", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(distance::levenshtein::distance(
                    val.0.bytes(),
                    val.1.bytes(),
                ));
            })
        });

        group.bench_with_input(BenchmarkId::new("checked", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(textdistance::levenshtein(val.0.as_str(), val.1.as_str()));
            })
        });
    }

    group.finish();

    group = c.benchmark_group("Hamming");

    for i in lens.clone() {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("chars", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(distance::hamming::distance(val.0.chars(), val.1.chars()));
            })
        });
    }

    group.finish();

    group = c.benchmark_group("Jaro");

    for i in lens.clone() {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("chars", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(distance::jaro::similarity(val.0.chars(), val.1.chars()));
            })
        });
    }

    group.finish();

    group = c.benchmark_group("JaroWinkler");

    for i in lens.clone() {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("chars", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(distance::jaro_winkler::similarity(
                    val.0.chars(),
                    val.1.chars(),
                ));
            })
        });

        let args = distance::jaro_winkler::Args::default().score_cutoff(0.9);
        group.bench_with_input(
            BenchmarkId::new("chars (score_cutoff)", i),
            &(&s1, &s2),
            |b, val| {
                b.iter(|| {
                    black_box(distance::jaro_winkler::similarity_with_args(
                        val.0.chars(),
                        val.1.chars(),
                        &args,
                    ));
                })
            },
        );
    }

    group.finish();

    group = c.benchmark_group("DamerauLevenshtein");

    for i in lens {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("chars", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(distance::damerau_levenshtein::distance(
                    val.0.chars(),
                    val.1.chars(),
                ));
            })
        });

        group.bench_with_input(BenchmarkId::new("bytes", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(distance::damerau_levenshtein::distance(
                    val.0.bytes(),
                    val.1.bytes(),
                ));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
