use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use trendfit::{report, statistics::LeastSquares, EvidenceSeries, Model};

/// A repeating 1-2-3-4 pattern with a slow upward drift in the mean.
fn gen_sample_series(n: usize) -> EvidenceSeries {
    let values = (0..n).map(|i| {
        let drift = (4 * i / n.max(1)) as i64;
        (((i as i64) % 4 + drift) % 4) + 1
    });
    EvidenceSeries::from_values(values).expect("generated scores are in range")
}

fn criterion_benchmark(c: &mut Criterion) {
    //
    // First we test how each fitter scales with series length
    for model in Model::ALL {
        println!("Benchmarking fit vs n ({model})...");
        bench_fit_vs_len(
            c,
            &format!("fit_vs_n_{}", model.name().replace(' ', "_").to_lowercase()),
            &[10, 100, 1_000, 10_000],
            |b, observed| b.iter(|| model.fit(black_box(observed))),
        );
    }

    //
    // Now the whole pipeline, at the sizes the calculator actually sees
    println!("Benchmarking compute vs n...");
    let mut group = c.benchmark_group("compute");
    for n in [3, 10, 40] {
        let series = gen_sample_series(n);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| report::compute::<f64>(black_box(&series)))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Mean nanoseconds per iteration, from the `sample.json` criterion just wrote for `bench_id`.
fn mean_iteration_ns(group_id: &str, bench_id: &str) -> f64 {
    #[derive(serde::Deserialize)]
    struct Sample {
        iters: Vec<f64>,
        times: Vec<f64>,
    }

    let path = format!("target/criterion/{group_id}/{bench_id}/new/sample.json");
    let raw = std::fs::read_to_string(&path).expect("criterion sample missing");
    let sample: Sample = serde_json::from_str(&raw).expect("criterion sample malformed");

    let per_iter: Vec<f64> = sample.iters.iter().zip(&sample.times).map(|(i, t)| t / i).collect();
    per_iter.iter().sum::<f64>() / per_iter.len() as f64
}

/// Benchmarks one fitter at each series length, then fits a line through
/// (length, time) to report the marginal cost of one more score.
fn bench_fit_vs_len<F>(c: &mut Criterion, group_id: &str, lengths: &[usize], runner: F)
where
    for<'a, 'b, 'c> F: Fn(&'a mut criterion::Bencher<'b>, &'c [f64]),
{
    let mut group = c.benchmark_group(group_id);
    for &n in lengths {
        let observed = gen_sample_series(n).observations::<f64>();
        group.bench_with_input(format!("n={n}"), observed.as_slice(), |b, o| runner(b, o));
    }
    group.finish();

    let timings = lengths
        .iter()
        .map(|&n| (n as f64, mean_iteration_ns(group_id, &format!("n={n}"))));
    let line = LeastSquares::fit(timings);
    println!("{group_id}: ~{:.3} ns per additional score", line.slope);
}
