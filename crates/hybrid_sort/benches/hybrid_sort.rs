use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{ALL_DISTRIBUTIONS, Distribution, apply_runtime_for_size, generate};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hybrid_sort::{PivotRule, SortConfig, classic_quick_sort, sort_ord_with, sort_with};
use rand::SeedableRng;
use rand::rngs::StdRng;

const BENCH_SIZES: [usize; 5] = [10, 100, 1_000, 10_000, 100_000];

#[derive(Clone, Copy)]
enum Variant {
    Hybrid,
    Baseline,
    SampledMidrange,
    MedianOf3Ord,
    Classic,
    StdUnstable,
}

const VARIANTS: [Variant; 6] = [
    Variant::Hybrid,
    Variant::Baseline,
    Variant::SampledMidrange,
    Variant::MedianOf3Ord,
    Variant::Classic,
    Variant::StdUnstable,
];

impl Variant {
    fn label(self) -> &'static str {
        match self {
            Self::Hybrid => "hybrid_half_means",
            Self::Baseline => "baseline_half_means",
            Self::SampledMidrange => "hybrid_sampled_midrange",
            Self::MedianOf3Ord => "hybrid_median_of_3",
            Self::Classic => "classic_lomuto",
            Self::StdUnstable => "std_unstable",
        }
    }

    fn run(self, data: &mut [i64]) {
        let high = data.len() - 1;
        let result = match self {
            Self::Hybrid => sort_with(data, 0, high, &SortConfig::default()),
            Self::Baseline => sort_with(data, 0, high, &SortConfig::baseline()),
            Self::SampledMidrange => sort_with(
                data,
                0,
                high,
                &SortConfig::default().with_pivot_rule(PivotRule::SampledMidrange),
            ),
            Self::MedianOf3Ord => sort_ord_with(
                data,
                0,
                high,
                &SortConfig::default().with_pivot_rule(PivotRule::MedianOf3),
            ),
            Self::Classic => {
                classic_quick_sort(data);
                return;
            }
            Self::StdUnstable => {
                data.sort_unstable();
                return;
            }
        };
        black_box(result).expect("benchmark ranges are always in bounds");
    }
}

fn bench_hybrid_sort(c: &mut Criterion) {
    for &dist in &ALL_DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("hybrid_sort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime_for_size(&mut group, size);
            let base = generate(dist, size, &mut StdRng::seed_from_u64(seed_for(dist, size)));

            for &variant in &VARIANTS {
                group.bench_function(BenchmarkId::new(variant.label(), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = Instant::now();
                            variant.run(&mut data);
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }
        }

        group.finish();
    }
}

#[inline]
fn seed_for(dist: Distribution, size: usize) -> u64 {
    mix_seed(0x5EED_2026 ^ ((dist as u64) << 48) ^ (size as u64))
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

criterion_group!(benches, bench_hybrid_sort);
criterion_main!(benches);
