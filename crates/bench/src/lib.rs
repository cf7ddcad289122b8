use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution as _, Exp, Normal};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the runtime preset by input length.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 1_000 {
        apply_small_runtime_config(group);
    } else if size <= 10_000 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Key distributions for sorting benchmarks. Every generator keeps values in
/// `[0, size - 1]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Distribution {
    Uniform,
    Normal,
    Exponential,
    Bimodal,
    Reversed,
    Sorted,
    AllEqual,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 7] = [
    Distribution::Uniform,
    Distribution::Normal,
    Distribution::Exponential,
    Distribution::Bimodal,
    Distribution::Reversed,
    Distribution::Sorted,
    Distribution::AllEqual,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Normal => "normal",
            Self::Exponential => "exponential",
            Self::Bimodal => "bimodal",
            Self::Reversed => "reversed",
            Self::Sorted => "sorted",
            Self::AllEqual => "all_equal",
        }
    }
}

pub fn generate<R: Rng + ?Sized>(dist: Distribution, size: usize, rng: &mut R) -> Vec<i64> {
    if size == 0 {
        return Vec::new();
    }
    let n = size as f64;
    let top = size as i64 - 1;
    let clamp = |x: f64| (x.round() as i64).clamp(0, top);

    match dist {
        Distribution::Uniform => (0..size).map(|_| rng.random_range(0..=top)).collect(),
        Distribution::Normal => {
            let bell = normal(n / 2.0, n / 10.0);
            (0..size).map(|_| clamp(bell.sample(rng))).collect()
        }
        Distribution::Exponential => {
            let exp = Exp::new(10.0 / n).expect("rate is positive for a non-empty dataset");
            (0..size).map(|_| clamp(exp.sample(rng))).collect()
        }
        Distribution::Bimodal => {
            let modes = [normal(n / 3.0, n / 20.0), normal(2.0 * n / 3.0, n / 20.0)];
            (0..size).map(|i| clamp(modes[i % 2].sample(rng))).collect()
        }
        Distribution::Reversed => (0..=top).rev().collect(),
        Distribution::Sorted => (0..=top).collect(),
        Distribution::AllEqual => vec![top / 2; size],
    }
}

fn normal(mean: f64, std_dev: f64) -> Normal<f64> {
    Normal::new(mean, std_dev).expect("standard deviation is finite and non-negative")
}
