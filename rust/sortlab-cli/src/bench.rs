//! Benchmark harness: times each contender on shared random inputs.
//!
//! Each size gets one generated input, reused by every contender. Every
//! timed run sorts a fresh copy, and the output of the last run is checked
//! before the timing is reported.

use crate::config::BenchSettings;
use crate::error::CliError;
use serde::Serialize;
use sortlab_core::{check_sorted, Algorithm, RandomArrayGenerator};
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Something that can be benchmarked: one of our algorithms or a standard
/// library baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contender {
    Algorithm(Algorithm),
    StdStable,
    StdUnstable,
}

impl Contender {
    pub fn name(self) -> String {
        match self {
            Contender::Algorithm(a) => a.to_string(),
            Contender::StdStable => "std-stable".to_string(),
            Contender::StdUnstable => "std-unstable".to_string(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Contender::Algorithm(a) => a.title(),
            Contender::StdStable => "Built-in Stable Sort",
            Contender::StdUnstable => "Built-in Unstable Sort",
        }
    }

    pub fn is_stable(self) -> bool {
        match self {
            Contender::Algorithm(a) => a.is_stable(),
            Contender::StdStable => true,
            Contender::StdUnstable => false,
        }
    }

    pub fn is_quadratic(self) -> bool {
        matches!(self, Contender::Algorithm(a) if a.is_quadratic())
    }

    pub fn sort(self, arr: &mut [i32]) {
        match self {
            Contender::Algorithm(a) => a.sort(arr),
            Contender::StdStable => arr.sort(),
            Contender::StdUnstable => arr.sort_unstable(),
        }
    }
}

impl fmt::Display for Contender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Contenders selected by `settings`, algorithms first, then baselines.
pub fn contenders(settings: &BenchSettings) -> Vec<Contender> {
    let mut out: Vec<Contender> = settings
        .algorithms
        .iter()
        .copied()
        .map(Contender::Algorithm)
        .collect();
    if settings.baselines {
        out.push(Contender::StdStable);
        out.push(Contender::StdUnstable);
    }
    out
}

/// Timing of one contender on one input size.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BenchResult {
    pub contender: String,
    pub title: String,
    pub stable: bool,
    pub size: usize,
    pub iterations: u32,
    pub total_ns: u64,
    pub mean_ns: u64,
    pub min_ns: u64,
    pub max_ns: u64,
}

impl BenchResult {
    fn from_samples(contender: Contender, size: usize, samples: &[Duration]) -> Self {
        let nanos: Vec<u64> = samples
            .iter()
            .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
            .collect();
        let total = nanos.iter().fold(0u64, |acc, &n| acc.saturating_add(n));
        let iterations = nanos.len() as u32;
        Self {
            contender: contender.name(),
            title: contender.title().to_string(),
            stable: contender.is_stable(),
            size,
            iterations,
            total_ns: total,
            mean_ns: total / u64::from(iterations.max(1)),
            min_ns: nanos.iter().copied().min().unwrap_or(0),
            max_ns: nanos.iter().copied().max().unwrap_or(0),
        }
    }

    pub fn mean_ms(&self) -> f64 {
        self.mean_ns as f64 / 1_000_000.0
    }
}

/// Time `contender` on `input`: `warmup` untimed runs, then `iterations`
/// timed runs, each on a fresh copy. The final output is verified.
pub fn measure(
    contender: Contender,
    input: &[i32],
    warmup: u32,
    iterations: u32,
) -> Result<BenchResult, CliError> {
    if iterations == 0 {
        return Err(CliError::InvalidArgument(
            "iterations must be at least 1".to_string(),
        ));
    }
    for _ in 0..warmup {
        let mut xs = input.to_vec();
        contender.sort(&mut xs);
        black_box(xs);
    }

    let mut samples = Vec::with_capacity(iterations as usize);
    let mut output = input.to_vec();
    for _ in 0..iterations {
        output.copy_from_slice(input);
        let start = Instant::now();
        contender.sort(black_box(&mut output));
        samples.push(start.elapsed());
    }

    check_sorted(input, &output).map_err(|violation| CliError::Verification {
        contender: contender.name(),
        size: input.len(),
        violation,
    })?;

    let result = BenchResult::from_samples(contender, input.len(), &samples);
    debug!(
        contender = %contender,
        size = result.size,
        mean_ns = result.mean_ns,
        "measured"
    );
    Ok(result)
}

/// Run every selected contender over every configured size.
pub fn run_benchmarks(settings: &BenchSettings) -> Result<Vec<BenchResult>, CliError> {
    settings.validate()?;

    let mut generator = match settings.seed {
        Some(seed) => RandomArrayGenerator::seeded(seed),
        None => RandomArrayGenerator::from_entropy(),
    };

    let mut inputs = Vec::with_capacity(settings.sizes.len());
    for &size in &settings.sizes {
        inputs.push(generator.generate(size, settings.low, settings.high)?);
    }

    let mut results = Vec::new();
    for contender in contenders(settings) {
        for input in &inputs {
            if contender.is_quadratic() && input.len() > settings.quadratic_limit {
                info!(
                    contender = %contender,
                    size = input.len(),
                    limit = settings.quadratic_limit,
                    "skipping quadratic sort on oversized input"
                );
                continue;
            }
            results.push(measure(contender, input, settings.warmup, settings.iterations)?);
        }
    }
    info!(results = results.len(), "benchmarks finished");
    Ok(results)
}
