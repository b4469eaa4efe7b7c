//! Output of the small subcommands (`sort`, `generate`, `list`).

use crate::colors;
use crate::error::CliError;
use sortlab_core::{Algorithm, RandomArrayGenerator};
use strum::IntoEnumIterator;

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sort `values` with `algorithm` and format them space-separated.
pub fn sort_values(algorithm: Algorithm, mut values: Vec<i32>) -> String {
    algorithm.sort(&mut values);
    join(&values)
}

/// Generate `n` values in `[low, high]` and format them space-separated.
pub fn generate_values(n: usize, low: i32, high: i32, seed: Option<u64>) -> Result<String, CliError> {
    let mut generator = match seed {
        Some(seed) => RandomArrayGenerator::seeded(seed),
        None => RandomArrayGenerator::from_entropy(),
    };
    Ok(join(&generator.generate(n, low, high)?))
}

/// One line per algorithm: name, stability and complexity.
pub fn list_algorithms() -> String {
    let mut out = String::new();
    for algorithm in Algorithm::iter() {
        let name: &'static str = algorithm.into();
        // pad before coloring so escape codes do not skew the columns
        let stability = if algorithm.is_stable() {
            colors::green(&format!("{:<8}", "stable"))
        } else {
            colors::gray(&format!("{:<8}", "unstable"))
        };
        out.push_str(&format!(
            "{} {} {}\n",
            colors::cyan(&format!("{:<10}", name)),
            stability,
            algorithm.complexity()
        ));
    }
    out
}
