//! Rendering of benchmark results as text, CSV or JSON.

use crate::bench::BenchResult;
use crate::colors;
use crate::error::CliError;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Csv,
    Json,
}

pub fn render(results: &[BenchResult], format: Format) -> Result<String, CliError> {
    match format {
        Format::Text => Ok(render_text(results)),
        Format::Csv => Ok(render_csv(results)),
        Format::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

/// Human-readable report, one block per contender:
///
/// ```text
/// Quick Sort
///   With input size 1000: 41250 nanoseconds (0.041 ms, 5 iters)
/// ```
pub fn render_text(results: &[BenchResult]) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;
    for r in results {
        if current != Some(r.contender.as_str()) {
            if current.is_some() {
                out.push('\n');
            }
            let stability = if r.stable { "stable" } else { "unstable" };
            out.push_str(&format!(
                "{} {}\n",
                colors::bold(&r.title),
                colors::gray(&format!("[{}]", stability))
            ));
            current = Some(r.contender.as_str());
        }
        out.push_str(&format!(
            "  With input size {}: {} nanoseconds {}\n",
            r.size,
            r.mean_ns,
            colors::gray(&format!("({:.3} ms, {} iters)", r.mean_ms(), r.iterations)),
        ));
    }
    out
}

pub const CSV_HEADER: &str = "contender,stable,size,iterations,total_ns,mean_ns,min_ns,max_ns";

pub fn render_csv(results: &[BenchResult]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for r in results {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            r.contender, r.stable, r.size, r.iterations, r.total_ns, r.mean_ns, r.min_ns, r.max_ns,
        ));
    }
    out
}
