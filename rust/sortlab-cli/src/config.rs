//! Configuration file parsing for `sortlab.toml`.
//!
//! Searches the current directory then its ancestors, falling back to
//! `~/.config/sortlab/sortlab.toml` if no project-level file is found.
//! Command-line flags are applied on top of whatever was loaded.

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use sortlab_core::{Algorithm, SortError};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

pub const CONFIG_FILE: &str = "sortlab.toml";

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SortlabConfig {
    #[serde(default)]
    pub bench: BenchSettings,
}

/// Settings for `sortlab bench`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BenchSettings {
    /// Input sizes to benchmark.
    pub sizes: Vec<usize>,
    /// Timed runs per contender and size.
    pub iterations: u32,
    /// Untimed runs before measuring.
    pub warmup: u32,
    /// Inclusive lower bound of generated values.
    pub low: i32,
    /// Inclusive upper bound of generated values.
    pub high: i32,
    /// Seed for reproducible inputs; drawn from OS entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub algorithms: Vec<Algorithm>,
    /// Also time `slice::sort` and `slice::sort_unstable`.
    pub baselines: bool,
    /// Largest size handed to an O(n²) algorithm.
    pub quadratic_limit: usize,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            sizes: vec![1000, 5000, 10000],
            iterations: 5,
            warmup: 1,
            low: 1,
            high: 100,
            seed: None,
            algorithms: Algorithm::iter().collect(),
            baselines: true,
            quadratic_limit: 50_000,
        }
    }
}

/// Command-line values layered over [`BenchSettings`]. `None`, an empty
/// list or `false` leaves the loaded value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchOverrides {
    pub sizes: Option<Vec<usize>>,
    pub iterations: Option<u32>,
    pub warmup: Option<u32>,
    pub low: Option<i32>,
    pub high: Option<i32>,
    pub seed: Option<u64>,
    pub algorithms: Vec<Algorithm>,
    pub no_baselines: bool,
}

impl BenchSettings {
    pub fn apply_overrides(&mut self, overrides: &BenchOverrides) {
        if let Some(sizes) = &overrides.sizes {
            self.sizes = sizes.clone();
        }
        if let Some(iterations) = overrides.iterations {
            self.iterations = iterations;
        }
        if let Some(warmup) = overrides.warmup {
            self.warmup = warmup;
        }
        if let Some(low) = overrides.low {
            self.low = low;
        }
        if let Some(high) = overrides.high {
            self.high = high;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if !overrides.algorithms.is_empty() {
            self.algorithms = overrides.algorithms.clone();
        }
        if overrides.no_baselines {
            self.baselines = false;
        }
    }

    pub fn validate(&self) -> Result<(), CliError> {
        if self.low > self.high {
            return Err(SortError::InvalidRange {
                low: self.low,
                high: self.high,
            }
            .into());
        }
        if self.iterations == 0 {
            return Err(CliError::InvalidArgument(
                "iterations must be at least 1".to_string(),
            ));
        }
        if self.sizes.is_empty() {
            return Err(CliError::InvalidArgument(
                "no input sizes given".to_string(),
            ));
        }
        if self.algorithms.is_empty() && !self.baselines {
            return Err(CliError::InvalidArgument(
                "nothing to benchmark: no algorithms selected and baselines disabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl SortlabConfig {
    /// Load the config at `explicit` if given, otherwise search for one.
    /// Returns the path that was loaded, or `None` when defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<(Option<PathBuf>, Self), CliError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find(),
        };
        match path {
            Some(path) => {
                let cfg = Self::load_from(&path)?;
                Ok((Some(path), cfg))
            }
            None => Ok((None, Self::default())),
        }
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn find() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::find_from(&cwd).or_else(|| {
            let global = dirs::config_dir()?.join("sortlab").join(CONFIG_FILE);
            global.is_file().then_some(global)
        })
    }

    /// Look for `sortlab.toml` in `start` and each of its ancestors.
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }
}
