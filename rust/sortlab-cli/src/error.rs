//! CLI error type and cause-chain formatting.

use sortlab_core::{SortError, Violation};
use std::error::Error as _;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}'", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid toml in '{}'", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error("{contender} produced bad output for input size {size}")]
    Verification {
        contender: String,
        size: usize,
        #[source]
        violation: Violation,
    },
    #[error("cannot serialize report")]
    Report(#[from] serde_json::Error),
}

impl CliError {
    /// Format the error with its full source chain:
    ///
    /// ```text
    /// error: <primary message>
    ///   caused by: <cause 1>
    /// ```
    pub fn format_chain(&self) -> String {
        let mut out = format!("error: {}", self);
        let mut source = self.source();
        while let Some(cause) = source {
            out.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        out
    }
}
