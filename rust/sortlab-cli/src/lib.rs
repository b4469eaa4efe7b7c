//! Sortlab CLI library: configuration, benchmark harness and reporting
//! behind the `sortlab` binary.

pub mod bench;
pub mod colors;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
