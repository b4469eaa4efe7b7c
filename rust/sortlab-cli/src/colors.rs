//! ANSI color helpers for CLI output.
//!
//! Coloring is on by default and turned off by `--no-color` or a non-empty
//! `NO_COLOR` environment variable.

use std::sync::atomic::{AtomicBool, Ordering};

static ENABLED: AtomicBool = AtomicBool::new(true);

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
}

fn paint(code: &str, s: &str) -> String {
    if enabled() {
        format!("\x1b[{}m{}\x1b[0m", code, s)
    } else {
        s.to_string()
    }
}

/// Format text in green.
pub fn green(s: &str) -> String {
    paint("32", s)
}

/// Format text in red.
pub fn red(s: &str) -> String {
    paint("31", s)
}

/// Format text in cyan.
pub fn cyan(s: &str) -> String {
    paint("36", s)
}

/// Format text in bold.
pub fn bold(s: &str) -> String {
    paint("1", s)
}

/// Format text in gray.
pub fn gray(s: &str) -> String {
    paint("90", s)
}
