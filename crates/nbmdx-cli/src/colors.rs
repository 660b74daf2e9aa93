//! Terminal color constants for CLI output.

use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[32m";

/// Flush stdout so a progress line without a trailing newline shows up.
#[inline]
pub fn flush_stdout() {
    io::stdout().flush().ok();
}
