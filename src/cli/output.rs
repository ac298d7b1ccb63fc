//! CLI diagnostics.
//!
//! Stdout carries only the generated line, so everything here goes to
//! stderr. Respects NO_COLOR.

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

fn error_line(msg: &str, colored: bool) -> String {
    if colored {
        format!("{} {}", style("✗").red(), msg)
    } else {
        format!("✗ {}", msg)
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ failed to gather entropy: ...`
pub fn error(msg: &str) {
    eprintln!("{}", error_line(msg, colors_enabled()));
}
