//! Output formatting.

use std::io::{self, Write};
use std::time::Duration;

/// Format a digit string for display, truncating long results unless
/// verbose output was requested.
#[must_use]
pub fn format_result(digits: &str, verbose: bool) -> String {
    if !verbose && digits.len() > 80 {
        format!(
            "{}...{} ({} digits)",
            &digits[..40],
            &digits[digits.len() - 40..],
            digits.len()
        )
    } else {
        digits.to_string()
    }
}

/// Format a duration for display.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Write the digit string to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, digits: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{digits}")?;
    Ok(())
}
