//! Check command: validates a countdown file and lists every bad line.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use countdown_core::{Countdown, CountdownError, DisplayMode, diagnose};

/// Runs the check command.
///
/// Prints one line per malformed event and fails if there were any;
/// otherwise prints a short summary.
pub fn run<W: Write>(writer: &mut W, path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let errors = diagnose(&text);
    if !errors.is_empty() {
        for error in &errors {
            if let CountdownError::InvalidEvent {
                line_number,
                line,
                reason,
            } = error
            {
                writeln!(writer, "line {line_number}: {reason}: {line}")?;
            }
        }
        bail!(
            "{} malformed line(s) in {}",
            errors.len(),
            path.display()
        );
    }

    let countdown = Countdown::parse(&text, DisplayMode::default())?;
    writeln!(
        writer,
        "ok: {} events in {} sections",
        countdown.event_count(),
        countdown.visible_sections().count()
    )?;
    Ok(())
}
