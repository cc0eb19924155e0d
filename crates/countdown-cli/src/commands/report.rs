//! Report command for printing a countdown.
//!
//! Prints the loaded report as aligned text, or as JSON with `--json`.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use countdown_core::{Countdown, Direction, DisplayMode, Event};
use serde::Serialize;

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub today: String,
    pub display: DisplayMode,
    pub sections: Vec<JsonSection>,
}

#[derive(Debug, Serialize)]
pub struct JsonSection {
    pub title: String,
    pub events: Vec<JsonEvent>,
}

#[derive(Debug, Serialize)]
pub struct JsonEvent {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    pub description: String,
    /// Signed offset in days; positive means still ahead.
    pub days: i64,
    /// Signed offset in the report's display unit.
    pub value: f64,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

fn json_event(event: &Event, today: NaiveDate, display: DisplayMode) -> JsonEvent {
    let offset = event.offset(today);
    JsonEvent {
        date: event.when().format("%Y-%m-%d").to_string(),
        stop: event.stop().map(|stop| stop.format("%Y-%m-%d").to_string()),
        description: event.description().to_string(),
        days: offset.days,
        value: display.convert(offset.days),
        direction: offset.direction(),
        annotation: offset.annotation(display),
    }
}

/// Builds the JSON view of a report. Empty sections are left out.
pub fn json_report(countdown: &Countdown, today: NaiveDate) -> JsonReport {
    let display = countdown.display();
    JsonReport {
        today: today.format("%Y-%m-%d").to_string(),
        display,
        sections: countdown
            .visible_sections()
            .map(|section| JsonSection {
                title: section.title().to_string(),
                events: section
                    .events()
                    .iter()
                    .map(|event| json_event(event, today, display))
                    .collect(),
            })
            .collect(),
    }
}

/// Formats report data as JSON.
pub fn format_report_json(countdown: &Countdown, today: NaiveDate) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json_report(countdown, today))?)
}

// ========== Public Interface ==========

/// Runs the report command.
pub fn run<W: Write>(
    writer: &mut W,
    countdown: &Countdown,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    if json {
        let output = format_report_json(countdown, today)?;
        writeln!(writer, "{output}")?;
    } else {
        write!(writer, "{}", countdown.render(today))?;
    }
    Ok(())
}
