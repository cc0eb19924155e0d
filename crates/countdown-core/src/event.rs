//! Dated events and their offsets from a reference date.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::display::{Direction, DisplayMode};
use crate::error::EventParseError;

/// A `YYYY-MM-DD` token with an optional trailing `!`.
static DATE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(!?)$").unwrap()
});

/// One side of an event's date specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateToken {
    pub date: NaiveDate,
    /// Count the day itself: offsets move one day further from zero.
    pub inclusive: bool,
}

impl DateToken {
    /// Parses `YYYY-MM-DD` or `YYYY-MM-DD!`. Month and day must be zero-padded.
    pub fn parse(token: &str) -> Option<Self> {
        let caps = DATE_TOKEN_RE.captures(token)?;
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self {
            date,
            inclusive: !caps[4].is_empty(),
        })
    }
}

/// A single dated entry in a countdown report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    description: String,
    start: DateToken,
    stop: Option<DateToken>,
}

/// Where a ranged event stopped, relative to the reporting day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopped {
    /// Signed offset of the start date from the reporting day.
    pub started_days: i64,
    /// The stop date.
    pub on: NaiveDate,
}

/// The offset an event displays on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    /// Signed day count: positive means still ahead.
    pub days: i64,
    /// Set once a ranged event's stop date has passed.
    pub stopped: Option<Stopped>,
}

impl Offset {
    pub const fn direction(&self) -> Direction {
        Direction::of(self.days)
    }

    /// The `(started …, stopped …)` note appended to ranged events.
    pub fn annotation(&self, mode: DisplayMode) -> Option<String> {
        self.stopped.map(|stopped| {
            format!(
                "(started {}, stopped {})",
                mode.format_span(stopped.started_days),
                stopped.on.format("%Y-%m-%d")
            )
        })
    }
}

/// Moves a day count `steps` days further from "today": up when ahead,
/// down when today or behind.
const fn nudge(days: i64, steps: i64) -> i64 {
    if days > 0 { days + steps } else { days - steps }
}

fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

impl Event {
    /// Creates a point-in-time event.
    pub fn new(description: impl Into<String>, when: NaiveDate, inclusive: bool) -> Self {
        Self {
            description: description.into(),
            start: DateToken {
                date: when,
                inclusive,
            },
            stop: None,
        }
    }

    /// Turns this event into a ranged one ending at `stop`.
    #[must_use]
    pub fn with_stop(mut self, stop: NaiveDate, inclusive: bool) -> Self {
        self.stop = Some(DateToken {
            date: stop,
            inclusive,
        });
        self
    }

    /// Parses `<date>[!][/<date>[!]] <description>`.
    ///
    /// The specifier ends at the first run of whitespace; everything after
    /// it is the description, kept verbatim. A bare specifier gives an empty
    /// description.
    pub fn parse(line: &str) -> Result<Self, EventParseError> {
        let line = line.trim();
        let (spec, description) = match line.split_once(char::is_whitespace) {
            Some((spec, rest)) => (spec, rest.trim_start()),
            None => (line, ""),
        };

        let (start_token, stop_token) = match spec.split_once('/') {
            Some((start, stop)) => (start, Some(stop)),
            None => (spec, None),
        };

        let start =
            DateToken::parse(start_token).ok_or_else(|| EventParseError::InvalidStartDate {
                token: start_token.to_string(),
            })?;
        let stop = stop_token
            .map(|token| {
                DateToken::parse(token).ok_or_else(|| EventParseError::InvalidStopDate {
                    token: token.to_string(),
                })
            })
            .transpose()?;

        if let Some(stop) = stop {
            if stop.date < start.date {
                tracing::warn!(
                    start = %start.date,
                    stop = %stop.date,
                    description,
                    "stop date precedes start date"
                );
            }
        }

        Ok(Self {
            description: description.to_string(),
            start,
            stop,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The anchor date, used for sorting.
    pub const fn when(&self) -> NaiveDate {
        self.start.date
    }

    pub fn stop(&self) -> Option<NaiveDate> {
        self.stop.map(|stop| stop.date)
    }

    pub const fn start_token(&self) -> DateToken {
        self.start
    }

    pub const fn stop_token(&self) -> Option<DateToken> {
        self.stop
    }

    /// Signed days from `reference` until the event, e.g. 5 or -5.
    pub fn relative_days(&self, reference: NaiveDate) -> i64 {
        nudge(
            days_between(self.start.date, reference),
            i64::from(self.start.inclusive),
        )
    }

    pub fn relative_months(&self, reference: NaiveDate) -> f64 {
        DisplayMode::Months.convert(self.relative_days(reference))
    }

    pub fn relative_years(&self, reference: NaiveDate) -> f64 {
        DisplayMode::Years.convert(self.relative_days(reference))
    }

    /// Computes what the event shows on `today`.
    ///
    /// A ranged event whose stop date is before `today` is frozen at its stop
    /// date: the offset spans start to stop, counting each inclusive side.
    pub fn offset(&self, today: NaiveDate) -> Offset {
        match self.stop {
            Some(stop) if stop.date < today => {
                let steps = i64::from(self.start.inclusive) + i64::from(stop.inclusive);
                Offset {
                    days: nudge(days_between(self.start.date, stop.date), steps),
                    stopped: Some(Stopped {
                        started_days: self.relative_days(today),
                        on: stop.date,
                    }),
                }
            }
            _ => Offset {
                days: self.relative_days(today),
                stopped: None,
            },
        }
    }

    /// Renders one report line, e.g. `    12 days left - Vacation`.
    pub fn format(&self, today: NaiveDate, mode: DisplayMode) -> String {
        let offset = self.offset(today);
        let mut line = format!(
            "{} {} {:<4} - {}",
            mode.format_magnitude(offset.days),
            mode.scale().label,
            offset.direction().label(),
            self.description
        );
        if let Some(annotation) = offset.annotation(mode) {
            line.push(' ');
            line.push_str(&annotation);
        }
        line
    }
}
