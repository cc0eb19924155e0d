//! Display modes and the unit table behind them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unit used to express every offset in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Days,
    Months,
    Years,
}

/// How a display mode turns a day count into text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Days per unit. Months and years are flat approximations.
    pub days_per_unit: f64,
    /// Unit label printed after the magnitude.
    pub label: &'static str,
    /// Minimum field width of the magnitude in report lines.
    pub width: usize,
    /// Decimal digits, or `None` for whole days.
    pub precision: Option<usize>,
}

const DAYS: Scale = Scale {
    days_per_unit: 1.0,
    label: "days",
    width: 6,
    precision: None,
};

const MONTHS: Scale = Scale {
    days_per_unit: 30.0,
    label: "months",
    width: 5,
    precision: Some(2),
};

const YEARS: Scale = Scale {
    days_per_unit: 365.0,
    label: "years",
    width: 5,
    precision: Some(2),
};

impl DisplayMode {
    /// All modes, in flag order.
    pub const ALL: [Self; 3] = [Self::Days, Self::Months, Self::Years];

    /// Returns the unit table entry for this mode.
    #[must_use]
    pub const fn scale(self) -> &'static Scale {
        match self {
            Self::Days => &DAYS,
            Self::Months => &MONTHS,
            Self::Years => &YEARS,
        }
    }

    /// Lowercase name used in configuration and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Months => "months",
            Self::Years => "years",
        }
    }

    /// Converts a signed day count into this mode's unit.
    #[allow(clippy::cast_precision_loss)]
    pub fn convert(self, days: i64) -> f64 {
        days as f64 / self.scale().days_per_unit
    }

    /// Formats the magnitude of `days` padded to the report column width.
    pub fn format_magnitude(self, days: i64) -> String {
        self.render_magnitude(days, self.scale().width)
    }

    /// Formats `days` as `<magnitude> <unit> <direction>` with no padding.
    ///
    /// Used inside descriptions, e.g. `152 days ago`.
    pub fn format_span(self, days: i64) -> String {
        format!(
            "{} {} {}",
            self.render_magnitude(days, 0),
            self.scale().label,
            Direction::of(days).label()
        )
    }

    fn render_magnitude(self, days: i64, width: usize) -> String {
        match self.scale().precision {
            None => format!("{:>width$}", days.unsigned_abs()),
            Some(precision) => {
                // abs() keeps a zero offset from printing as "-0.00"
                let value = self.convert(days).abs();
                format!("{value:>width$.precision$}")
            }
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = UnknownDisplayMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days" | "d" => Ok(Self::Days),
            "months" | "m" => Ok(Self::Months),
            "years" | "y" => Ok(Self::Years),
            _ => Err(UnknownDisplayMode(s.to_string())),
        }
    }
}

// Goes through `FromStr` so config files and env vars accept the short aliases.
impl<'de> Deserialize<'de> for DisplayMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown display mode strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDisplayMode(String);

impl fmt::Display for UnknownDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown display mode: {} (expected days, months or years)",
            self.0
        )
    }
}

impl std::error::Error for UnknownDisplayMode {}

/// Whether an event is still ahead or already behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Ago,
}

impl Direction {
    /// Strictly positive offsets are still ahead; zero counts as past.
    #[must_use]
    pub const fn of(days: i64) -> Self {
        if days > 0 { Self::Left } else { Self::Ago }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Ago => "ago",
        }
    }
}
