//! Building a countdown report from its text file.
//!
//! Loading happens in two steps: every line is classified on its own
//! ([`classify_line`]), then the classified lines are folded into sections
//! ([`Countdown::from_lines`]). Rendering takes the reporting day as an
//! argument and cannot fail.

use std::path::Path;

use chrono::NaiveDate;

use crate::display::DisplayMode;
use crate::error::{CountdownError, EventParseError};
use crate::event::Event;
use crate::section::Section;

/// What a single input line means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Empty after trimming.
    Blank,
    /// Starts with `#`.
    Comment,
    /// Starts with `-`; holds the trimmed title.
    Header(String),
    Event(Event),
}

/// Classifies one raw line. Surrounding whitespace is ignored.
pub fn classify_line(raw: &str) -> Result<Line, EventParseError> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(Line::Blank);
    }
    if line.starts_with('#') {
        return Ok(Line::Comment);
    }
    if let Some(title) = line.strip_prefix('-') {
        return Ok(Line::Header(title.trim().to_string()));
    }
    Event::parse(line).map(Line::Event)
}

/// Classifies every line of `text`, tagging failures with their line number.
pub fn classify(text: &str) -> impl Iterator<Item = Result<Line, CountdownError>> + '_ {
    text.lines().enumerate().map(|(index, raw)| {
        classify_line(raw).map_err(|reason| CountdownError::InvalidEvent {
            line_number: index + 1,
            line: raw.trim().to_string(),
            reason,
        })
    })
}

/// Reports every malformed line in `text` instead of stopping at the first.
pub fn diagnose(text: &str) -> Vec<CountdownError> {
    classify(text).filter_map(Result::err).collect()
}

/// A loaded countdown report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    sections: Vec<Section>,
    display: DisplayMode,
}

impl Countdown {
    /// Reads and parses the file at `path`.
    pub fn load(path: &Path, display: DisplayMode) -> Result<Self, CountdownError> {
        let text = std::fs::read_to_string(path).map_err(|source| CountdownError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), lines = text.lines().count(), "read countdown file");
        Self::parse(&text, display)
    }

    /// Parses a whole countdown file. The first malformed event aborts.
    pub fn parse(text: &str, display: DisplayMode) -> Result<Self, CountdownError> {
        let lines = classify(text).collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_lines(lines, display))
    }

    /// Folds classified lines into sections, then sorts each section.
    ///
    /// Events before the first header land in the default section, which
    /// is always present.
    pub fn from_lines(lines: impl IntoIterator<Item = Line>, display: DisplayMode) -> Self {
        let mut sections = vec![Section::default()];
        for line in lines {
            match line {
                Line::Blank | Line::Comment => {}
                Line::Header(title) => sections.push(Section::new(title)),
                Line::Event(event) => {
                    if let Some(current) = sections.last_mut() {
                        current.append(event);
                    }
                }
            }
        }

        for section in &mut sections {
            section.sort();
        }

        let countdown = Self { sections, display };
        tracing::debug!(
            sections = countdown.sections.len(),
            events = countdown.event_count(),
            mode = %countdown.display,
            "loaded countdown"
        );
        countdown
    }

    /// All sections in file order, empty ones included.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub const fn display(&self) -> DisplayMode {
        self.display
    }

    /// Returns the same report shown in another unit.
    #[must_use]
    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    pub fn event_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Sections that have at least one event.
    pub fn visible_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|section| !section.is_empty())
    }

    /// Renders non-empty sections separated by blank lines.
    pub fn render(&self, today: NaiveDate) -> String {
        self.visible_sections()
            .map(|section| section.render(today, self.display))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
