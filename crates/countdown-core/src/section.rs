//! Named groups of events.

use chrono::NaiveDate;

use crate::display::DisplayMode;
use crate::event::Event;

/// Title of the section holding events that precede any header.
pub const DEFAULT_SECTION_TITLE: &str = "Default Group";

/// Header lines are padded with `-` up to this many characters.
const HEADER_WIDTH: usize = 50;

/// An ordered, titled group of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: String,
    events: Vec<Event>,
}

impl Default for Section {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION_TITLE)
    }
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            events: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Sorts events by date. Events on the same date keep their order.
    pub fn sort(&mut self) {
        self.events.sort_by_key(Event::when);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// `-- <title> ` followed by dashes up to the header width.
    ///
    /// Titles longer than the width are kept whole.
    pub fn header(&self) -> String {
        let mut header = format!("-- {} ", self.title);
        let used = header.chars().count();
        header.push_str(&"-".repeat(HEADER_WIDTH.saturating_sub(used)));
        header
    }

    /// Renders the header and one line per event, ending in a newline.
    pub fn render(&self, today: NaiveDate, mode: DisplayMode) -> String {
        let mut output = self.header();
        for event in &self.events {
            output.push('\n');
            output.push_str(&event.format(today, mode));
        }
        output.push('\n');
        output
    }
}
