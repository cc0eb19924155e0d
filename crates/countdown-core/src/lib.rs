//! Core domain logic for countdown reports.
//!
//! This crate contains the fundamental types and logic for:
//! - Events: parsing dated lines and computing offsets from a reference day
//! - Sections: titled, chronologically sorted groups of events
//! - Reports: folding a countdown file into sections and rendering it

mod countdown;
pub mod display;
mod error;
pub mod event;
mod section;

pub use countdown::{Countdown, Line, classify, classify_line, diagnose};
pub use display::{Direction, DisplayMode, Scale, UnknownDisplayMode};
pub use error::{CountdownError, EventParseError};
pub use event::{DateToken, Event, Offset, Stopped};
pub use section::{DEFAULT_SECTION_TITLE, Section};
