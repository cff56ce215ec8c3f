#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
//! Read registrar academic-calendar pages into table-grouped events and export a
//! selection of them as iCalendar.

pub mod calendar;
pub mod config;
pub mod dates;
pub mod ics;
pub mod registrar;

pub use calendar::{Event, EventTable};
pub use dates::{parse, DateRange, ParseError};
pub use ics::CalendarExporter;
pub use registrar::SiteExtractor;
