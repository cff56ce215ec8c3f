use chrono::NaiveDate;
use icalendar::{Calendar, Component as _, EventLike as _};
use uuid::Uuid;

use super::event_builder::{EventBuilder, ValidationError};
use crate::calendar::Event;

/// Collects validated events and writes them as one iCalendar document.
#[derive(Debug, Clone, Default)]
pub struct CalendarExporter {
  name: Option<String>,
  events: Vec<Event>,
}

impl CalendarExporter {
  pub fn new() -> Self {
    Self::default()
  }

  /// Name the calendar (`X-WR-CALNAME`) in exported documents.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Accept an event for export.
  ///
  /// # Errors
  /// Returns an error if `name` is blank or `start` lies after `end`. Rejected events
  /// leave the accepted ones untouched.
  pub fn add_event(&mut self, name: &str, start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    let event = EventBuilder::default()
      .set_summary_opt(Some(name.to_owned()))
      .set_start_opt(Some(start))
      .set_end_opt(Some(end))
      .build()?;

    self.events.push(event);
    Ok(())
  }

  pub fn events(&self) -> &[Event] {
    &self.events
  }

  pub fn len(&self) -> usize {
    self.events.len()
  }

  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }

  /// Every call generates fresh `UID`s.
  pub fn to_calendar(&self) -> Calendar {
    let mut calendar = Calendar::new();

    if let Some(name) = &self.name {
      calendar.name(name);
    }

    for event in &self.events {
      calendar.push(vevent(event));
    }

    calendar.done()
  }

  /// Serialize all accepted events as a UTF-8 iCalendar document.
  pub fn export(&self) -> Vec<u8> {
    let document = self.to_calendar().to_string();
    log::debug!("Exported {} events ({} bytes)", self.events.len(), document.len());

    document.into_bytes()
  }
}

/// All-day `VEVENT`; `DTEND` is the day after the last day.
fn vevent(event: &Event) -> icalendar::Event {
  let end = event.end.succ_opt().unwrap_or(event.end);

  icalendar::Event::new()
    .uid(&Uuid::new_v4().to_string())
    .summary(&event.name)
    .starts(event.start)
    .ends(end)
    .done()
}
