use super::event_builder::{EventBuilder, ValidationError};
use crate::calendar::Event;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
  #[error("calendar is not UTF-8: {0}")]
  Encoding(#[from] std::str::Utf8Error),
  #[error("could not parse calendar: {0}")]
  Parsing(String),
  #[error("invalid event: {0}")]
  Event(#[from] ValidationError),
}

/// Read the `VEVENT`s of an iCalendar document back into whole-day events.
///
/// # Errors
/// Returns an error if the document is not UTF-8, is not an iCalendar document, or
/// contains an event without summary or start.
pub fn decode_events(bytes: &[u8]) -> Result<Vec<Event>, DecodeError> {
  let text = std::str::from_utf8(bytes)?;
  let unfolded = icalendar::parser::unfold(text);

  let calendar = unfolded
    .parse::<icalendar::Calendar>()
    .map_err(DecodeError::Parsing)?;

  let events = calendar
    .components
    .iter()
    .filter_map(|c| match c {
      icalendar::CalendarComponent::Event(event) => Some(EventBuilder::from(event).build()),
      _ => None,
    })
    .collect::<Result<Vec<_>, _>>()?;

  Ok(events)
}
