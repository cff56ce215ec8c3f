use chrono::NaiveDate;

use super::{Event, EventTable};
use crate::ics::{CalendarExporter, ValidationError};

/// Event names per table, for presenting a table-grouped pick list.
pub fn grouped_event_names(table: &EventTable) -> Vec<(String, Vec<String>)> {
  table
    .iter()
    .map(|(name, events)| {
      let names = events.iter().map(|event| event.name.clone()).collect();
      (name.to_owned(), names)
    })
    .collect()
}

/// Fill an exporter with the events of `table` accepted by `selected`.
///
/// # Errors
/// Returns the first validation error; events accepted before it stay in `exporter`.
pub fn select_into<F>(table: &EventTable, exporter: &mut CalendarExporter, mut selected: F) -> Result<usize, ValidationError>
where
  F: FnMut(&str, &Event) -> bool,
{
  let mut count = 0;

  for (name, events) in table.iter() {
    for event in events.iter().filter(|event| selected(name, event)) {
      exporter.add_event(&event.name, event.start, event.end)?;
      count += 1;
    }
  }

  Ok(count)
}

/// Export the events of `table` accepted by `selected` as an iCalendar document.
///
/// # Errors
/// Returns an error if a selected event fails validation.
pub fn export_selected<F>(table: &EventTable, selected: F) -> Result<Vec<u8>, ValidationError>
where
  F: FnMut(&str, &Event) -> bool,
{
  let mut exporter = CalendarExporter::new();
  select_into(table, &mut exporter, selected)?;

  Ok(exporter.export())
}

/// Export events given as three index-aligned lists, as returned by
/// [`EventTable::get_events`].
///
/// # Errors
/// Returns an error if the lists differ in length or an event fails validation.
pub fn export_events(names: &[String], starts: &[NaiveDate], ends: &[NaiveDate]) -> Result<Vec<u8>, ValidationError> {
  if names.len() != starts.len() || names.len() != ends.len() {
    return Err(ValidationError::LengthMismatch {
      names: names.len(),
      starts: starts.len(),
      ends: ends.len(),
    });
  }

  let mut exporter = CalendarExporter::new();
  for ((name, start), end) in names.iter().zip(starts).zip(ends) {
    exporter.add_event(name, *start, *end)?;
  }

  Ok(exporter.export())
}
