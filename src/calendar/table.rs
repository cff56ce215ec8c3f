use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Event;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
  #[error("could not encode event table: {0}")]
  Encode(#[source] serde_json::Error),
  #[error("could not decode event table: {0}")]
  Decode(#[source] serde_json::Error),
}

/// Events of one source table, in scrape order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventGroup {
  pub name: String,
  pub events: Vec<Event>,
}

/// Events grouped by the name of the table they were scraped from.
///
/// Table names keep the order in which they were first seen. Adding to a name that
/// already exists extends its events, so several HTML tables sharing a caption end up
/// in one group. Identical events are kept twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTable {
  groups: Vec<EventGroup>,
}

impl EventTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_event(&mut self, table: &str, name: &str, start: NaiveDate, end: NaiveDate) {
    self.push(table, Event::new(name, start, end));
  }

  pub fn push(&mut self, table: &str, event: Event) {
    self.group_mut(table).events.push(event);
  }

  /// Table names in first-insertion order.
  pub fn list_tables(&self) -> Vec<String> {
    self.groups.iter().map(|group| group.name.clone()).collect()
  }

  /// Names, start dates and end dates of a table's events as three index-aligned lists.
  /// Unknown tables yield three empty lists.
  pub fn get_events(&self, table: &str) -> (Vec<String>, Vec<NaiveDate>, Vec<NaiveDate>) {
    let events = self.events(table);

    let names = events.iter().map(|event| event.name.clone()).collect();
    let (starts, ends) = events.iter().map(Event::start_end_dates).unzip();

    (names, starts, ends)
  }

  pub fn events(&self, table: &str) -> &[Event] {
    self.group(table).map(|group| group.events.as_slice()).unwrap_or_default()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &[Event])> {
    self.groups.iter().map(|group| (group.name.as_str(), group.events.as_slice()))
  }

  pub fn contains_table(&self, table: &str) -> bool {
    self.group(table).is_some()
  }

  pub fn len_tables(&self) -> usize {
    self.groups.len()
  }

  /// Total number of events over all tables.
  pub fn len(&self) -> usize {
    self.groups.iter().map(|group| group.events.len()).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Append every group of `other`, extending tables that already exist here.
  pub fn merge(&mut self, other: Self) {
    for group in other.groups {
      self.group_mut(&group.name).events.extend(group.events);
    }
  }

  /// # Errors
  /// Returns an error if serialization fails.
  pub fn to_json(&self) -> Result<String, TableError> {
    serde_json::to_string_pretty(&self.groups).map_err(TableError::Encode)
  }

  /// Read a table written by [`EventTable::to_json`]. Repeated table names are merged.
  ///
  /// # Errors
  /// Returns an error if `json` is not a list of event groups.
  pub fn from_json(json: &str) -> Result<Self, TableError> {
    let groups: Vec<EventGroup> = serde_json::from_str(json).map_err(TableError::Decode)?;

    let mut table = Self::new();
    for group in groups {
      table.group_mut(&group.name).events.extend(group.events);
    }

    Ok(table)
  }

  fn group(&self, table: &str) -> Option<&EventGroup> {
    self.groups.iter().find(|group| group.name == table)
  }

  fn group_mut(&mut self, table: &str) -> &mut EventGroup {
    let idx = match self.groups.iter().position(|group| group.name == table) {
      Some(idx) => idx,
      None => {
        self.groups.push(EventGroup { name: table.to_owned(), events: Vec::new() });
        self.groups.len() - 1
      }
    };

    &mut self.groups[idx]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
  }

  fn seeded() -> EventTable {
    let mut table = EventTable::new();
    table.add_event("table 1", "event 1", date(2024, 1, 1), date(2024, 1, 2));
    table.add_event("table 1", "event 2", date(2024, 2, 1), date(2024, 2, 1));
    table.add_event("table 2", "event 3", date(2024, 3, 1), date(2024, 3, 5));
    table
  }

  #[test]
  fn tables_in_first_insertion_order() {
    let mut table = EventTable::new();
    table.add_event("table 2", "event 1", date(2024, 1, 1), date(2024, 1, 1));
    table.add_event("table 1", "event 2", date(2024, 1, 1), date(2024, 1, 1));
    table.add_event("table 2", "event 3", date(2024, 1, 1), date(2024, 1, 1));

    assert_eq!(table.list_tables(), vec!["table 2", "table 1"]);
    assert_eq!(table.len_tables(), 2);
    assert_eq!(table.len(), 3);
  }

  #[test]
  fn events_are_index_aligned() {
    let (names, starts, ends) = seeded().get_events("table 1");

    assert_eq!(names, vec!["event 1", "event 2"]);
    assert_eq!(starts, vec![date(2024, 1, 1), date(2024, 2, 1)]);
    assert_eq!(ends, vec![date(2024, 1, 2), date(2024, 2, 1)]);
  }

  #[test]
  fn empty_table_lists_nothing() {
    let table = EventTable::new();

    assert!(table.list_tables().is_empty());
    assert!(table.is_empty());
  }

  #[test]
  fn unknown_table_yields_empty_lists() {
    let (names, starts, ends) = seeded().get_events("not a table");

    assert!(names.is_empty());
    assert!(starts.is_empty());
    assert!(ends.is_empty());
    assert!(seeded().events("not a table").is_empty());
  }

  #[test]
  fn table_names_are_case_sensitive() {
    let table = seeded();

    assert!(table.contains_table("table 1"));
    assert!(!table.contains_table("Table 1"));
  }

  #[test]
  fn duplicates_are_kept() {
    let mut table = EventTable::new();
    table.add_event("table 1", "event 1", date(2024, 1, 1), date(2024, 1, 2));
    table.add_event("table 1", "event 1", date(2024, 1, 1), date(2024, 1, 2));

    let (names, starts, ends) = table.get_events("table 1");
    assert_eq!(names.len(), 2);
    assert_eq!(starts.len(), 2);
    assert_eq!(ends.len(), 2);
  }

  #[test]
  fn merge_extends_existing_tables() {
    let mut table = seeded();
    let mut other = EventTable::new();
    other.add_event("table 3", "event 4", date(2024, 4, 1), date(2024, 4, 1));
    other.add_event("table 1", "event 5", date(2024, 5, 1), date(2024, 5, 1));

    table.merge(other);

    assert_eq!(table.list_tables(), vec!["table 1", "table 2", "table 3"]);
    assert_eq!(table.get_events("table 1").0, vec!["event 1", "event 2", "event 5"]);
  }

  #[test]
  fn json_keeps_order() {
    let table = seeded();
    let json = table.to_json().unwrap();

    assert!(json.contains("\"start\": \"2024-01-01\""));
    assert_eq!(EventTable::from_json(&json).unwrap(), table);
  }

  #[test]
  fn json_merges_repeated_names() {
    let json = r#"[
      {"name": "Holidays", "events": [{"name": "Labor Day", "start": "2024-09-02", "end": "2024-09-02"}]},
      {"name": "Holidays", "events": [{"name": "Fall Break", "start": "2024-10-06", "end": "2024-10-13"}]}
    ]"#;

    let table = EventTable::from_json(json).unwrap();
    assert_eq!(table.list_tables(), vec!["Holidays"]);
    assert_eq!(table.get_events("Holidays").0, vec!["Labor Day", "Fall Break"]);
  }

  #[test]
  fn malformed_json_is_an_error() {
    assert!(matches!(EventTable::from_json("{}"), Err(TableError::Decode(_))));
  }
}
