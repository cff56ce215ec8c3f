use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use icalendar::{CalendarDateTime, Component as _, DatePerhapsTime, EventLike as _};

use crate::calendar::Event;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
  #[error("event has no summary")]
  NoSummary,
  #[error("event name is blank")]
  BlankName,
  #[error("event has no start date")]
  NoStart,
  #[error("event ends on {end} before it starts on {start}")]
  InvertedRange { start: NaiveDate, end: NaiveDate },
  #[error("got {names} names, {starts} start dates and {ends} end dates")]
  LengthMismatch {
    names: usize,
    starts: usize,
    ends: usize,
  },
}

#[derive(Debug, Default)]
pub struct EventBuilder {
  pub summary: Option<String>,
  pub start: Option<NaiveDate>,
  pub end: Option<NaiveDate>,
}

impl EventBuilder {
  /// Builds the event. A missing end makes a single-day event.
  ///
  /// # Errors
  /// Returns an error if the summary is missing or blank, the start is missing, or the
  /// end lies before the start.
  pub fn build(self) -> Result<Event, ValidationError> {
    let summary = self.summary.ok_or(ValidationError::NoSummary)?;
    if summary.trim().is_empty() {
      return Err(ValidationError::BlankName);
    }

    let start = self.start.ok_or(ValidationError::NoStart)?;
    let end = self.end.unwrap_or(start);
    if start > end {
      return Err(ValidationError::InvertedRange { start, end });
    }

    Ok(Event::new(summary, start, end))
  }

  pub fn set_summary_opt(mut self, summary: Option<String>) -> Self {
    self.summary = summary;
    self
  }

  pub fn set_start_opt(mut self, start: Option<NaiveDate>) -> Self {
    self.start = start;
    self
  }

  pub fn set_end_opt(mut self, end: Option<NaiveDate>) -> Self {
    self.end = end;
    self
  }
}

impl From<&icalendar::Event> for EventBuilder {
  fn from(event: &icalendar::Event) -> Self {
    let start = event.get_start().map(start_date);
    // `DTEND` equal to an all-day `DTSTART` still covers that day.
    let end = event
      .get_end()
      .map(inclusive_end_date)
      .map(|end| start.map_or(end, |start| end.max(start)));

    Self::default()
      .set_summary_opt(event.get_summary().map(std::borrow::ToOwned::to_owned))
      .set_start_opt(start)
      .set_end_opt(end)
  }
}

fn date_time(date: DatePerhapsTime) -> NaiveDateTime {
  match date {
    DatePerhapsTime::DateTime(dt) => match dt {
      CalendarDateTime::Floating(dt) => dt,
      CalendarDateTime::WithTimezone { date_time, .. } => date_time,
      CalendarDateTime::Utc(dt) => dt.naive_utc(),
    },
    DatePerhapsTime::Date(dt) => dt.and_time(NaiveTime::MIN),
  }
}

fn start_date(date: DatePerhapsTime) -> NaiveDate {
  date_time(date).date()
}

/// `DTEND` is exclusive: an end at midnight belongs to the previous day.
fn inclusive_end_date(date: DatePerhapsTime) -> NaiveDate {
  let end = date_time(date);

  if end.time() == NaiveTime::MIN {
    end.date().pred_opt().unwrap_or_else(|| end.date())
  } else {
    end.date()
  }
}

#[cfg(test)]
mod tests {
  use icalendar::{Component as _, EventLike as _};

  use super::*;

  fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
  }

  #[test]
  fn builds_single_day_without_end() {
    let event = EventBuilder::default()
      .set_summary_opt(Some("Labor Day".to_owned()))
      .set_start_opt(Some(date(2024, 9, 2)))
      .build()
      .unwrap();

    assert_eq!(event, Event::single_day("Labor Day", date(2024, 9, 2)));
  }

  #[test]
  fn rejects_blank_and_missing_fields() {
    let blank = EventBuilder::default()
      .set_summary_opt(Some(" \t".to_owned()))
      .set_start_opt(Some(date(2024, 9, 2)))
      .build();
    assert_eq!(blank, Err(ValidationError::BlankName));

    assert_eq!(EventBuilder::default().build(), Err(ValidationError::NoSummary));

    let no_start = EventBuilder::default()
      .set_summary_opt(Some("Labor Day".to_owned()))
      .build();
    assert_eq!(no_start, Err(ValidationError::NoStart));
  }

  #[test]
  fn rejects_inverted_range() {
    let inverted = EventBuilder::default()
      .set_summary_opt(Some("Backwards".to_owned()))
      .set_start_opt(Some(date(2024, 9, 3)))
      .set_end_opt(Some(date(2024, 9, 2)))
      .build();

    assert_eq!(
      inverted,
      Err(ValidationError::InvertedRange {
        start: date(2024, 9, 3),
        end: date(2024, 9, 2),
      })
    );
  }

  #[test]
  fn end_equal_to_start_is_a_single_day() {
    let event = icalendar::Event::new()
      .summary("Labor Day")
      .starts(date(2024, 9, 2))
      .ends(date(2024, 9, 2))
      .done();

    assert_eq!(
      EventBuilder::from(&event).build(),
      Ok(Event::single_day("Labor Day", date(2024, 9, 2)))
    );
  }

  #[test]
  fn exclusive_end_is_made_inclusive() {
    assert_eq!(
      inclusive_end_date(DatePerhapsTime::Date(date(2024, 10, 14))),
      date(2024, 10, 13)
    );

    let evening = date(2024, 10, 13).and_hms_opt(18, 0, 0).unwrap();
    assert_eq!(
      inclusive_end_date(DatePerhapsTime::DateTime(CalendarDateTime::Floating(evening))),
      date(2024, 10, 13)
    );
  }
}
