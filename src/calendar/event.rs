use std::fmt::{Display, Formatter, Result};

use chrono::NaiveDate;

use crate::dates::DateRange;

/// A named whole-day event as it appears on a registrar page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Event {
  pub name: String,
  pub start: NaiveDate,
  pub end: NaiveDate,
}

impl Event {
  pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
    Self { name: name.into(), start, end }
  }

  pub fn single_day(name: impl Into<String>, date: NaiveDate) -> Self {
    Self::new(name, date, date)
  }

  pub fn from_range(name: impl Into<String>, range: DateRange) -> Self {
    Self::new(name, range.start, range.end)
  }

  pub fn is_single_day(&self) -> bool {
    self.start == self.end
  }

  pub const fn start_end_dates(&self) -> (NaiveDate, NaiveDate) {
    (self.start, self.end)
  }
}

impl Display for Event {
  fn fmt(&self, formatter: &mut Formatter) -> Result {
    if self.is_single_day() {
      return write!(formatter, "{} ({})", self.name, self.start);
    }

    write!(formatter, "{} ({} - {})", self.name, self.start, self.end)
  }
}
