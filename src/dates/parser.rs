use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::month::resolve_month;
use super::normalize::strip_entities;

/// One date occurrence: an optional `<label>,` weekday prefix, a month, a day and the
/// trailing day of a `Month Day-Day` range.
static DATE_FRAGMENT: Lazy<Regex> = Lazy::new(|| {
  Regex::new(concat!(
    r"(?i)(?:(?P<label>\b[a-z]+\.?)\s*,\s*)?",
    r"\b(?P<month>jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?",
    r"|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?",
    r"\s*(?P<day>\d{1,2})(?:st|nd|rd|th)?\b",
    r"(?:\s*-\s*(?P<until>\d{1,2})(?:st|nd|rd|th)?\b)?",
  ))
  .expect("date fragment pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
  #[error("no date found in {0:?}")]
  NoDate(String),
  #[error("unknown month {0:?}")]
  UnknownMonth(String),
  #[error("invalid day {0:?}")]
  InvalidDay(String),
  #[error("year {0:?} is not a 4-digit year")]
  InvalidYear(String),
  #[error("{year}-{month:02}-{day:02} is not a calendar date")]
  InvalidDate { year: i32, month: u32, day: u32 },
  #[error("range ends on {end} before it starts on {start}")]
  InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// Whole-day range, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
  pub start: NaiveDate,
  pub end: NaiveDate,
}

impl DateRange {
  pub const fn single_day(date: NaiveDate) -> Self {
    Self { start: date, end: date }
  }

  pub fn is_single_day(&self) -> bool {
    self.start == self.end
  }
}

impl Display for DateRange {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    if self.is_single_day() {
      return write!(f, "{}", self.start);
    }

    write!(f, "{} - {}", self.start, self.end)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fragment<'t> {
  label: Option<&'t str>,
  month: &'t str,
  day: &'t str,
  until: Option<&'t str>,
}

impl<'t> Fragment<'t> {
  fn from_captures(caps: &Captures<'t>) -> Option<Self> {
    Some(Self {
      label: caps.name("label").map(|m| m.as_str()),
      month: caps.name("month")?.as_str(),
      day: caps.name("day")?.as_str(),
      until: caps.name("until").map(|m| m.as_str()),
    })
  }

  /// `October 12-15` carries its end as a bare day; the end shares the month.
  fn trailing_day(&self) -> Option<Self> {
    self.until.map(|day| Self {
      label: None,
      month: self.month,
      day,
      until: None,
    })
  }

  fn month_number(&self) -> Result<u32, ParseError> {
    resolve_month(self.month).ok_or_else(|| ParseError::UnknownMonth(self.month.to_owned()))
  }

  fn resolve(&self, year: i32) -> Result<NaiveDate, ParseError> {
    if let Some(label) = self.label {
      log::trace!("Dropping weekday label {label:?} before {} {}", self.month, self.day);
    }

    let month = self.month_number()?;
    let day = self
      .day
      .parse::<u32>()
      .map_err(|_| ParseError::InvalidDay(self.day.to_owned()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDate { year, month, day })
  }

  /// An end month numerically before the start month lies in the following year.
  fn resolve_after(&self, start: NaiveDate) -> Result<NaiveDate, ParseError> {
    let year = if self.month_number()? < start.month() {
      start.year() + 1
    } else {
      start.year()
    };

    self.resolve(year)
  }
}

/// Parse the date text of a registrar table cell.
///
/// `year` is the page's 4-digit year and applies to both ends, except that an end month
/// numerically before the start month moves the end into the following year.
///
/// Accepted shapes:
/// - `October 12`
/// - `October 12 - December 15`
/// - `October 12-15`
/// - `December 16 - Sun., January 7`
///
/// # Errors
/// Returns an error if the text contains no date, if a month, day or year cannot be
/// resolved, or if the range ends before it starts.
pub fn parse(raw_text: &str, year: &str) -> Result<DateRange, ParseError> {
  let year = parse_year(year)?;
  let text = strip_entities(raw_text);

  let mut fragments: Vec<Fragment> = DATE_FRAGMENT
    .captures_iter(&text)
    .filter_map(|caps| Fragment::from_captures(&caps))
    .collect();

  if fragments.len() > 2 {
    log::debug!("Using the first two of {} dates in {raw_text:?}", fragments.len());
    fragments.truncate(2);
  }

  if fragments.len() == 1 {
    if let Some(second) = fragments[0].trailing_day() {
      fragments.push(second);
    }
  }

  let mut fragments = fragments.iter();
  let start = fragments
    .next()
    .ok_or_else(|| ParseError::NoDate(raw_text.to_owned()))?
    .resolve(year)?;
  let end = match fragments.next() {
    Some(fragment) => fragment.resolve_after(start)?,
    None => start,
  };

  if end < start {
    return Err(ParseError::InvertedRange { start, end });
  }

  Ok(DateRange { start, end })
}

/// Validate a 4-digit year such as the one taken from a page title.
///
/// # Errors
/// Returns [`ParseError::InvalidYear`] unless `year` is exactly four ASCII digits.
pub fn parse_year(year: &str) -> Result<i32, ParseError> {
  let trimmed = year.trim();

  if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
    return Err(ParseError::InvalidYear(year.to_owned()));
  }

  trimmed.parse().map_err(|_| ParseError::InvalidYear(year.to_owned()))
}
