use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::Error;

pub const DEFAULT_PREFIX: &str = "https://registrar.utah.edu/academic-calendars/";

pub static DEFAULT_PREFIX_URL: Lazy<Url> =
  Lazy::new(|| Url::parse(DEFAULT_PREFIX).expect("default registrar prefix is a valid URL"));

static YEAR_TOKEN: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?:^|\D)(?P<year>\d{4})(?:\D|$)").expect("year pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semester {
  Fall,
  Spring,
  Summer,
}

impl Semester {
  pub const ALL: [Self; 3] = [Self::Fall, Self::Spring, Self::Summer];

  pub const fn keyword(self) -> &'static str {
    match self {
      Self::Fall => "fall",
      Self::Spring => "spring",
      Self::Summer => "summer",
    }
  }
}

impl Display for Semester {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Self::Fall => "Fall",
      Self::Spring => "Spring",
      Self::Summer => "Summer",
    })
  }
}

/// A link that passed every shape check and may be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLink {
  pub url: Url,
  pub semester: Semester,
  pub year: i32,
}

impl CalendarLink {
  /// `Fall 2024` style label.
  pub fn label(&self) -> String {
    format!("{} {}", self.semester, self.year)
  }
}

/// Check that `link` names a semester calendar page below `prefix`, without any network
/// access. Each failure says which check failed.
///
/// # Errors
/// Returns an [`ErrorKind::InvalidUrl`](super::ErrorKind::InvalidUrl) error.
pub fn validate(link: &str, prefix: &Url) -> Result<CalendarLink, Error> {
  let url = Url::parse(link.trim())
    .map_err(|e| Error::invalid_url(format!("{link:?} is not an absolute link: {e}")))?;

  if !matches!(url.scheme(), "http" | "https") {
    return Err(Error::invalid_url(format!("{url} is not an http(s) link")));
  }

  if !url.as_str().starts_with(prefix.as_str()) {
    return Err(Error::invalid_url(format!("{url} is not an academic calendar below {prefix}")));
  }

  let page = url
    .path_segments()
    .and_then(|mut segments| segments.next_back())
    .unwrap_or_default()
    .to_lowercase();

  let semester = Semester::ALL
    .into_iter()
    .find(|semester| page.contains(semester.keyword()))
    .ok_or_else(|| Error::invalid_url(format!("{url} names no semester (fall, spring or summer)")))?;

  let year = YEAR_TOKEN
    .captures(&page)
    .and_then(|caps| caps.name("year"))
    .and_then(|year| year.as_str().parse().ok())
    .ok_or_else(|| Error::invalid_url(format!("{url} carries no 4-digit year")))?;

  if !page.ends_with(".php") {
    return Err(Error::invalid_url(format!("{url} is not a calendar page (.php)")));
  }

  Ok(CalendarLink { url, semester, year })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::registrar::ErrorKind;

  fn check(link: &str) -> Result<CalendarLink, Error> {
    validate(link, &DEFAULT_PREFIX_URL)
  }

  fn message(link: &str) -> String {
    let error = check(link).unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidUrl);
    error.message
  }

  #[test]
  fn accepts_semester_pages() {
    let link = check("https://registrar.utah.edu/academic-calendars/fall2024.php").unwrap();
    assert_eq!(link.semester, Semester::Fall);
    assert_eq!(link.year, 2024);
    assert_eq!(link.label(), "Fall 2024");

    let link = check("https://registrar.utah.edu/academic-calendars/Spring2025.php").unwrap();
    assert_eq!(link.semester, Semester::Spring);
    assert_eq!(link.year, 2025);
  }

  #[test]
  fn rejects_non_links() {
    assert!(message("").contains("not an absolute link"));
    assert!(message("google.com").contains("not an absolute link"));
  }

  #[test]
  fn rejects_foreign_sites() {
    assert!(message("https://www.google.com/").contains("not an academic calendar"));
    assert!(message("https://registrar.utah.edu/handbook/transfer-student-resources.php").contains("not an academic calendar"));
    assert!(message("ftp://registrar.utah.edu/academic-calendars/fall2024.php").contains("not an http(s) link"));
  }

  #[test]
  fn rejects_pages_without_semester() {
    assert!(message("https://registrar.utah.edu/academic-calendars/dentistry-2024-2025.php").contains("no semester"));
    assert!(message("https://registrar.utah.edu/academic-calendars/wefwefwef.php").contains("no semester"));
  }

  #[test]
  fn rejects_pages_without_year() {
    assert!(message("https://registrar.utah.edu/academic-calendars/fall.php").contains("no 4-digit year"));
    assert!(message("https://registrar.utah.edu/academic-calendars/fall20245.php").contains("no 4-digit year"));
  }

  #[test]
  fn rejects_links_without_php_page() {
    assert!(message("https://registrar.utah.edu/academic-calendars/fall2024").contains(".php"));
  }

  #[test]
  fn custom_prefix() {
    let prefix = Url::parse("http://localhost:8080/calendars/").unwrap();

    assert!(validate("http://localhost:8080/calendars/summer2025.php", &prefix).is_ok());
    assert!(validate("https://registrar.utah.edu/academic-calendars/fall2024.php", &prefix).is_err());
  }
}
