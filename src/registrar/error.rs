use std::fmt::{Display, Formatter};

/// Errors that may occur while reading a registrar calendar site.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Error {
  pub kind: ErrorKind,
  pub message: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
  /// The link does not point to a registrar calendar page.
  InvalidUrl,
  /// The page could not be fetched.
  Http,
  /// The page lacks the title year or its tables.
  Structure,
  /// A row's date text could not be parsed in strict mode.
  DateParse,
}

impl Error {
  pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
    Self { kind, message: message.into() }
  }

  pub fn invalid_url(message: impl Into<String>) -> Self {
    Self::new(ErrorKind::InvalidUrl, message)
  }

  pub fn structure(message: impl Into<String>) -> Self {
    Self::new(ErrorKind::Structure, message)
  }
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Self::InvalidUrl => "invalid calendar link",
      Self::Http => "could not fetch calendar",
      Self::Structure => "unexpected page structure",
      Self::DateParse => "unreadable date",
    })
  }
}

impl From<ureq::Error> for Error {
  fn from(e: ureq::Error) -> Self {
    Self {
      kind: ErrorKind::Http,
      message: e.to_string(),
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Self {
      kind: ErrorKind::Http,
      message: e.to_string(),
    }
  }
}

impl From<url::ParseError> for Error {
  fn from(e: url::ParseError) -> Self {
    Self {
      kind: ErrorKind::InvalidUrl,
      message: e.to_string(),
    }
  }
}
