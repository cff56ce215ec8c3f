use chrono::Month;

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
  "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const MONTH_NAMES: [&str; 12] = [
  "january", "february", "march", "april", "may", "june",
  "july", "august", "september", "october", "november", "december",
];

/// Resolve a month token (`October`, `oct`, `Dec.`, `Sept.`) to its number, 1 to 12.
///
/// Full month names are tried first; otherwise trailing periods are dropped and the
/// token must be a prefix of a month name that is at least as long as its
/// three-letter abbreviation.
pub fn resolve_month(token: &str) -> Option<u32> {
  let token = token.trim();

  if let Ok(month) = token.parse::<Month>() {
    return Some(month.number_from_month());
  }

  let abbreviation = token.trim_end_matches('.').to_lowercase();
  if abbreviation.len() < 3 {
    return None;
  }

  MONTH_ABBREVIATIONS
    .iter()
    .zip(MONTH_NAMES)
    .position(|(short, full)| abbreviation.starts_with(short) && full.starts_with(&abbreviation))
    .and_then(|idx| u32::try_from(idx + 1).ok())
}
