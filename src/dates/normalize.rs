use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DASH_ENTITY: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?i)&(?:ndash|mdash|minus|hyphen|dash|#x201[0-4]|#82(?:0[89]|1[0-2])|#x2212|#8722);")
    .expect("dash entity pattern is valid")
});

static ENTITY: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"&#?[A-Za-z0-9]+;").expect("entity pattern is valid")
});

/// Unicode glyphs the registrar pages use in place of an ASCII hyphen.
pub const DASH_GLYPHS: [char; 6] = ['\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2212}'];

/// Prepare raw cell text for date matching.
///
/// Dash entities become `-`, every other entity (`&amp;`, `&nbsp;`, `&...;`) becomes a
/// space, non-breaking spaces become plain spaces and all dash glyphs fold into `-`.
pub fn strip_entities(text: &str) -> String {
  let text = DASH_ENTITY.replace_all(text, "-");

  ENTITY
    .replace_all(&text, " ")
    .chars()
    .map(|c| match c {
      '\u{a0}' => ' ',
      c if DASH_GLYPHS.contains(&c) => '-',
      c => c,
    })
    .collect()
}

/// Decode the entities that survive in scraped names (often double-encoded ones).
/// Unknown entities are left untouched.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
  ENTITY.replace_all(text, |caps: &Captures| {
    let entity = &caps[0];
    let body = &entity[1..entity.len() - 1];

    let decoded = match body {
      "amp" => Some('&'),
      "nbsp" => Some(' '),
      "quot" => Some('"'),
      "apos" => Some('\''),
      "lt" => Some('<'),
      "gt" => Some('>'),
      "ndash" => Some('\u{2013}'),
      "mdash" => Some('\u{2014}'),
      _ => numeric_entity(body),
    };

    decoded.map_or_else(|| entity.to_owned(), String::from)
  })
}

fn numeric_entity(body: &str) -> Option<char> {
  let number = body.strip_prefix('#')?;

  let code = match number.strip_prefix(['x', 'X']) {
    Some(hex) => u32::from_str_radix(hex, 16).ok()?,
    None => number.parse().ok()?,
  };

  char::from_u32(code)
}

/// Decode entities, turn non-breaking spaces into spaces and collapse whitespace runs.
pub fn clean_text(text: &str) -> String {
  decode_entities(text)
    .replace('\u{a0}', " ")
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_named_and_numeric_entities() {
    assert_eq!(strip_entities("October&nbsp;12"), "October 12");
    assert_eq!(strip_entities("Fall &amp; Spring&#160;"), "Fall   Spring ");
  }

  #[test]
  fn folds_dash_entities_and_glyphs() {
    assert_eq!(strip_entities("October 12&ndash;15"), "October 12-15");
    assert_eq!(strip_entities("October 12\u{2011}15"), "October 12-15");
    assert_eq!(strip_entities("Dec. 16 \u{2013} Jan. 7"), "Dec. 16 - Jan. 7");
  }

  #[test]
  fn non_breaking_space_becomes_space() {
    assert_eq!(strip_entities("May\u{a0}5"), "May 5");
  }

  #[test]
  fn decodes_double_encoded_names() {
    assert_eq!(decode_entities("Drop &amp; Add"), "Drop & Add");
    assert_eq!(decode_entities("Women&#39;s Week"), "Women's Week");
    assert_eq!(decode_entities("&#x41;BC"), "ABC");
    assert_eq!(decode_entities("&bogus; stays"), "&bogus; stays");
  }

  #[test]
  fn clean_text_collapses_whitespace() {
    assert_eq!(clean_text("  Fall\u{a0}\n   Break &amp; More "), "Fall Break & More");
  }
}
