use scraper::{ElementRef, Html, Selector};

use crate::dates::clean_text;

pub fn title(document: &Html) -> Option<String> {
  let selector = Selector::parse("title").ok()?;

  document
    .select(&selector)
    .next()
    .map(|e| clean_text(&e.text().collect::<String>()))
}

/// The page year is the second word of the title (`Fall 2024 Academic Calendar`).
pub fn title_year(document: &Html) -> Option<String> {
  title(document)?
    .split_whitespace()
    .nth(1)
    .filter(|token| token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()))
    .map(str::to_owned)
}

pub fn tables(document: &Html) -> Vec<ElementRef<'_>> {
  Selector::parse("table")
    .map(|selector| document.select(&selector).collect())
    .unwrap_or_default()
}

pub fn caption(table: ElementRef) -> Option<String> {
  children(table, "caption")
    .next()
    .map(text)
    .filter(|caption| !caption.is_empty())
}

/// Rows of the table's `<tbody>` sections; `<thead>` rows and nested tables are not visited.
pub fn body_rows(table: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
  children(table, "tbody").flat_map(|body| children(body, "tr"))
}

/// Raw text of each `<td>` of a row. Header cells (`<th>`) are not included.
pub fn cells(row: ElementRef) -> Vec<String> {
  children(row, "td")
    .map(|cell| cell.text().collect::<String>())
    .collect()
}

pub fn text(element: ElementRef) -> String {
  clean_text(&element.text().collect::<String>())
}

fn children<'a>(element: ElementRef<'a>, name: &'a str) -> impl Iterator<Item = ElementRef<'a>> {
  element
    .children()
    .filter_map(ElementRef::wrap)
    .filter(move |child| child.value().name() == name)
}
