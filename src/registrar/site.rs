use scraper::{ElementRef, Html};
use url::Url;

use super::{extract, link, Client, Error, ErrorKind};
use crate::calendar::{Event, EventTable};
use crate::config::Config;
use crate::dates::{self, clean_text};

/// How rows with unreadable dates are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
  /// Abort the page on the first unreadable date instead of skipping the row.
  pub strict: bool,
}

/// Reads registrar calendar pages into an [`EventTable`].
#[derive(Debug, Clone)]
pub struct SiteExtractor {
  client: Client,
  prefix: Url,
  options: ExtractOptions,
}

impl Default for SiteExtractor {
  fn default() -> Self {
    Self {
      client: Client::default(),
      prefix: link::DEFAULT_PREFIX_URL.clone(),
      options: ExtractOptions::default(),
    }
  }
}

impl SiteExtractor {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_config(config: &Config) -> Self {
    let client = config
      .user_agent
      .as_deref()
      .map_or_else(Client::default, Client::new);

    Self {
      client,
      prefix: config.registrar_prefix.clone(),
      options: ExtractOptions { strict: config.strict },
    }
  }

  pub fn with_prefix(mut self, prefix: Url) -> Self {
    self.prefix = prefix;
    self
  }

  pub fn with_options(mut self, options: ExtractOptions) -> Self {
    self.options = options;
    self
  }

  pub const fn options(&self) -> ExtractOptions {
    self.options
  }

  /// Validate `url`, fetch the page and read its tables.
  ///
  /// # Errors
  /// Returns an error if the link fails validation (before any request), the fetch
  /// fails, or the page does not have the expected structure.
  pub fn extract(&self, url: &str) -> Result<EventTable, Error> {
    let link = link::validate(url, &self.prefix)?;
    log::debug!("Reading {} calendar from {}", link.label(), link.url);

    let html = self.client.fetch(&link.url)?;

    self.extract_document(&html)
  }

  /// Read the tables of an already fetched page.
  ///
  /// # Errors
  /// Returns an error if the title carries no year, the page has no tables, or (in
  /// strict mode) a row's date cannot be parsed.
  pub fn extract_document(&self, html: &str) -> Result<EventTable, Error> {
    let document = Html::parse_document(html);

    let year = extract::title_year(&document).ok_or_else(|| {
      Error::structure(format!(
        "page title {:?} does not carry the year as its second word",
        extract::title(&document).unwrap_or_default(),
      ))
    })?;

    let tables = extract::tables(&document);
    if tables.is_empty() {
      return Err(Error::structure("page has no tables, the site changed structurally or the link is wrong"));
    }

    let mut events = EventTable::new();
    let mut captioned = 0;
    for table in &tables {
      if self.add_table(*table, &year, &mut events)? {
        captioned += 1;
      }
    }

    if captioned == 0 {
      return Err(Error::structure(format!(
        "none of the {} tables has a caption, the site changed structurally",
        tables.len(),
      )));
    }

    log::info!("Read {} events in {} tables", events.len(), events.len_tables());

    Ok(events)
  }

  /// Returns whether the table had a caption and was read.
  fn add_table(&self, table: ElementRef, year: &str, events: &mut EventTable) -> Result<bool, Error> {
    let Some(caption) = extract::caption(table) else {
      log::warn!("Skipping a table without caption");
      return Ok(false);
    };

    for row in extract::body_rows(table) {
      let cells = extract::cells(row);
      let [name, date_text, ..] = cells.as_slice() else {
        log::debug!("Skipping row with {} cells in {caption:?}", cells.len());
        continue;
      };

      let name = clean_text(name);
      if name.is_empty() {
        log::debug!("Skipping row without name in {caption:?}");
        continue;
      }

      match dates::parse(date_text, year) {
        Ok(range) => events.push(&caption, Event::from_range(name, range)),
        Err(e) if self.options.strict => {
          return Err(Error::new(
            ErrorKind::DateParse,
            format!("{caption:?} / {name:?}: {e}"),
          ));
        }
        Err(e) => log::warn!("Skipping {name:?} in {caption:?}: {e}"),
      }
    }

    Ok(true)
  }
}
