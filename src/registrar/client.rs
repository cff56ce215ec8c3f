use ureq::{Agent, AgentBuilder};
use url::Url;

use super::Error;

pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for registrar pages. Requests are neither retried nor timed out.
#[derive(Debug, Clone)]
pub struct Client {
  agent: Agent,
}

impl Default for Client {
  fn default() -> Self {
    Self::new(DEFAULT_USER_AGENT)
  }
}

impl Client {
  pub fn new(user_agent: &str) -> Self {
    Self {
      agent: AgentBuilder::new().user_agent(user_agent).build(),
    }
  }

  /// Fetch the HTML of a page.
  ///
  /// # Errors
  /// Returns an error if the request fails or the body cannot be read.
  pub fn fetch(&self, url: &Url) -> Result<String, Error> {
    log::info!("Fetching {url}");

    let content = self.agent
      .get(url.as_str())
      .call()?
      .into_string()?;

    log::debug!("Fetched {} bytes from {url}", content.len());

    Ok(content)
  }
}
