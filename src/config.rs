use std::path::PathBuf;

use url::Url;

use crate::registrar::link::DEFAULT_PREFIX_URL;

#[derive(Debug, serde::Deserialize)]
pub struct Config {
    #[serde(default = "default_registrar_prefix")]
    pub registrar_prefix: Url,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub calendar_name: Option<String>,
    #[serde(default)]
    pub sites: Vec<Site>,
}

/// A named calendar page, e.g. `Fall 2024`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Site {
    pub name: String,
    pub url: Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registrar_prefix: default_registrar_prefix(),
            user_agent: None,
            strict: false,
            calendar_name: None,
            sites: Vec::default(),
        }
    }
}

impl Config {
    pub fn site(&self, name: &str) -> Option<&Site> {
        self.sites.iter().find(|site| site.name.eq_ignore_ascii_case(name))
    }
}

/// Read the configuration file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML for [`Config`].
pub fn init(path: PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
    let string = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&string)?;

    Ok(config)
}

fn default_registrar_prefix() -> Url {
    DEFAULT_PREFIX_URL.clone()
}
