use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CATALOG_URL, DEFAULT_CONFIG_PATH, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT,
    ENV_CATALOG_URL, ENV_TIMEOUT_SECONDS, ENV_USER_AGENT,
};
use crate::error::{Result, ScraperError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Load `config.toml` from the working directory (if present), then apply
    /// `HERO_SCOUT_*` environment overrides, including any from `.env`.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::load_from(DEFAULT_CONFIG_PATH, |key| std::env::var(key).ok())
    }

    pub fn load_from<F>(path: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                ScraperError::Config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            Self::from_toml_str(&content)?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_CATALOG_URL) {
            self.catalog.url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECONDS) {
            self.catalog.timeout_seconds = raw.trim().parse().map_err(|_| {
                ScraperError::Config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECONDS, raw))
            })?;
        }
        if let Some(agent) = lookup(ENV_USER_AGENT) {
            self.catalog.user_agent = agent;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.catalog.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ScraperError::Config(format!(
                "catalog url must be http(s), got '{}'",
                self.catalog.url
            )));
        }
        if self.catalog.timeout_seconds == 0 {
            return Err(ScraperError::Config("catalog timeout_seconds must be positive".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.catalog.timeout_seconds)
    }
}
