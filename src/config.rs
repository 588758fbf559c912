use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Site URL must be an absolute http(s) URL: {0}")]
    InvalidSiteUrl(String),
}

// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute base URL, without a trailing slash.
    pub site_url: String,
    pub site_name: String,
    /// hreflang of the canonical page.
    pub locale: String,
    pub home_label: String,
    pub catalog_label: String,
    pub blog_label: String,
    /// Paths listed in the sitemap after the site root.
    pub static_pages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "https://ai-catalog.ru".into(),
            site_name: "AI Каталог СНГ".into(),
            locale: "ru-RU".into(),
            home_label: "Главная".into(),
            catalog_label: "Каталог".into(),
            blog_label: "Блог".into(),
            static_pages: vec!["/catalog".into(), "/blog".into(), "/telegram-bots".into()],
        }
    }
}

impl SiteConfig {
    pub fn with_site_url(site_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self {
            site_url: site_url.into(),
            ..Self::default()
        }
        .normalized()
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.normalized()
    }

    fn normalized(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.site_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("https://") || trimmed.starts_with("http://"))
            || trimmed.ends_with(':')
        {
            return Err(ConfigError::InvalidSiteUrl(self.site_url));
        }
        self.site_url = trimmed.to_string();
        Ok(self)
    }
}
