//! Site configuration
//!
//! The site-wide settings live in `.sitemeta/config.toml` and are passed by
//! value into the services that need them; nothing reads settings ambiently.

use crate::domain::content::PostId;
use crate::error::{Result, SiteMetaError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = ".sitemeta";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site_name: String,
    pub base_url: String,

    #[serde(default)]
    pub tagline: String,

    /// Open Graph locale, e.g. `en_US`
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Default hreflang language for sitemap entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    /// Post served as the site front page, gets sitemap priority 1.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_page: Option<PostId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_og_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_site: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_verification: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bing_verification: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinterest_verification: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_app_id: Option<String>,

    /// Google Analytics 4 measurement id; takes precedence over the raw snippet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtag_id: Option<String>,

    /// Raw analytics markup emitted verbatim when no gtag id is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_snippet: Option<String>,

    pub created: DateTime<Utc>,
}

fn default_locale() -> String {
    "en_US".to_string()
}

impl SiteConfig {
    /// Every key accepted by `get`, in display order. All but `created` are
    /// also settable.
    pub const KEYS: &'static [&'static str] = &[
        "site_name",
        "base_url",
        "tagline",
        "locale",
        "default_language",
        "front_page",
        "default_og_image",
        "twitter_site",
        "organization_name",
        "organization_logo",
        "google_verification",
        "bing_verification",
        "pinterest_verification",
        "facebook_app_id",
        "gtag_id",
        "created",
    ];

    /// Create a new config with default values
    pub fn new(site_name: &str, base_url: &str) -> Self {
        SiteConfig {
            site_name: site_name.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tagline: String::new(),
            locale: default_locale(),
            default_language: None,
            front_page: None,
            default_og_image: None,
            twitter_site: None,
            organization_name: None,
            organization_logo: None,
            google_verification: None,
            bing_verification: None,
            pinterest_verification: None,
            facebook_app_id: None,
            gtag_id: None,
            analytics_snippet: None,
            created: Utc::now(),
        }
    }

    /// Load config from .sitemeta/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SiteMetaError::NotSiteDirectory(path.to_path_buf())
            } else {
                SiteMetaError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| SiteMetaError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .sitemeta/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SiteMetaError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "site_name" => self.site_name.clone(),
            "base_url" => self.base_url.clone(),
            "tagline" => self.tagline.clone(),
            "locale" => self.locale.clone(),
            "default_language" => self.default_language.clone().unwrap_or_default(),
            "front_page" => self
                .front_page
                .map(|id| id.to_string())
                .unwrap_or_default(),
            "default_og_image" => self.default_og_image.clone().unwrap_or_default(),
            "twitter_site" => self.twitter_site.clone().unwrap_or_default(),
            "organization_name" => self.organization_name.clone().unwrap_or_default(),
            "organization_logo" => self.organization_logo.clone().unwrap_or_default(),
            "google_verification" => self.google_verification.clone().unwrap_or_default(),
            "bing_verification" => self.bing_verification.clone().unwrap_or_default(),
            "pinterest_verification" => self.pinterest_verification.clone().unwrap_or_default(),
            "facebook_app_id" => self.facebook_app_id.clone().unwrap_or_default(),
            "gtag_id" => self.gtag_id.clone().unwrap_or_default(),
            "created" => self.created.to_rfc3339(),
            _ => {
                return Err(SiteMetaError::Config(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        };
        Ok(value)
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "site_name" => self.site_name = value.to_string(),
            "base_url" => self.base_url = value.trim_end_matches('/').to_string(),
            "tagline" => self.tagline = value.to_string(),
            "locale" => self.locale = value.to_string(),
            "default_language" => self.default_language = non_empty(value),
            "front_page" => {
                let id: u64 = value.parse().map_err(|_| {
                    SiteMetaError::Config(format!("Invalid front_page id: {}", value))
                })?;
                self.front_page = Some(PostId(id));
            }
            "default_og_image" => self.default_og_image = non_empty(value),
            "twitter_site" => self.twitter_site = non_empty(value),
            "organization_name" => self.organization_name = non_empty(value),
            "organization_logo" => self.organization_logo = non_empty(value),
            "google_verification" => self.google_verification = non_empty(value),
            "bing_verification" => self.bing_verification = non_empty(value),
            "pinterest_verification" => self.pinterest_verification = non_empty(value),
            "facebook_app_id" => self.facebook_app_id = non_empty(value),
            "gtag_id" => self.gtag_id = non_empty(value),
            _ => {
                return Err(SiteMetaError::Config(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
