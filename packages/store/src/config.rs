//! # Client configuration: `carfleet.toml`
//!
//! Defines `carfleet.toml`, the TOML file compiled into the web bundle. It
//! tells the client where the remote API lives and how its timers behave.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! path_prefix = "/api"       # empty = routes at the root
//!
//! [contact]
//! endpoint = "https://formsubmit.co/ajax/hello@example.com"
//!
//! [timing]
//! search_debounce_ms = 500
//! carousel_interval_secs = 5
//! toast_secs = 4
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. TOML parsing and the build-time API URL override. |
//! | [`ApiConfig`] | Base URL and path prefix of the REST API, plus [`ApiConfig::endpoint`] to join them. |
//! | [`ContactConfig`] | Where the landing page contact form posts. |
//! | [`TimingConfig`] | Debounce, carousel and toast durations. |
//!
//! Every section derives `Default`, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Errors raised while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid carfleet.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `carfleet.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Remote REST API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Prefix in front of every route, e.g. `/api`. Empty string means none.
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_path_prefix() -> String {
    "/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path_prefix: default_path_prefix(),
        }
    }
}

impl ApiConfig {
    /// Full URL for a route such as `"/cars/"`.
    ///
    /// Slashes at the joins are normalised; a trailing slash on `path` is kept
    /// because the API distinguishes `/cars/` from `/cars`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.path_prefix.trim_matches('/');
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("{base}/{path}")
        } else {
            format!("{base}/{prefix}/{path}")
        }
    }
}

/// Landing page contact form target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
}

fn default_contact_endpoint() -> String {
    "https://formsubmit.co/ajax/hello@example.com".to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
        }
    }
}

/// Timer durations used by the views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_carousel_interval_secs")]
    pub carousel_interval_secs: u64,
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u64,
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_carousel_interval_secs() -> u64 {
    5
}

fn default_toast_secs() -> u64 {
    4
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            carousel_interval_secs: default_carousel_interval_secs(),
            toast_secs: default_toast_secs(),
        }
    }
}

impl TimingConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_secs(self.carousel_interval_secs)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_secs(self.toast_secs)
    }
}

impl ClientConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Replace the API base URL when an override is supplied.
    ///
    /// The web bundle passes `option_env!("CARFLEET_API_URL")` here so a
    /// deployment can point at another backend without editing the file.
    pub fn with_api_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.path_prefix, "/api");
        assert_eq!(config.timing.search_debounce(), Duration::from_millis(500));
        assert_eq!(config.timing.carousel_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://cars.example.com"

            [timing]
            toast_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://cars.example.com");
        assert_eq!(config.api.path_prefix, "/api");
        assert_eq!(config.timing.toast_secs, 10);
        assert_eq!(config.timing.search_debounce_ms, 500);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ClientConfig::from_toml("[api\nbase_url = 1").unwrap_err();
        assert!(err.to_string().starts_with("invalid carfleet.toml"));
    }

    #[test]
    fn test_api_url_override() {
        let config = ClientConfig::default().with_api_url(Some("  https://prod.test/ "));
        assert_eq!(config.api.base_url, "https://prod.test/");

        let untouched = ClientConfig::default().with_api_url(Some(""));
        assert_eq!(untouched.api.base_url, "http://localhost:8000");

        let untouched = ClientConfig::default().with_api_url(None);
        assert_eq!(untouched.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_endpoint_join() {
        let api = ApiConfig {
            base_url: "https://cars.test/".to_string(),
            path_prefix: "/api/".to_string(),
        };
        assert_eq!(api.endpoint("/cars/"), "https://cars.test/api/cars/");
        assert_eq!(api.endpoint("cars/42"), "https://cars.test/api/cars/42");

        let bare = ApiConfig {
            base_url: "https://cars.test".to_string(),
            path_prefix: String::new(),
        };
        assert_eq!(bare.endpoint("/token"), "https://cars.test/token");
    }
}
