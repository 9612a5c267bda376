//! # Client configuration — `flipper.toml`
//!
//! Defines the TOML configuration compiled into the web package
//! (filename: [`ClientConfig::filename`] = `"flipper.toml"`). It tells the
//! HTTP client where the REST API lives, which local-storage key holds the
//! session token, and how list views page through results.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api/v1"
//!
//! [session]
//! token_key = "token"
//!
//! [lists]
//! page_size = 12             # vehicles per page
//! cars_sort_by = "created_at"
//! expenses_page_size = 50    # expenses per ledger page
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation, the canonical filename, and the `FLIPPER_API_URL` override helper. |
//! | [`ApiConfig`] | Base address of the REST API. |
//! | [`SessionConfig`] | Local-storage key for the bearer token. |
//! | [`ListsConfig`] | Page sizes and default sort for list views. |
//!
//! Every section has `#[serde(default)]`, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::StoreError;

/// Top-level client configuration stored in `flipper.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub lists: ListsConfig,
}

/// Where the REST API is reachable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute base address; request paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Session credential persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_token_key() -> String {
    "token".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

/// Paging defaults for the list views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListsConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_cars_sort_by")]
    pub cars_sort_by: String,
    #[serde(default = "default_expenses_page_size")]
    pub expenses_page_size: u32,
}

fn default_page_size() -> u32 {
    12
}

fn default_cars_sort_by() -> String {
    "created_at".to_string()
}

fn default_expenses_page_size() -> u32 {
    50
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            cars_sort_by: default_cars_sort_by(),
            expenses_page_size: default_expenses_page_size(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "flipper.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, StoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builder method to point the client at another API address.
    ///
    /// Blank values are ignored so an empty `FLIPPER_API_URL` keeps the file's value.
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    /// Parse `raw`, falling back to defaults on malformed input.
    pub fn from_toml_or_default(raw: &str) -> Self {
        match Self::from_toml(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", Self::filename(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.session.token_key, "token");
        assert_eq!(config.api.base_url, "http://localhost:8000/api/v1");
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://flipper.example/api/v1"

            [lists]
            page_size = 6
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://flipper.example/api/v1");
        assert_eq!(config.lists.page_size, 6);
        assert_eq!(config.lists.expenses_page_size, 50);
        assert_eq!(config.session.token_key, "token");
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::default().with_base_url(Some("https://api.example/v1/"));
        assert_eq!(config.api.base_url, "https://api.example/v1");

        let untouched = ClientConfig::default().with_base_url(Some("  "));
        assert_eq!(untouched.api.base_url, "http://localhost:8000/api/v1");
    }

    #[test]
    fn test_malformed_falls_back() {
        let config = ClientConfig::from_toml_or_default("[api\nbase_url = 3");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url(Some("https://x.test"));
        let raw = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&raw).unwrap(), config);
    }
}
