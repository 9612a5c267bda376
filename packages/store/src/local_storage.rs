//! # Browser local-storage token store
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web
//! platform**. The token lives in `window.localStorage` under a single
//! well-known key (`"token"` by default, see
//! [`crate::config::SessionConfig::token_key`]).
//!
//! Every call looks the `Storage` object up again; `web_sys::Storage` is not
//! `Clone` and the lookup is cheap. When storage is unavailable (private
//! browsing, sandboxed iframes) reads return `None`, which sends the user to
//! the login view.

use crate::token::{non_empty, TokenStore};
use crate::StoreError;

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        non_empty(Self::storage()?.get_item(&self.key).ok()?)
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not accessible".to_string()))?;
        storage
            .set_item(&self.key, token)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
