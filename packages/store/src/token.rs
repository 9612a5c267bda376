//! # Session token persistence
//!
//! The client persists exactly one value between page loads: the bearer token
//! returned by `POST /auth/login`. [`TokenStore`] abstracts where that value
//! lives so the HTTP client and the access gates can be exercised against an
//! in-memory store in tests.
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`crate::MemoryTokenStore`] | any | `Arc<Mutex<Option<String>>>` |
//! | [`crate::LocalStorageTokenStore`] | wasm32 + `web` | `window.localStorage[key]` |
//! | [`crate::FileTokenStore`] | native | a single file under the data directory |
//!
//! Reads never fail: a store that cannot be reached behaves as if no token is
//! present, which routes the user back to the login view. Writes report
//! failure so the login form can surface it.

use crate::StoreError;

/// Storage for the single session credential.
pub trait TokenStore {
    /// The stored token, if any. Empty strings count as absent.
    fn get(&self) -> Option<String>;

    /// Replace the stored token.
    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored token. Clearing an empty store is a no-op.
    fn clear(&self);

    /// Whether a token is currently stored.
    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

/// Normalise a raw stored value: whitespace-only tokens are treated as absent.
pub(crate) fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}
