use std::sync::{Arc, Mutex};

use crate::token::{non_empty, TokenStore};
use crate::StoreError;

/// In-memory TokenStore for tests and headless use.
///
/// Clones share the same slot, mirroring how every view in the app sees the
/// same browser storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        if let Ok(mut slot) = store.token.lock() {
            *slot = Some(token.to_string());
        }
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        let slot = self.token.lock().ok()?;
        non_empty(slot.clone())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        let mut slot = self
            .token
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.get().is_none());
        assert!(!store.is_present());

        store.set("abc").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc"));

        store.clear();
        assert!(store.get().is_none());

        // Clearing twice is fine
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clones_share_slot() {
        let store = MemoryTokenStore::with_token("shared");
        let other = store.clone();
        other.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_blank_token_is_absent() {
        let store = MemoryTokenStore::with_token("   ");
        assert!(store.get().is_none());
    }
}
