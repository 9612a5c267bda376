//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the session token in a single file so that a
//! native build of the UI crate stays logged in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>          # the raw bearer token, no trailing newline
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) joined with `"flipper"` for a
//! platform-appropriate base.

use std::path::{Path, PathBuf};

use crate::token::{non_empty, TokenStore};
use crate::StoreError;

/// Filesystem-backed TokenStore for native targets.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token at `<base>/<key>`.
    pub fn new(base: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: base.as_ref().join(key),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        non_empty(std::fs::read_to_string(&self.path).ok())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove token file {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("flipper_token_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileTokenStore::new(&dir, "token");
        assert!(store.get().is_none());

        store.set("secret-token").unwrap();

        // Re-open from the same directory
        let reopened = FileTokenStore::new(&dir, "token");
        assert_eq!(reopened.get().as_deref(), Some("secret-token"));

        reopened.clear();
        assert!(store.get().is_none());
        // Clearing a missing file is silent
        store.clear();

        let _ = std::fs::remove_dir_all(&dir);
    }
}
