//! Errors raised while loading configuration or persisting the session token.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Could not serialize configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Token storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
