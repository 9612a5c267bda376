//! # User models
//!
//! ## [`UserProfile`]
//!
//! The profile returned by `GET /auth/me`, `POST /users/signup` and
//! `PATCH /users/{uid}`. The backend also sends verification flags and
//! timestamps; they are ignored here because no view shows them.
//! [`UserProfile::display_name`] returns "First Last" when either name is set
//! and falls back to the username.
//!
//! ## Outgoing payloads
//!
//! - [`SignupRequest`]: JSON body of `POST /users/signup`.
//! - [`ProfileUpdate`]: JSON body of `PATCH /users/{uid}`. Optional names are
//!   serialised as `null` when blank.
//! - [`TokenResponse`]: the `POST /auth/login` answer.

use serde::{Deserialize, Serialize};

/// Profile of the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub uid: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserProfile {
    /// Get display name, falling back to the username if no name is set.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            self.username.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// Body of `POST /users/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Body of `PATCH /users/{uid}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Answer of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
