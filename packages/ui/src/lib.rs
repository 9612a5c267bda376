//! Shared UI for the workspace: session context, route gates, navbar and
//! every view. Platform packages own the router and pass navigation in as
//! `EventHandler` callbacks.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `session` | [`SessionProvider`] and [`use_api`]: the one [`AppClient`] shared through context |
//! | `gate` | [`ProtectedGate`] and [`PublicGate`] around the session check |
//! | [`views`] | Pages: landing, login, signup, profile, cars, expenses |
//! | [`format`] | Money, margin and date display |

use dioxus::prelude::*;

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    make_client, make_token_store, use_api, use_config, AppClient, PlatformTokenStore,
    SessionProvider,
};

mod gate;
pub use gate::{Loading, ProtectedGate, PublicGate};

mod navbar;
pub use navbar::Navbar;

mod alert;
pub use alert::{error_lines, ErrorBanner, FieldError};

mod badge;
pub use badge::{StatusBadge, StatusSelect};

pub mod format;

pub mod views;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");
