//! Error display shared by every form and list.

use api::{ApiError, FieldErrors};
use dioxus::prelude::*;

/// Red banner with one line per entry. Renders nothing when `lines` is empty.
#[component]
pub fn ErrorBanner(lines: Vec<String>) -> Element {
    if lines.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
            role: "alert",
            for line in lines {
                div { "{line}" }
            }
        }
    }
}

/// Message under a single input.
#[component]
pub fn FieldError(errors: FieldErrors, field: &'static str) -> Element {
    match errors.get(field) {
        Some(message) => rsx! {
            p { class: "mt-1 text-red-600 text-xs", "{message}" }
        },
        None => rsx! {},
    }
}

/// Lines for an [`ErrorBanner`] from an optional API error.
pub fn error_lines(error: &Option<ApiError>) -> Vec<String> {
    error.as_ref().map(ApiError::display_lines).unwrap_or_default()
}
