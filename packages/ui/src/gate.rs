//! Route gates.
//!
//! Both gates validate the stored token once on mount and render a neutral
//! loading state until the answer is in. Where they send the user is up to the
//! platform package, through `on_redirect`; the web build uses
//! `navigator.replace` so back-navigation cannot land on a guarded view.

use api::{check_session, GateKind, GateOutcome, GateState};
use dioxus::prelude::*;

use crate::use_api;

#[component]
fn Gate(kind: GateKind, on_redirect: EventHandler<()>, children: Element) -> Element {
    let api = use_api();
    let check = use_resource(move || {
        let api = api.clone();
        async move { check_session(&api).await }
    });

    let state = (*check.read()).unwrap_or(GateState::Checking);
    let outcome = state.outcome(kind);

    use_effect(move || {
        let state = (*check.read()).unwrap_or(GateState::Checking);
        if state.outcome(kind) == GateOutcome::Redirect {
            tracing::debug!("Gate {:?} redirecting from {:?}", kind, state);
            on_redirect.call(());
        }
    });

    match outcome {
        GateOutcome::Render => rsx! {
            {children}
        },
        GateOutcome::Loading => rsx! {
            Loading {}
        },
        GateOutcome::Redirect => rsx! {},
    }
}

/// Renders `children` only for a session the backend accepts.
#[component]
pub fn ProtectedGate(on_redirect: EventHandler<()>, children: Element) -> Element {
    rsx! {
        Gate { kind: GateKind::Protected, on_redirect, {children} }
    }
}

/// Renders `children` only when nobody is logged in.
#[component]
pub fn PublicGate(on_redirect: EventHandler<()>, children: Element) -> Element {
    rsx! {
        Gate { kind: GateKind::Public, on_redirect, {children} }
    }
}

/// Neutral placeholder shown while something loads.
#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center p-8 text-neutral-500 text-sm",
            "{label}"
        }
    }
}
