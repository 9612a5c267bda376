//! Pages reachable without a session. A valid session skips straight to the
//! car list.

use dioxus::prelude::*;
use ui::views::{HomeView, LoginView, SignupView};
use ui::PublicGate;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        PublicGate {
            on_redirect: move |_| {
                nav.replace(Route::Cars {});
            },
            HomeView {
                on_login: move |_| {
                    nav.push(Route::Login {});
                },
                on_signup: move |_| {
                    nav.push(Route::Signup {});
                },
            }
        }
    }
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        PublicGate {
            on_redirect: move |_| {
                nav.replace(Route::Cars {});
            },
            LoginView {
                on_success: move |_| {
                    nav.replace(Route::Cars {});
                },
                on_signup: move |_| {
                    nav.push(Route::Signup {});
                },
            }
        }
    }
}

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();

    rsx! {
        PublicGate {
            on_redirect: move |_| {
                nav.replace(Route::Cars {});
            },
            SignupView {
                on_success: move |_| {
                    nav.replace(Route::Login {});
                },
                on_login: move |_| {
                    nav.push(Route::Login {});
                },
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{}", path);

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",
            h1 { class: "mb-2 font-bold text-[1.75rem]", "Page not found" }
            p { class: "mb-8 text-neutral-600", "/{path}" }
            Link { class: "link", to: Route::Home {}, "Go home" }
        }
    }
}
