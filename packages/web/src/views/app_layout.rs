use dioxus::prelude::*;
use ui::{Navbar, ProtectedGate};

use crate::Route;

/// Authenticated shell: session check, navbar, then the child route.
#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        ProtectedGate {
            on_redirect: move |_| {
                nav.replace(Route::Login {});
            },
            Navbar {
                on_cars: move |_| {
                    nav.push(Route::Cars {});
                },
                on_profile: move |_| {
                    nav.push(Route::Profile {});
                },
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}
