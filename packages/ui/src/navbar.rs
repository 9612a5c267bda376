use dioxus::prelude::*;

use crate::icons::{FaCar, FaRightFromBracket, FaUser};
use crate::{use_api, Icon};

/// Top bar of the authenticated area.
///
/// "Exit" clears the session before handing control to `on_logout`.
#[component]
pub fn Navbar(
    on_cars: EventHandler<()>,
    on_profile: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let api = use_api();

    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Flipper" }
            div {
                class: "navbar-links",
                button {
                    class: "navbar-link",
                    onclick: move |_| on_cars.call(()),
                    Icon { icon: FaCar, width: 14, height: 14 }
                    span { "My Cars" }
                }
                button {
                    class: "navbar-link",
                    onclick: move |_| on_profile.call(()),
                    Icon { icon: FaUser, width: 14, height: 14 }
                    span { "My Profile" }
                }
                button {
                    class: "navbar-link",
                    onclick: move |_| {
                        api.logout();
                        on_logout.call(());
                    },
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    span { "Exit" }
                }
            }
        }
    }
}
