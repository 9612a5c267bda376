use dioxus::prelude::*;

use crate::icons::{FaPen, FaRightFromBracket};
use crate::{use_api, ErrorBanner, Icon, Loading};

/// Read-only profile of the logged-in user.
#[component]
pub fn ProfileView(on_edit: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    let api = use_api();
    let logout_api = api.clone();
    let profile = use_resource(move || {
        let api = api.clone();
        async move { api.me().await }
    });

    let body = match &*profile.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorBanner { lines: e.display_lines() } },
        Some(Ok(user)) => {
            let name = user.display_name();
            let email = user.email.clone();
            let username = user.username.clone();
            let first_name = user.first_name.clone().unwrap_or_else(|| "-".to_string());
            let last_name = user.last_name.clone().unwrap_or_else(|| "-".to_string());
            rsx! {
                h1 { class: "view-title", "{name}" }
                dl {
                    class: "details-grid",
                    dt { "Email" }
                    dd { "{email}" }
                    dt { "Username" }
                    dd { "{username}" }
                    dt { "First name" }
                    dd { "{first_name}" }
                    dt { "Last name" }
                    dd { "{last_name}" }
                }
            }
        }
    };

    rsx! {
        div {
            class: "view-container",
            {body}
            div {
                class: "flex gap-2 mt-6",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_edit.call(()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    span { "Edit" }
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| {
                        logout_api.logout();
                        on_logout.call(());
                    },
                    Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                    span { "Log out" }
                }
            }
        }
    }
}
