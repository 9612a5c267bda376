use dioxus::prelude::*;
use ui::views::{EditProfileView, ProfileView};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileView {
            on_edit: move |_| {
                nav.push(Route::EditProfile {});
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
pub fn EditProfile() -> Element {
    let nav = use_navigator();

    rsx! {
        EditProfileView {
            on_saved: move |_| {
                nav.replace(Route::Profile {});
            },
            on_cancel: move |_| {
                nav.push(Route::Profile {});
            },
        }
    }
}
