use api::forms::ProfileForm;
use api::{ApiError, FieldErrors};
use dioxus::prelude::*;

use crate::{error_lines, use_api, ErrorBanner, FieldError, Loading};

/// Profile edit form, seeded from `/auth/me`.
#[component]
pub fn EditProfileView(on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let save_api = api.clone();
    let mut form = use_signal(ProfileForm::default);
    let mut uid = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut error = use_signal(|| Option::<ApiError>::None);
    let mut saving = use_signal(|| false);

    let loader = use_resource(move || {
        let api = api.clone();
        async move {
            match api.me().await {
                Ok(user) => {
                    form.set(ProfileForm::from_profile(&user));
                    uid.set(Some(user.uid));
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let Some(user_uid) = uid() else {
            return;
        };
        let update = match form().validate() {
            Ok(update) => update,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());

        let api = save_api.clone();
        spawn(async move {
            saving.set(true);
            match api.update_profile(&user_uid, &update).await {
                Ok(_) => on_saved.call(()),
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e));
                }
            }
        });
    };

    if let Some(Err(e)) = &*loader.read() {
        return rsx! {
            div { class: "view-container", ErrorBanner { lines: e.display_lines() } }
        };
    }
    if uid().is_none() {
        return rsx! { Loading {} };
    }

    rsx! {
        div {
            class: "view-container",
            h1 { class: "view-title", "Edit profile" }

            form {
                onsubmit: handle_save,
                novalidate: true,
                class: "flex flex-col gap-3 max-w-[360px]",

                ErrorBanner { lines: error_lines(&error()) }

                label { class: "field-label", "Username" }
                input {
                    class: "input",
                    value: form().username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                FieldError { errors: field_errors(), field: "username" }

                label { class: "field-label", "First name" }
                input {
                    class: "input",
                    value: form().first_name,
                    oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                }

                label { class: "field-label", "Last name" }
                input {
                    class: "input",
                    value: form().last_name,
                    oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                }

                div {
                    class: "flex gap-2 mt-2",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
