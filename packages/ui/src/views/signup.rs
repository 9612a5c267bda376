use api::forms::SignupForm;
use api::{ApiError, FieldErrors};
use dioxus::prelude::*;

use crate::{error_lines, use_api, ErrorBanner, FieldError};

/// Account creation form. On success the user is sent to log in.
#[component]
pub fn SignupView(on_success: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let api = use_api();
    let mut form = use_signal(SignupForm::default);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut error = use_signal(|| Option::<ApiError>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let request = match form().validate() {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());

        let api = api.clone();
        spawn(async move {
            loading.set(true);
            match api.signup(&request).await {
                Ok(user) => {
                    tracing::info!("Created account {}", user.username);
                    on_success.call(());
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-8 text-neutral-800 font-bold text-[1.75rem]",
                "Create Account"
            }

            form {
                onsubmit: handle_signup,
                novalidate: true,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                ErrorBanner { lines: error_lines(&error()) }

                div {
                    input {
                        class: "input w-full",
                        placeholder: "Username",
                        value: form().username,
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }
                    FieldError { errors: field_errors(), field: "username" }
                }
                div {
                    input {
                        class: "input w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: form().email,
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    FieldError { errors: field_errors(), field: "email" }
                }
                div {
                    input {
                        class: "input w-full",
                        placeholder: "First name",
                        value: form().first_name,
                        oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                    }
                    FieldError { errors: field_errors(), field: "first_name" }
                }
                div {
                    input {
                        class: "input w-full",
                        placeholder: "Last name",
                        value: form().last_name,
                        oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                    }
                    FieldError { errors: field_errors(), field: "last_name" }
                }
                div {
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password (min 8 characters)",
                        value: form().password,
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                    FieldError { errors: field_errors(), field: "password" }
                }
                div {
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: form().confirm_password,
                        oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                    }
                    FieldError { errors: field_errors(), field: "confirm_password" }
                }

                button {
                    class: "btn btn-primary w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Already have an account? "
                button {
                    class: "link",
                    onclick: move |_| on_login.call(()),
                    "Sign in"
                }
            }
        }
    }
}
