use api::forms::LoginForm;
use api::{ApiError, FieldErrors};
use dioxus::prelude::*;

use crate::{error_lines, use_api, ErrorBanner, FieldError};

/// Email + password sign-in.
///
/// Nothing is sent until the form validates. On success the token is stored
/// by the client and `on_success` navigates to the landing view.
#[component]
pub fn LoginView(on_success: EventHandler<()>, on_signup: EventHandler<()>) -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut error = use_signal(|| Option::<ApiError>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let form = LoginForm {
            email: email().trim().to_string(),
            password: password(),
        };
        if let Err(errors) = form.validate() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::new());

        let api = api.clone();
        spawn(async move {
            loading.set(true);
            match api.login(&form.email, &form.password).await {
                Ok(()) => on_success.call(()),
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
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
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Sign in"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Track every car you flip"
            }

            form {
                onsubmit: handle_login,
                novalidate: true,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                ErrorBanner { lines: error_lines(&error()) }

                div {
                    input {
                        class: "input w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    FieldError { errors: field_errors(), field: "email" }
                }

                div {
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    FieldError { errors: field_errors(), field: "password" }
                }

                button {
                    class: "btn btn-primary w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "No account yet? "
                button {
                    class: "link",
                    onclick: move |_| on_signup.call(()),
                    "Create one"
                }
            }
        }
    }
}
