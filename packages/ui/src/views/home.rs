use dioxus::prelude::*;

/// Public landing page.
#[component]
pub fn HomeView(on_login: EventHandler<()>, on_signup: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",
            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[2rem]",
                "Flipper"
            }
            p {
                class: "mb-8 max-w-md text-center text-neutral-600 text-[0.9375rem]",
                "Buy, fix, list, sell. Keep purchase prices, expenses and margins for every car in one place."
            }
            div {
                class: "flex gap-3",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_login.call(()),
                    "Sign in"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_signup.call(()),
                    "Create account"
                }
            }
        }
    }
}
