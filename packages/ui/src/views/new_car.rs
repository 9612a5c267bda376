use api::forms::NewCarForm;
use api::{ApiError, CarStatus, FieldErrors};
use dioxus::prelude::*;

use crate::{error_lines, use_api, ErrorBanner, FieldError, StatusSelect};

/// Registers a newly bought vehicle.
#[component]
pub fn NewCarView(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let mut form = use_signal(NewCarForm::default);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut error = use_signal(|| Option::<ApiError>::None);
    let mut saving = use_signal(|| false);

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let car = match form().validate() {
            Ok(car) => car,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());

        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.create_car(&car).await {
                Ok(created) => {
                    tracing::info!("Created car {}", created.uid);
                    on_created.call(());
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e));
                }
            }
        });
    };

    rsx! {
        div {
            class: "view-container",
            h1 { class: "view-title", "Add car" }

            form {
                onsubmit: handle_create,
                novalidate: true,
                class: "form-grid",

                ErrorBanner { lines: error_lines(&error()) }

                label { class: "field-label", "Make" }
                input {
                    class: "input",
                    value: form().make,
                    oninput: move |evt: FormEvent| form.write().make = evt.value(),
                }
                FieldError { errors: field_errors(), field: "make" }

                label { class: "field-label", "Model" }
                input {
                    class: "input",
                    value: form().model,
                    oninput: move |evt: FormEvent| form.write().model = evt.value(),
                }
                FieldError { errors: field_errors(), field: "model" }

                label { class: "field-label", "Year" }
                input {
                    class: "input",
                    inputmode: "numeric",
                    maxlength: 4,
                    value: form().year,
                    oninput: move |evt: FormEvent| form.write().year = evt.value(),
                }
                FieldError { errors: field_errors(), field: "year" }

                label { class: "field-label", "VIN" }
                input {
                    class: "input",
                    value: form().vin,
                    oninput: move |evt: FormEvent| form.write().vin = evt.value(),
                }
                FieldError { errors: field_errors(), field: "vin" }

                label { class: "field-label", "Title number (PTS)" }
                input {
                    class: "input",
                    value: form().pts_num,
                    oninput: move |evt: FormEvent| form.write().pts_num = evt.value(),
                }
                FieldError { errors: field_errors(), field: "pts_num" }

                label { class: "field-label", "Registration number (STS)" }
                input {
                    class: "input",
                    value: form().sts_num,
                    oninput: move |evt: FormEvent| form.write().sts_num = evt.value(),
                }
                FieldError { errors: field_errors(), field: "sts_num" }

                label { class: "field-label", "Purchase date" }
                input {
                    class: "input",
                    r#type: "date",
                    value: form().date_purchased,
                    oninput: move |evt: FormEvent| form.write().date_purchased = evt.value(),
                }
                FieldError { errors: field_errors(), field: "date_purchased" }

                label { class: "field-label", "Purchase price" }
                input {
                    class: "input",
                    inputmode: "numeric",
                    value: form().price_purchased,
                    oninput: move |evt: FormEvent| form.write().price_purchased = evt.value(),
                }
                FieldError { errors: field_errors(), field: "price_purchased" }

                label { class: "field-label", "Status" }
                StatusSelect {
                    value: form().status,
                    on_change: move |status: CarStatus| form.write().status = status,
                }

                div {
                    class: "flex gap-2 mt-2",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Add car" }
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
