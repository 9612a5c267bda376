use api::forms::CarEditForm;
use api::{ApiError, Car, CarStats, CarStatus, FieldErrors};
use dioxus::prelude::*;

use crate::icons::FaPen;
use crate::views::ExpenseLedger;
use crate::{
    error_lines, format, use_api, ErrorBanner, FieldError, Icon, Loading, StatusBadge,
    StatusSelect,
};

/// Detail page of one vehicle: record, derived statistics and the expense
/// ledger. The record switches between read-only and edit modes.
#[component]
pub fn CarDetailView(
    /// Server uid of the car, from the route.
    car_uid: String,
    /// Back to the list.
    on_back: EventHandler<()>,
) -> Element {
    // Signal so the loader re-runs when the route param changes
    let mut uid_signal = use_signal(|| car_uid.clone());
    if *uid_signal.peek() != car_uid {
        uid_signal.set(car_uid.clone());
    }

    let api = use_api();
    let save_api = api.clone();
    let refresh_api = api.clone();
    let mut car = use_signal(|| Option::<Car>::None);
    let mut load_error = use_signal(|| Option::<ApiError>::None);
    let mut editing = use_signal(|| false);
    let mut form = use_signal(CarEditForm::default);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut save_error = use_signal(|| Option::<ApiError>::None);
    let mut saving = use_signal(|| false);

    let _loader = use_resource(move || {
        let api = api.clone();
        let uid = uid_signal();
        async move {
            car.set(None);
            load_error.set(None);
            editing.set(false);
            match api.get_car(&uid).await {
                Ok(fetched) => car.set(Some(fetched)),
                Err(e) => load_error.set(Some(e)),
            }
        }
    });

    let start_edit = move |_| {
        if let Some(current) = car() {
            form.set(CarEditForm::from_car(&current));
            field_errors.set(FieldErrors::new());
            save_error.set(None);
            editing.set(true);
        }
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        save_error.set(None);
        let update = match form().to_update() {
            Ok(update) => update,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());

        let api = save_api.clone();
        let uid = uid_signal();
        spawn(async move {
            saving.set(true);
            match api.update_car(&uid, &update).await {
                Ok(updated) => {
                    car.set(Some(updated));
                    editing.set(false);
                }
                Err(e) => save_error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    // Expense changes move the server-side totals; pull the record again
    // without dropping back to the loading state.
    let refresh_stats = move |_: ()| {
        let api = refresh_api.clone();
        let uid = uid_signal();
        spawn(async move {
            match api.get_car(&uid).await {
                Ok(fetched) => car.set(Some(fetched)),
                Err(e) => tracing::warn!("Could not refresh car {}: {}", uid, e),
            }
        });
    };

    if let Some(e) = load_error() {
        return rsx! {
            div {
                class: "view-container",
                ErrorBanner { lines: e.display_lines() }
                button {
                    class: "btn btn-secondary mt-4",
                    onclick: move |_| on_back.call(()),
                    "Back to list"
                }
            }
        };
    }
    let Some(current) = car() else {
        return rsx! { Loading {} };
    };

    let title = current.title();
    let status = current.status;
    let record = if editing() {
        let f = form();
        let show_listing = f.shows_listing(&current);
        let show_sale = f.shows_sale(&current);
        rsx! {
            form {
                onsubmit: handle_save,
                novalidate: true,
                class: "form-grid",

                ErrorBanner { lines: error_lines(&save_error()) }

                label { class: "field-label", "Status" }
                StatusSelect {
                    value: f.status,
                    on_change: move |status: CarStatus| form.write().status = status,
                }

                LabeledInput {
                    label: "Purchase price",
                    value: f.price_purchased.clone(),
                    errors: field_errors(),
                    field: "price_purchased",
                    on_input: move |v: String| form.write().price_purchased = v,
                }

                if show_listing {
                    LabeledInput {
                        label: "Listed on",
                        input_type: "date",
                        value: f.date_listed.clone(),
                        errors: field_errors(),
                        field: "date_listed",
                        on_input: move |v: String| form.write().date_listed = v,
                    }
                    LabeledInput {
                        label: "Listing price",
                        value: f.price_listed.clone(),
                        errors: field_errors(),
                        field: "price_listed",
                        on_input: move |v: String| form.write().price_listed = v,
                    }
                }

                if show_sale {
                    LabeledInput {
                        label: "Sold on",
                        input_type: "date",
                        value: f.date_sold.clone(),
                        errors: field_errors(),
                        field: "date_sold",
                        on_input: move |v: String| form.write().date_sold = v,
                    }
                    LabeledInput {
                        label: "Sale price",
                        value: f.price_sold.clone(),
                        errors: field_errors(),
                        field: "price_sold",
                        on_input: move |v: String| form.write().price_sold = v,
                    }
                }

                LabeledInput {
                    label: "Autoteka report",
                    input_type: "url",
                    value: f.autoteka_link.clone(),
                    errors: field_errors(),
                    field: "autoteka_link",
                    on_input: move |v: String| form.write().autoteka_link = v,
                }
                LabeledInput {
                    label: "Avito",
                    input_type: "url",
                    value: f.avito_link.clone(),
                    errors: field_errors(),
                    field: "avito_link",
                    on_input: move |v: String| form.write().avito_link = v,
                }
                LabeledInput {
                    label: "Auto.ru",
                    input_type: "url",
                    value: f.autoru_link.clone(),
                    errors: field_errors(),
                    field: "autoru_link",
                    on_input: move |v: String| form.write().autoru_link = v,
                }
                LabeledInput {
                    label: "Drom",
                    input_type: "url",
                    value: f.drom_link.clone(),
                    errors: field_errors(),
                    field: "drom_link",
                    on_input: move |v: String| form.write().drom_link = v,
                }

                label { class: "field-label", "Notes" }
                textarea {
                    class: "input",
                    rows: 4,
                    value: f.notes.clone(),
                    oninput: move |evt: FormEvent| form.write().notes = evt.value(),
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
                        onclick: move |_| editing.set(false),
                        "Cancel"
                    }
                }
            }
        }
    } else {
        rsx! {
            CarRecord { car: current.clone() }
            button {
                class: "btn btn-secondary mt-4",
                onclick: start_edit,
                Icon { icon: FaPen, width: 12, height: 12 }
                span { "Edit" }
            }
        }
    };

    rsx! {
        div {
            class: "view-container",
            button { class: "link mb-4", onclick: move |_| on_back.call(()), "← My Cars" }
            div {
                class: "view-header",
                h1 { class: "view-title", "{title}" }
                StatusBadge { status }
            }

            {record}

            if let Some(stats) = current.stats.clone() {
                StatsPanel { stats }
            }

            ExpenseLedger { car_uid: uid_signal(), on_changed: refresh_stats }
        }
    }
}

/// Label, input and its validation message.
#[component]
fn LabeledInput(
    label: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    errors: FieldErrors,
    field: &'static str,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "field-label", "{label}" }
        input {
            class: "input",
            r#type: "{input_type}",
            value: "{value}",
            oninput: move |evt: FormEvent| on_input.call(evt.value()),
        }
        FieldError { errors, field }
    }
}

#[component]
fn CarRecord(car: Car) -> Element {
    let purchased = format!(
        "{} · {}",
        format::date(Some(car.date_purchased)),
        format::money(car.price_purchased)
    );
    let listed = format!(
        "{} · {}",
        format::date(car.date_listed),
        format::optional_money(car.price_listed)
    );
    let sold = format!(
        "{} · {}",
        format::date(car.date_sold),
        format::optional_money(car.price_sold)
    );
    let links: Vec<(&'static str, String)> = car
        .listing_links()
        .into_iter()
        .map(|(label, link)| (label, link.to_string()))
        .collect();
    let autoteka = car.autoteka_link.clone().filter(|l| !l.is_empty());
    let notes = car.notes.clone().filter(|n| !n.trim().is_empty());
    let vin = car.vin.clone();
    let pts = car.pts_num.clone();
    let sts = car.sts_num.clone();

    rsx! {
        dl {
            class: "details-grid",
            dt { "VIN" }
            dd { "{vin}" }
            dt { "PTS" }
            dd { "{pts}" }
            dt { "STS" }
            dd { "{sts}" }
            dt { "Purchased" }
            dd { "{purchased}" }
            if car.shows_listing() {
                dt { "Listed" }
                dd { "{listed}" }
            }
            if car.shows_sale() {
                dt { "Sold" }
                dd { "{sold}" }
            }
            if let Some(link) = autoteka {
                dt { "Autoteka" }
                dd { a { href: "{link}", target: "_blank", rel: "noopener", "Report" } }
            }
            if !links.is_empty() {
                dt { "Listings" }
                dd {
                    for (label, link) in links {
                        a {
                            class: "mr-3",
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener",
                            "{label}"
                        }
                    }
                }
            }
            if let Some(notes) = notes {
                dt { "Notes" }
                dd { class: "whitespace-pre-wrap", "{notes}" }
            }
        }
    }
}

/// Server-derived totals and the per-owner breakdown.
#[component]
fn StatsPanel(stats: CarStats) -> Element {
    let total_expenses = format::money(stats.total_expenses);
    let cost_basis = format::money(stats.cost_basis);
    let potential = format!(
        "{} ({})",
        format::optional_money(stats.potential_profit),
        format::margin(stats.potential_margin)
    );
    let actual = format!(
        "{} ({})",
        format::optional_money(stats.actual_profit),
        format::margin(stats.actual_margin)
    );

    rsx! {
        section {
            class: "stats-panel",
            h2 { class: "section-title", "Numbers" }
            dl {
                class: "details-grid",
                dt { "Expenses" }
                dd { "{total_expenses}" }
                dt { "Cost basis" }
                dd { "{cost_basis}" }
                dt { "Potential profit" }
                dd { "{potential}" }
                dt { "Actual profit" }
                dd { "{actual}" }
            }

            if !stats.owners_stats.is_empty() {
                table {
                    class: "table mt-4",
                    thead {
                        tr {
                            th { "Owner" }
                            th { "Paid in" }
                            th { "Payout" }
                        }
                    }
                    tbody {
                        for owner in stats.owners_stats.iter() {
                            tr {
                                key: "{owner.owner_uid}",
                                td {
                                    {owner.username.clone().unwrap_or_else(|| owner.email.clone())}
                                }
                                td { {format::money(owner.owner_total_expenses)} }
                                td { {format::money(owner.net_payout)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
