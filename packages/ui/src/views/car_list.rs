use api::{Car, ListQuery, ResourceList};
use dioxus::prelude::*;

use crate::icons::FaPlus;
use crate::{format, use_api, use_config, ErrorBanner, Icon, Loading, StatusBadge};

/// Paged grid of the user's vehicles.
#[component]
pub fn CarListView(on_open: EventHandler<String>, on_new: EventHandler<()>) -> Element {
    let api = use_api();
    let config = use_config();
    let mut cars = use_signal(ResourceList::<Car>::new);
    let mut page = use_signal(|| 1u32);

    // Re-runs whenever `page` changes.
    let _loader = use_resource(move || {
        let api = api.clone();
        let query = ListQuery::new(config.lists.page_size, &config.lists.cars_sort_by)
            .with_page(page());
        async move {
            cars.write().begin_load(query.page);
            let result = api.my_cars(&query).await;
            cars.write().finish_load(result);
        }
    });

    let list = cars.read();
    let has_prev = list.has_prev();
    let has_next = list.has_next();
    let current = list.page();
    let total = list.total_pages().max(1);

    let content = if let Some(message) = list.error() {
        let lines: Vec<String> = message.lines().map(str::to_string).collect();
        rsx! { ErrorBanner { lines } }
    } else if list.is_loading() && list.items().is_empty() {
        rsx! { Loading {} }
    } else if list.is_empty() {
        rsx! {
            p { class: "empty-state", "No vehicles yet. Add the first one to start tracking." }
        }
    } else {
        let items: Vec<Car> = list.items().to_vec();
        rsx! {
            div {
                class: "car-grid",
                for car in items {
                    CarCard { key: "{car.uid}", car: car.clone(), on_open }
                }
            }
        }
    };

    rsx! {
        div {
            class: "view-container",
            div {
                class: "view-header",
                h1 { class: "view-title", "My Cars" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_new.call(()),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    span { "Add car" }
                }
            }

            {content}

            if total > 1 {
                div {
                    class: "pager",
                    button {
                        class: "btn btn-secondary",
                        disabled: !has_prev,
                        onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                        "Previous"
                    }
                    span { class: "pager-label", "Page {current} of {total}" }
                    button {
                        class: "btn btn-secondary",
                        disabled: !has_next,
                        onclick: move |_| page.set(current + 1),
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn CarCard(car: Car, on_open: EventHandler<String>) -> Element {
    let title = car.title();
    let price = format::money(car.price_purchased);
    let uid = car.uid.clone();
    let vin = car.vin.clone();

    rsx! {
        div {
            class: "car-card",
            onclick: move |_| on_open.call(uid.clone()),
            div {
                class: "car-card-header",
                span { class: "car-card-title", "{title}" }
                StatusBadge { status: car.status }
            }
            div { class: "car-card-vin", "{vin}" }
            div { class: "car-card-price", "Bought for {price}" }
        }
    }
}
