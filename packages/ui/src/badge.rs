use api::CarStatus;
use dioxus::prelude::*;

/// Colored pill showing a car's lifecycle stage.
#[component]
pub fn StatusBadge(status: CarStatus) -> Element {
    let tone = match status {
        CarStatus::Fresh => "badge-neutral",
        CarStatus::Repairing | CarStatus::Detailing => "badge-warning",
        CarStatus::Listed => "badge-info",
        CarStatus::Sold => "badge-success",
    };
    let label = status.label();

    rsx! {
        span { class: "badge {tone}", "{label}" }
    }
}

/// `<select>` over every [`CarStatus`], valued by its wire name.
#[component]
pub fn StatusSelect(value: CarStatus, on_change: EventHandler<CarStatus>) -> Element {
    rsx! {
        select {
            class: "input",
            value: value.as_wire(),
            onchange: move |evt: FormEvent| {
                if let Some(status) = CarStatus::from_wire(&evt.value()) {
                    on_change.call(status);
                }
            },
            for status in CarStatus::ALL {
                option {
                    value: status.as_wire(),
                    selected: status == value,
                    {status.label()}
                }
            }
        }
    }
}
