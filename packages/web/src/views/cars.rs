use dioxus::prelude::*;
use ui::views::{CarDetailView, CarListView, NewCarView};

use crate::Route;

#[component]
pub fn Cars() -> Element {
    let nav = use_navigator();

    rsx! {
        CarListView {
            on_open: move |car_uid: String| {
                nav.push(Route::CarDetail { car_uid });
            },
            on_new: move |_| {
                nav.push(Route::NewCar {});
            },
        }
    }
}

#[component]
pub fn NewCar() -> Element {
    let nav = use_navigator();

    rsx! {
        NewCarView {
            on_created: move |_| {
                nav.replace(Route::Cars {});
            },
            on_cancel: move |_| {
                nav.push(Route::Cars {});
            },
        }
    }
}

#[component]
pub fn CarDetail(car_uid: String) -> Element {
    let nav = use_navigator();

    rsx! {
        CarDetailView {
            car_uid,
            on_back: move |_| {
                nav.push(Route::Cars {});
            },
        }
    }
}
