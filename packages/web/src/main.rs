use dioxus::prelude::*;

use store::ClientConfig;
use ui::SessionProvider;
use views::{
    AppLayout, CarDetail, Cars, EditProfile, Home, Login, NewCar, NotFound, Profile, Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(AppLayout)]
        #[route("/app/cars")]
        Cars {},
        #[route("/app/cars/new")]
        NewCar {},
        #[route("/app/cars/:car_uid")]
        CarDetail { car_uid: String },
        #[route("/app/profile")]
        Profile {},
        #[route("/app/profile/edit")]
        EditProfile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const CONFIG_TOML: &str = include_str!("../flipper.toml");

/// Embedded `flipper.toml` with the `FLIPPER_API_URL` build-time override applied.
fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml_or_default(CONFIG_TOML)
        .with_base_url(option_env!("FLIPPER_API_URL"));
    tracing::info!("API base address: {}", config.api.base_url);
    config
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::VIEWS_CSS }
        document::Title { "Flipper" }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}
