//! Session context for the UI.
//!
//! [`SessionProvider`] builds one [`AppClient`] for the whole app and shares it
//! through context. Views grab it with [`use_api`]; nothing else touches the
//! stored token.

use api::{ApiClient, ReqwestTransport};
use dioxus::prelude::*;
use store::ClientConfig;

/// Token store for the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalStorageTokenStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformTokenStore = store::FileTokenStore;

pub type AppClient = ApiClient<ReqwestTransport, PlatformTokenStore>;

/// Create the platform-appropriate token store.
///
/// - **Web**: `window.localStorage[token_key]`
/// - **Native**: `<data_dir>/flipper/<token_key>`
pub fn make_token_store(config: &ClientConfig) -> PlatformTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageTokenStore::new(&config.session.token_key)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("flipper");
        let tokens = store::FileTokenStore::new(base, &config.session.token_key);
        tracing::debug!("Session token file: {}", tokens.path().display());
        tokens
    }
}

/// Build the client used by every view.
///
/// Any 401 outside login and the route gates sends the browser to `/login`
/// with a full page load, dropping all in-memory state.
pub fn make_client(config: &ClientConfig) -> AppClient {
    let client = ApiClient::new(
        &config.api.base_url,
        ReqwestTransport::new(),
        make_token_store(config),
    )
    .with_unauthorized_hook(|| {
        tracing::warn!("Session rejected, returning to login");
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href("/login") {
                    tracing::warn!("Redirect to /login failed: {:?}", e);
                }
            }
        }
    });
    tracing::info!("API client for {}", client.base_url());
    client
}

/// The shared API client.
pub fn use_api() -> AppClient {
    use_context::<AppClient>()
}

/// The configuration the app was started with.
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provides the API client and configuration to everything below it.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let client_config = config.clone();
    use_context_provider(move || make_client(&client_config));
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}
