pub mod api_client;
pub mod config;

pub use api_client::ApiClient;

use config::ApiConfig;
use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

fn store_config(config: ApiConfig) {
    let mut guard = API_CONFIG.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(config);
}

/// Initialize the API configuration. Must be called before any network operations.
pub fn init_api_config() -> Result<(), &'static str> {
    let config = ApiConfig::new()?;
    crate::debug_log!("API base URL: {}", config.base_url());
    store_config(config);
    Ok(())
}

/// Initialize the API configuration from a JS-provided URL.
/// This allows the hosting page to point the app at another backend.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    store_config(ApiConfig::from_url(api_base_url));
    Ok(())
}

/// Current configuration, falling back to the local backend when nothing has
/// been initialised yet.
pub(crate) fn api_config() -> ApiConfig {
    let guard = API_CONFIG.read().unwrap_or_else(|e| e.into_inner());
    guard.clone().unwrap_or_default()
}
