use wasm_bindgen::prelude::*;

#[macro_use]
pub mod macros;

pub mod command_executors;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod query_tracker;
pub mod reducers;
pub mod render;
pub mod session;
pub mod state;
pub mod toast;
pub mod transcript;
pub mod ui;
pub mod update;
pub mod utils;
pub mod validation;
pub mod views;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    if let Err(e) = network::init_api_config() {
        web_sys::console::warn_1(&format!("Falling back to default API config: {:?}", e).into());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    // Build every page and dialog up front; visibility is driven by state.
    ui::setup::create_base_ui(&document)?;

    command_executors::render_current_state();

    Ok(())
}
