pub mod setup;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::{chat_view, dashboard};
use crate::state::AppState;
use crate::views::{self, View};

/// Bring the DOM in line with `state`: page and dialog visibility first, then
/// the content of whichever page is showing.
pub fn render(document: &Document, state: &AppState) -> Result<(), JsValue> {
    views::render_navigation(document, &state.nav)?;

    match state.nav.view() {
        View::Landing => Ok(()),
        View::Dashboard => dashboard::render(document, state),
        View::Chat => chat_view::render(document, state),
    }
}
