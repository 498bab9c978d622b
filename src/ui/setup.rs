use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::components::{auth_modals, chat_view, dashboard, database_modals, landing};

/// Build the header, every page and every dialog.  Safe to call twice:
/// each piece checks for its own root element first.
pub fn create_base_ui(document: &Document) -> Result<(), JsValue> {
    let body = document.body().ok_or(JsValue::from_str("No body found"))?;

    // Reuse a host-provided container when index.html has one.
    let app = match document.get_element_by_id("app-container") {
        Some(el) => el,
        None => {
            let el = document.create_element("div")?;
            el.set_id("app-container");
            body.append_child(&el)?;
            el
        }
    };

    create_header(document, &app)?;

    landing::mount(document, &app)?;
    dashboard::mount(document, &app)?;
    chat_view::mount(document, &app)?;

    auth_modals::mount(document, &app)?;
    database_modals::mount(document, &app)?;

    Ok(())
}

fn create_header(document: &Document, app: &Element) -> Result<(), JsValue> {
    if document.get_element_by_id("app-header").is_some() {
        return Ok(());
    }

    let header = document.create_element("header")?;
    header.set_id("app-header");
    header.set_class_name("header");

    let title = document.create_element("h1")?;
    title.set_text_content(Some("NL2SQL.AI"));
    header.append_child(&title)?;

    app.append_child(&header)?;
    Ok(())
}
