//! Upload-a-file and create-an-empty-database dialogs.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use super::modal;
use crate::constants::DATABASE_FILE_EXTENSION;
use crate::dom_utils;
use crate::messages::Message;
use crate::state::dispatch_global_message;
use crate::validation::{validate_database_name, validate_upload};
use crate::views::Overlay;

const UPLOAD_INPUT: &str = "upload-file";
const CREATE_INPUT: &str = "create-db-name";

pub fn mount(document: &Document, parent: &Element) -> Result<(), JsValue> {
    mount_upload(document, parent)?;
    mount_create(document, parent)?;
    Ok(())
}

fn mount_upload(document: &Document, parent: &Element) -> Result<(), JsValue> {
    let (_, content) = modal::ensure_modal(document, parent, Overlay::Upload, "Upload Database")?;
    if content.query_selector("form")?.is_some() {
        return Ok(());
    }

    let form = document.create_element("form")?;
    form.set_id("upload-form");
    let input = modal::append_field(document, &form, UPLOAD_INPUT, "SQLite file", "file")?;
    input.set_attribute("accept", DATABASE_FILE_EXTENSION)?;
    modal::append_submit(document, &form, "upload-submit", "Upload")?;
    content.append_child(&form)?;

    let doc = document.clone();
    let on_submit = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        let file = dom_utils::selected_file(&doc, UPLOAD_INPUT).ok().flatten();
        let name = file.as_ref().map(|f| f.name());
        match (validate_upload(name.as_deref()), file) {
            (Ok(()), Some(file)) => dispatch_global_message(Message::UploadRequested(file)),
            (Err(err), _) => dispatch_global_message(Message::ValidationFailed(err)),
            (Ok(()), None) => {}
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(())
}

fn mount_create(document: &Document, parent: &Element) -> Result<(), JsValue> {
    let (_, content) = modal::ensure_modal(document, parent, Overlay::Create, "Create Database")?;
    if content.query_selector("form")?.is_some() {
        return Ok(());
    }

    let form = document.create_element("form")?;
    form.set_id("create-form");
    let input = modal::append_field(document, &form, CREATE_INPUT, "Database name", "text")?;
    input.set_attribute("placeholder", "sales")?;
    modal::append_submit(document, &form, "create-submit", "Create")?;
    content.append_child(&form)?;

    let doc = document.clone();
    let on_submit = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        let name = dom_utils::input_value(&doc, CREATE_INPUT).unwrap_or_default();
        let name = name.trim().to_string();
        match validate_database_name(&name) {
            Ok(()) => dispatch_global_message(Message::CreateRequested(name)),
            Err(err) => dispatch_global_message(Message::ValidationFailed(err)),
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(())
}

pub fn reset_upload(document: &Document) {
    dom_utils::clear_inputs(document, &[UPLOAD_INPUT]);
}

pub fn reset_create(document: &Document) {
    dom_utils::clear_inputs(document, &[CREATE_INPUT]);
}
