//! Database dashboard: the uploaded and created lists plus the toolbar.
//!
//! List rows are rebuilt from state on every render.  Each list has a single
//! delegated click listener that reads `data-db-name` / `data-db-kind` off the
//! clicked row, so re-rendering never piles up handlers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use super::landing::overlay_button;
use crate::dom_utils;
use crate::messages::Message;
use crate::models::{DatabaseInfo, DatabaseKind};
use crate::render::escape_html;
use crate::state::{dispatch_global_message, AppState};
use crate::utils::{format_modified, format_size};
use crate::views::{Overlay, View};

const USER_LABEL: &str = "dashboard-user";

fn list_id(kind: DatabaseKind) -> &'static str {
    match kind {
        DatabaseKind::Uploaded => "uploaded-db-list",
        DatabaseKind::Created => "created-db-list",
    }
}

pub fn mount(document: &Document, parent: &Element) -> Result<(), JsValue> {
    if document.get_element_by_id(View::Dashboard.element_id()).is_some() {
        return Ok(());
    }

    let page = document.create_element("section")?;
    page.set_id(View::Dashboard.element_id());
    page.set_class_name("page dashboard-page");
    dom_utils::hide(&page);

    // Toolbar ------------------------------------------------------------
    let toolbar = document.create_element("div")?;
    toolbar.set_class_name("dashboard-toolbar");

    let user = document.create_element("span")?;
    user.set_id(USER_LABEL);
    user.set_class_name("dashboard-user");
    toolbar.append_child(&user)?;

    let upload = overlay_button(document, "open-upload", "Upload Database", "btn btn-primary", Overlay::Upload)?;
    toolbar.append_child(&upload)?;
    let create = overlay_button(document, "open-create", "Create Database", "btn btn-secondary", Overlay::Create)?;
    toolbar.append_child(&create)?;
    let refresh = message_button(document, "refresh-dbs", "Refresh", Message::RefreshDatabases)?;
    toolbar.append_child(&refresh)?;
    let logout = message_button(document, "logout-btn", "Logout", Message::Logout)?;
    toolbar.append_child(&logout)?;
    page.append_child(&toolbar)?;

    // Lists --------------------------------------------------------------
    for (kind, heading) in [
        (DatabaseKind::Uploaded, "Uploaded Databases"),
        (DatabaseKind::Created, "Created Databases"),
    ] {
        let section = document.create_element("div")?;
        section.set_class_name("db-section");
        let h = document.create_element("h3")?;
        h.set_text_content(Some(heading));
        section.append_child(&h)?;

        let list = document.create_element("ul")?;
        list.set_id(list_id(kind));
        list.set_class_name("db-list");
        attach_list_listener(&list)?;
        section.append_child(&list)?;

        page.append_child(&section)?;
    }

    parent.append_child(&page)?;
    Ok(())
}

fn message_button(document: &Document, id: &str, text: &str, msg: Message) -> Result<Element, JsValue> {
    let button = document.create_element("button")?;
    button.set_id(id);
    button.set_class_name("btn btn-secondary");
    button.set_text_content(Some(text));

    let cb = Closure::wrap(Box::new(move |_: Event| {
        dispatch_global_message(msg.clone());
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();

    Ok(button)
}

fn attach_list_listener(list: &Element) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(move |e: Event| {
        let Some(row) = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("[data-db-name]").ok().flatten())
        else {
            return;
        };
        let name = row.get_attribute("data-db-name");
        let kind = row.get_attribute("data-db-kind").and_then(|k| DatabaseKind::parse(&k));
        if let (Some(name), Some(kind)) = (name, kind) {
            dispatch_global_message(Message::OpenDatabase { name, kind });
        }
    }) as Box<dyn FnMut(_)>);
    list.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Markup for one list.  Names are escaped both as text and as attribute.
pub fn database_list_html(entries: &[DatabaseInfo], kind: DatabaseKind, loading: bool) -> String {
    if entries.is_empty() {
        let text = if loading { "Loading..." } else { "No databases" };
        return format!("<li class=\"db-empty\">{}</li>", text);
    }

    let mut html = String::new();
    for db in entries {
        let name = escape_html(&db.name);
        html.push_str(&format!(
            "<li class=\"db-item\" data-db-name=\"{name}\" data-db-kind=\"{kind}\">\
             <span class=\"db-name\">{name}</span>\
             <span class=\"db-meta\">{size} &middot; {modified}</span></li>",
            name = name,
            kind = kind.as_str(),
            size = format_size(db.size),
            modified = escape_html(&format_modified(db.modified)),
        ));
    }
    html
}

pub fn render(document: &Document, state: &AppState) -> Result<(), JsValue> {
    let user = state.session.user().unwrap_or_default();
    dom_utils::set_text(document, USER_LABEL, &format!("Signed in as {}", user));

    let loading = state.is_loading && !state.databases_loaded;
    for kind in [DatabaseKind::Uploaded, DatabaseKind::Created] {
        if let Some(list) = document.get_element_by_id(list_id(kind)) {
            list.set_inner_html(&database_list_html(state.databases.entries(kind), kind, loading));
        }
    }
    Ok(())
}
