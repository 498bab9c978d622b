//! Signed-out landing page with the Login / Register entry points.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::messages::Message;
use crate::state::dispatch_global_message;
use crate::views::{Overlay, View};

pub fn mount(document: &Document, parent: &Element) -> Result<(), JsValue> {
    if document.get_element_by_id(View::Landing.element_id()).is_some() {
        return Ok(());
    }

    let page = document.create_element("section")?;
    page.set_id(View::Landing.element_id());
    page.set_class_name("page landing-page");

    let hero = document.create_element("div")?;
    hero.set_class_name("hero");
    let heading = document.create_element("h2")?;
    heading.set_text_content(Some("Ask your database questions in plain English"));
    let blurb = document.create_element("p")?;
    blurb.set_text_content(Some(
        "Upload a SQLite file or create a new one, then chat with it. \
         Every answer shows the SQL that produced it.",
    ));
    hero.append_child(&heading)?;
    hero.append_child(&blurb)?;

    let actions = document.create_element("div")?;
    actions.set_class_name("landing-actions");
    let login = overlay_button(document, "landing-login", "Login", "btn btn-primary", Overlay::Login)?;
    actions.append_child(&login)?;
    let register = overlay_button(document, "landing-register", "Register", "btn btn-secondary", Overlay::Register)?;
    actions.append_child(&register)?;
    hero.append_child(&actions)?;

    page.append_child(&hero)?;
    parent.append_child(&page)?;
    Ok(())
}

/// A button that opens `overlay` when clicked.
pub fn overlay_button(
    document: &Document,
    id: &str,
    text: &str,
    class: &str,
    overlay: Overlay,
) -> Result<Element, JsValue> {
    let button = document.create_element("button")?;
    button.set_id(id);
    button.set_class_name(class);
    button.set_text_content(Some(text));

    let cb = Closure::wrap(Box::new(move |_: Event| {
        dispatch_global_message(Message::OpenOverlay(overlay));
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();

    Ok(button)
}
