//! Shared dialog scaffolding for the login, register, upload and create
//! overlays.
//!
//! Creation, show and hide live here so each dialog only supplies its form.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::dom_utils;
use crate::messages::Message;
use crate::state::dispatch_global_message;
use crate::views::Overlay;

/// Ensure a `<div id="{overlay id}" class="modal">` exists under `parent` and
/// return it together with its `.modal-content` child.
///
/// The content wrapper gets a title bar whose close button, and any click on
/// the backdrop itself, dispatches [`Message::CloseOverlay`].
///
/// Returns `(backdrop, content)`.
pub fn ensure_modal(
    document: &Document,
    parent: &Element,
    overlay: Overlay,
    title: &str,
) -> Result<(Element, Element), JsValue> {
    if let Some(backdrop) = document.get_element_by_id(overlay.element_id()) {
        let content = backdrop
            .query_selector(".modal-content")?
            .ok_or_else(|| JsValue::from_str("modal without .modal-content"))?;
        return Ok((backdrop, content));
    }

    let backdrop = document.create_element("div")?;
    backdrop.set_id(overlay.element_id());
    backdrop.set_class_name("modal");
    dom_utils::hide(&backdrop);
    parent.append_child(&backdrop)?;

    let content = document.create_element("div")?;
    content.set_class_name("modal-content");
    backdrop.append_child(&content)?;

    let header = document.create_element("div")?;
    header.set_class_name("modal-header");
    let heading = document.create_element("h2")?;
    heading.set_text_content(Some(title));
    let close = document.create_element("span")?;
    close.set_class_name("close");
    close.set_inner_html("&times;");
    header.append_child(&heading)?;
    header.append_child(&close)?;
    content.append_child(&header)?;

    let close_cb = Closure::wrap(Box::new(move |_: Event| {
        dispatch_global_message(Message::CloseOverlay(overlay));
    }) as Box<dyn FnMut(_)>);
    close.add_event_listener_with_callback("click", close_cb.as_ref().unchecked_ref())?;
    close_cb.forget();

    // Clicking outside the content box closes the dialog too.
    let backdrop_for_cb = backdrop.clone();
    let backdrop_cb = Closure::wrap(Box::new(move |e: Event| {
        let on_backdrop = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| el == backdrop_for_cb);
        if on_backdrop {
            dispatch_global_message(Message::CloseOverlay(overlay));
        }
    }) as Box<dyn FnMut(_)>);
    backdrop.add_event_listener_with_callback("click", backdrop_cb.as_ref().unchecked_ref())?;
    backdrop_cb.forget();

    Ok((backdrop, content))
}

/// Show the modal and put the cursor in its first field.
pub fn show(modal_backdrop: &Element) {
    let was_hidden = modal_backdrop.class_list().contains("hidden");
    dom_utils::show(modal_backdrop);
    if was_hidden {
        dom_utils::focus_first_input(modal_backdrop);
    }
}

/// Hide the modal backdrop (adds `hidden`).
pub fn hide(modal_backdrop: &Element) {
    dom_utils::hide(modal_backdrop);
}

/// Append a labelled `<input>` to `form`.
pub fn append_field(
    document: &Document,
    form: &Element,
    id: &str,
    label: &str,
    input_type: &str,
) -> Result<Element, JsValue> {
    let group = document.create_element("div")?;
    group.set_class_name("form-group");

    let label_el = document.create_element("label")?;
    label_el.set_attribute("for", id)?;
    label_el.set_text_content(Some(label));

    let input = document.create_element("input")?;
    input.set_id(id);
    input.set_attribute("type", input_type)?;

    group.append_child(&label_el)?;
    group.append_child(&input)?;
    form.append_child(&group)?;
    Ok(input)
}

/// Append the primary action button of a dialog.
pub fn append_submit(document: &Document, form: &Element, id: &str, text: &str) -> Result<Element, JsValue> {
    let button = document.create_element("button")?;
    button.set_id(id);
    button.set_class_name("btn btn-primary");
    button.set_attribute("type", "submit")?;
    button.set_text_content(Some(text));
    form.append_child(&button)?;
    Ok(button)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn ensure_modal_is_idempotent_and_starts_hidden() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body: Element = document.body().unwrap().into();
        let (first, _) = ensure_modal(&document, &body, Overlay::Create, "Create").unwrap();
        let (second, _) = ensure_modal(&document, &body, Overlay::Create, "Create").unwrap();
        assert_eq!(first, second);
        assert!(first.class_list().contains("hidden"));
        show(&first);
        assert!(first.class_list().contains("visible"));
        hide(&first);
        assert!(first.class_list().contains("hidden"));
    }
}
