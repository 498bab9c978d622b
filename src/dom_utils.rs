//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for show / hide, text updates and form field access so the
//! components don't sprinkle `set_attribute("style", …)` and `dyn_into`
//! casts everywhere.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

pub fn by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))
}

/// Set plain text (never markup) on the element with `id`, if present.
pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Fetch an `<input>` element by id and cast it to `HtmlInputElement`.
pub fn html_input(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    by_id(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an <input>", id)))
}

pub fn input_value(document: &Document, id: &str) -> Result<String, JsValue> {
    Ok(html_input(document, id)?.value())
}

/// Empty each listed input (used after a form was submitted).
pub fn clear_inputs(document: &Document, ids: &[&str]) {
    for id in ids {
        if let Ok(input) = html_input(document, id) {
            input.set_value("");
        }
    }
}

/// First file picked in an `<input type="file">`, if any.
pub fn selected_file(document: &Document, id: &str) -> Result<Option<web_sys::File>, JsValue> {
    Ok(html_input(document, id)?.files().and_then(|files| files.get(0)))
}

/// Focus the first text input inside `container`.
pub fn focus_first_input(container: &Element) {
    if let Ok(Some(el)) = container.query_selector("input") {
        if let Ok(html) = el.dyn_into::<HtmlElement>() {
            let _ = html.focus();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn show_and_hide_toggle_classes() {
        let document = web_sys::window().unwrap().document().unwrap();
        let el = document.create_element("div").unwrap();
        hide(&el);
        assert!(el.class_list().contains("hidden"));
        show(&el);
        assert!(!el.class_list().contains("hidden"));
        assert!(el.class_list().contains("visible"));
    }

    #[wasm_bindgen_test]
    fn input_helpers_read_and_clear() {
        let document = web_sys::window().unwrap().document().unwrap();
        let input: HtmlInputElement = document.create_element("input").unwrap().dyn_into().unwrap();
        input.set_id("dom-utils-test-input");
        input.set_value("alice");
        document.body().unwrap().append_child(&input).unwrap();

        assert_eq!(input_value(&document, "dom-utils-test-input").unwrap(), "alice");
        clear_inputs(&document, &["dom-utils-test-input"]);
        assert_eq!(input_value(&document, "dom-utils-test-input").unwrap(), "");
        assert!(html_input(&document, "missing-input").is_err());
    }
}
