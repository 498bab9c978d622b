//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and prepends toast divs
//! that remove themselves after a few seconds.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

pub fn show(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Err(e) = try_show(&document, message, kind) {
        crate::error_log!("Failed to show toast {:?}: {:?}", message, e);
    }
}

fn try_show(document: &Document, message: &str, kind: ToastKind) -> Result<(), JsValue> {
    ensure_styles(document)?;
    let root = ensure_root(document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name("toast");
    toast.class_list().add_1(kind.class())?;
    // Text content only: messages often carry server-supplied detail.
    toast.set_text_content(Some(message));

    // Prepend so newest appears on top.
    root.prepend_with_node_1(&toast)?;

    Timeout::new(TOAST_DURATION_MS, move || toast.remove()).forget();
    Ok(())
}

fn ensure_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id("toast-root") {
        return Ok(el);
    }
    let root = document.create_element("div")?;
    root.set_id("toast-root");
    root.set_class_name("toast-root");
    document
        .body()
        .ok_or_else(|| JsValue::from_str("No body found"))?
        .append_child(&root)?;
    Ok(root)
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("toast-styles").is_some() {
        return Ok(());
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:Arial,Helvetica,sans-serif}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#16a34a}
.toast-error{background:#dc2626}
@keyframes toast-in{to{opacity:1}}
";

    let style = document.create_element("style")?;
    style.set_id("toast-styles");
    style.set_text_content(Some(css));
    match document.query_selector("head")? {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("No body found"))?
            .append_child(&style)?,
    };
    Ok(())
}
