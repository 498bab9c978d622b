//! Login and registration dialogs.
//!
//! Both forms validate locally before anything is sent; a failed check is
//! reported through [`Message::ValidationFailed`] so the toast comes from the
//! same place as every other notification.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use super::modal;
use crate::dom_utils;
use crate::messages::Message;
use crate::state::dispatch_global_message;
use crate::validation::{validate_credentials, validate_registration};
use crate::views::Overlay;

const LOGIN_USERNAME: &str = "login-username";
const LOGIN_PASSWORD: &str = "login-password";
const REGISTER_USERNAME: &str = "register-username";
const REGISTER_PASSWORD: &str = "register-password";
const REGISTER_CONFIRM: &str = "register-confirm-password";

pub fn mount(document: &Document, parent: &Element) -> Result<(), JsValue> {
    mount_login(document, parent)?;
    mount_register(document, parent)?;
    Ok(())
}

fn mount_login(document: &Document, parent: &Element) -> Result<(), JsValue> {
    let (_, content) = modal::ensure_modal(document, parent, Overlay::Login, "Login")?;
    if content.query_selector("form")?.is_some() {
        return Ok(());
    }

    let form = document.create_element("form")?;
    form.set_id("login-form");
    modal::append_field(document, &form, LOGIN_USERNAME, "Username", "text")?;
    modal::append_field(document, &form, LOGIN_PASSWORD, "Password", "password")?;
    modal::append_submit(document, &form, "login-submit", "Login")?;

    let switch = switch_link(document, "No account yet? Register", Overlay::Register)?;
    form.append_child(&switch)?;
    content.append_child(&form)?;

    let doc = document.clone();
    let on_submit = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        let username = dom_utils::input_value(&doc, LOGIN_USERNAME).unwrap_or_default();
        let password = dom_utils::input_value(&doc, LOGIN_PASSWORD).unwrap_or_default();
        match validate_credentials(&username, &password) {
            Ok(()) => dispatch_global_message(Message::LoginRequested { username, password }),
            Err(err) => dispatch_global_message(Message::ValidationFailed(err)),
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(())
}

fn mount_register(document: &Document, parent: &Element) -> Result<(), JsValue> {
    let (_, content) = modal::ensure_modal(document, parent, Overlay::Register, "Register")?;
    if content.query_selector("form")?.is_some() {
        return Ok(());
    }

    let form = document.create_element("form")?;
    form.set_id("register-form");
    modal::append_field(document, &form, REGISTER_USERNAME, "Username", "text")?;
    modal::append_field(document, &form, REGISTER_PASSWORD, "Password", "password")?;
    modal::append_field(document, &form, REGISTER_CONFIRM, "Confirm password", "password")?;
    modal::append_submit(document, &form, "register-submit", "Register")?;

    let switch = switch_link(document, "Already registered? Login", Overlay::Login)?;
    form.append_child(&switch)?;
    content.append_child(&form)?;

    let doc = document.clone();
    let on_submit = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        let username = dom_utils::input_value(&doc, REGISTER_USERNAME).unwrap_or_default();
        let password = dom_utils::input_value(&doc, REGISTER_PASSWORD).unwrap_or_default();
        let confirm = dom_utils::input_value(&doc, REGISTER_CONFIRM).unwrap_or_default();
        match validate_registration(&username, &password, &confirm) {
            Ok(()) => dispatch_global_message(Message::RegisterRequested { username, password }),
            Err(err) => dispatch_global_message(Message::ValidationFailed(err)),
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(())
}

/// Empty the login form once the server has accepted it.
pub fn reset_login(document: &Document) {
    dom_utils::clear_inputs(document, &[LOGIN_USERNAME, LOGIN_PASSWORD]);
}

/// Empty the register form once the account exists.
pub fn reset_register(document: &Document) {
    dom_utils::clear_inputs(document, &[REGISTER_USERNAME, REGISTER_PASSWORD, REGISTER_CONFIRM]);
}

/// "Switch to the other dialog" link shown under each form.
fn switch_link(document: &Document, text: &str, target: Overlay) -> Result<Element, JsValue> {
    let link = document.create_element("a")?;
    link.set_class_name("modal-switch");
    link.set_attribute("href", "#")?;
    link.set_text_content(Some(text));

    let cb = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        dispatch_global_message(Message::OpenOverlay(target));
    }) as Box<dyn FnMut(_)>);
    link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();

    Ok(link)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fill(document: &Document, id: &str, value: &str) {
        dom_utils::html_input(document, id).unwrap().set_value(value);
    }

    #[wasm_bindgen_test]
    fn register_form_is_kept_until_reset() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body: Element = document.body().unwrap().into();
        mount(&document, &body).unwrap();

        fill(&document, REGISTER_USERNAME, "alice");
        fill(&document, REGISTER_PASSWORD, "secret1");
        fill(&document, REGISTER_CONFIRM, "secret1");
        fill(&document, LOGIN_USERNAME, "bob");

        reset_register(&document);
        for id in [REGISTER_USERNAME, REGISTER_PASSWORD, REGISTER_CONFIRM] {
            assert_eq!(dom_utils::input_value(&document, id).unwrap(), "");
        }
        assert_eq!(dom_utils::input_value(&document, LOGIN_USERNAME).unwrap(), "bob");

        crate::components::reset_form(&document, Overlay::Login);
        assert_eq!(dom_utils::input_value(&document, LOGIN_USERNAME).unwrap(), "");
    }
}
