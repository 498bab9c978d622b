// src/views.rs
//
// Top-level pages, overlay dialogs, and the functions that make the DOM match
// the current navigation state.
//
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils::{hide, show};

/// Exactly one of these is visible at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Landing,
    Dashboard,
    Chat,
}

impl View {
    pub const ALL: [View; 3] = [View::Landing, View::Dashboard, View::Chat];

    pub fn element_id(&self) -> &'static str {
        match self {
            View::Landing => "landing-page",
            View::Dashboard => "dashboard-page",
            View::Chat => "chat-page",
        }
    }
}

/// Dialogs layered over the current view.  At most one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    Login,
    Register,
    Upload,
    Create,
}

impl Overlay {
    pub const ALL: [Overlay; 4] = [Overlay::Login, Overlay::Register, Overlay::Upload, Overlay::Create];

    pub fn element_id(&self) -> &'static str {
        match self {
            Overlay::Login => "login-modal",
            Overlay::Register => "register-modal",
            Overlay::Upload => "upload-modal",
            Overlay::Create => "create-modal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    view: View,
    overlay: Option<Overlay>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self { view: View::Landing, overlay: None }
    }
}

impl Navigation {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// Switch page.  Any open dialog belongs to the old page and is closed.
    pub fn show_view(&mut self, view: View) {
        self.view = view;
        self.overlay = None;
    }

    /// Open a dialog, replacing whichever one was open.
    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }

    /// Close `overlay` if it is the open one.
    pub fn close_overlay(&mut self, overlay: Overlay) {
        if self.overlay == Some(overlay) {
            self.overlay = None;
        }
    }
}

// ---------------------------------------------------------------------------
// DOM side
// ---------------------------------------------------------------------------

/// Show the active page, hide the others, and sync dialog visibility.
pub fn render_navigation(document: &Document, nav: &Navigation) -> Result<(), JsValue> {
    for view in View::ALL {
        if let Some(el) = document.get_element_by_id(view.element_id()) {
            if view == nav.view() {
                show(&el);
            } else {
                hide(&el);
            }
        }
    }

    for overlay in Overlay::ALL {
        if let Some(el) = document.get_element_by_id(overlay.element_id()) {
            if Some(overlay) == nav.overlay() {
                crate::components::modal::show(&el);
            } else {
                crate::components::modal::hide(&el);
            }
        }
    }

    Ok(())
}
