pub mod auth_modals;
pub mod chat_view;
pub mod dashboard;
pub mod database_modals;
pub mod landing;
pub mod modal;

use web_sys::Document;

use crate::views::Overlay;

/// Empty the inputs of the dialog behind `overlay` after its request succeeded.
pub fn reset_form(document: &Document, overlay: Overlay) {
    match overlay {
        Overlay::Login => auth_modals::reset_login(document),
        Overlay::Register => auth_modals::reset_register(document),
        Overlay::Upload => database_modals::reset_upload(document),
        Overlay::Create => database_modals::reset_create(document),
    }
}
