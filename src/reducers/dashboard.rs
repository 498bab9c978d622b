//! Dashboard domain reducer: database list refresh, upload and create.

use crate::constants::{
    CREATE_FAILED, CREATE_SUCCEEDED, LOAD_DATABASES_FAILED, LOAD_DATABASES_NETWORK_ERROR,
    LOGIN_REQUIRED, UPLOAD_FAILED, UPLOAD_SUCCEEDED,
};
use crate::messages::{Command, Message};
use crate::state::AppState;
use crate::views::Overlay;

/// Queue a list refresh if signed in, otherwise tell the user to log in.
fn fetch_databases(state: &mut AppState, commands: &mut Vec<Command>) {
    match state.session.token() {
        Some(token) => {
            let token = token.to_string();
            state.is_loading = true;
            commands.push(Command::FetchDatabases { token, epoch: state.epoch });
        }
        None => commands.push(Command::error_toast(LOGIN_REQUIRED)),
    }
}

/// Outcomes of requests sent by an earlier session are consumed silently.
fn stale(state: &AppState, epoch: u64, what: &str) -> bool {
    if state.is_current_epoch(epoch) {
        return false;
    }
    debug_log!("Dropping {} from session epoch {} (now {})", what, epoch, state.epoch);
    true
}

/// Handles dashboard-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::RefreshDatabases => {
            fetch_databases(state, commands);
            commands.push(Command::Render);
            true
        }
        Message::DatabasesLoaded { epoch, list } => {
            if stale(state, *epoch, "database list") {
                return true;
            }
            debug_log!(
                "Loaded {} uploaded / {} created databases",
                list.uploaded.len(),
                list.created.len()
            );
            state.databases = list.clone();
            state.databases_loaded = true;
            state.is_loading = false;
            commands.push(Command::Render);
            true
        }
        Message::DatabasesFailed { epoch, error } => {
            if stale(state, *epoch, "database list failure") {
                return true;
            }
            state.is_loading = false;
            let text = if error.is_network() {
                LOAD_DATABASES_NETWORK_ERROR.to_string()
            } else {
                error.user_message(LOAD_DATABASES_FAILED)
            };
            commands.push(Command::error_toast(text));
            commands.push(Command::Render);
            true
        }
        Message::UploadRequested(file) => {
            match state.session.token() {
                Some(token) => commands.push(Command::UploadDatabase {
                    token: token.to_string(),
                    epoch: state.epoch,
                    file: file.clone(),
                }),
                None => commands.push(Command::error_toast(LOGIN_REQUIRED)),
            }
            true
        }
        Message::UploadSucceeded { epoch } => {
            if stale(state, *epoch, "upload result") {
                return true;
            }
            commands.push(Command::success_toast(UPLOAD_SUCCEEDED));
            commands.push(Command::ResetForm(Overlay::Upload));
            state.nav.close_overlay(Overlay::Upload);
            fetch_databases(state, commands);
            commands.push(Command::Render);
            true
        }
        Message::UploadFailed { epoch, error } => {
            if !stale(state, *epoch, "upload failure") {
                commands.push(Command::error_toast(error.user_message(UPLOAD_FAILED)));
            }
            true
        }
        Message::CreateRequested(name) => {
            match state.session.token() {
                Some(token) => commands.push(Command::CreateDatabase {
                    token: token.to_string(),
                    epoch: state.epoch,
                    name: name.trim().to_string(),
                }),
                None => commands.push(Command::error_toast(LOGIN_REQUIRED)),
            }
            true
        }
        Message::CreateSucceeded { epoch } => {
            if stale(state, *epoch, "create result") {
                return true;
            }
            commands.push(Command::success_toast(CREATE_SUCCEEDED));
            commands.push(Command::ResetForm(Overlay::Create));
            state.nav.close_overlay(Overlay::Create);
            fetch_databases(state, commands);
            commands.push(Command::Render);
            true
        }
        Message::CreateFailed { epoch, error } => {
            if !stale(state, *epoch, "create failure") {
                commands.push(Command::error_toast(error.user_message(CREATE_FAILED)));
            }
            true
        }
        _ => false,
    }
}


// `web_sys::File` only exists inside a JS runtime.
#[cfg(all(test, target_arch = "wasm32"))]
mod upload_request_tests {
    use super::*;
    use crate::toast::ToastKind;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn file(name: &str) -> web_sys::File {
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str("SQLite format 3"));
        web_sys::File::new_with_str_sequence(&parts, name).unwrap()
    }

    #[wasm_bindgen_test]
    fn upload_request_sends_file_with_token() {
        let mut state = AppState::new();
        state.sign_in("T".into(), "alice".into());
        let mut cmds = Vec::new();
        assert!(update(&mut state, &Message::UploadRequested(file("sales.db")), &mut cmds));
        assert!(cmds.iter().any(|c| matches!(
            c,
            Command::UploadDatabase { token, epoch, file } if token == "T" && *epoch == state.epoch && file.name() == "sales.db"
        )));
    }

    #[wasm_bindgen_test]
    fn upload_request_without_login_is_refused() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        update(&mut state, &Message::UploadRequested(file("sales.db")), &mut cmds);
        assert!(!cmds.iter().any(|c| matches!(c, Command::UploadDatabase { .. })));
        assert!(cmds.iter().any(|c| matches!(
            c,
            Command::Toast { kind: ToastKind::Error, text } if text == LOGIN_REQUIRED
        )));
    }
}
