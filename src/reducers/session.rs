//! Session domain reducer: dialogs, login, registration, logout.

use crate::constants::{LOGIN_FAILED, REGISTRATION_FAILED, REGISTRATION_SUCCEEDED};
use crate::messages::{Command, Message};
use crate::state::AppState;
use crate::views::{Overlay, View};

/// Handles session-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::OpenOverlay(overlay) => {
            state.nav.open_overlay(*overlay);
            commands.push(Command::Render);
            true
        }
        Message::CloseOverlay(overlay) => {
            state.nav.close_overlay(*overlay);
            commands.push(Command::Render);
            true
        }
        Message::LoginRequested { username, password } => {
            debug_log!("Login requested for {}", username);
            commands.push(Command::Login {
                username: username.clone(),
                password: password.clone(),
            });
            true
        }
        Message::LoginSucceeded { token, user } => {
            state.sign_in(token.clone(), user.clone());
            state.nav.show_view(View::Dashboard);
            state.is_loading = true;
            commands.push(Command::FetchDatabases { token: token.clone(), epoch: state.epoch });
            commands.push(Command::ResetForm(Overlay::Login));
            commands.push(Command::Render);
            true
        }
        Message::LoginFailed(err) => {
            // Session untouched; the login dialog stays open for another try.
            commands.push(Command::error_toast(err.user_message(LOGIN_FAILED)));
            true
        }
        Message::RegisterRequested { username, password } => {
            commands.push(Command::Register {
                username: username.clone(),
                password: password.clone(),
            });
            true
        }
        Message::RegisterSucceeded => {
            commands.push(Command::success_toast(REGISTRATION_SUCCEEDED));
            commands.push(Command::ResetForm(Overlay::Register));
            state.nav.close_overlay(Overlay::Register);
            state.nav.open_overlay(Overlay::Login);
            commands.push(Command::Render);
            true
        }
        Message::RegisterFailed(err) => {
            commands.push(Command::error_toast(err.user_message(REGISTRATION_FAILED)));
            true
        }
        Message::ValidationFailed(err) => {
            commands.push(Command::error_toast(err.to_string()));
            true
        }
        Message::Logout => {
            debug_log!("Logging out {:?}", state.session.user());
            state.reset_session();
            state.nav.show_view(View::Landing);
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}
