use crate::messages::{Command, Message};
use crate::network::api_client::ApiClient;
use crate::state::{dispatch_global_message, APP_STATE};

/// Run a backend request in the background and feed the outcome back into
/// the update loop.  No state borrow is held across an `.await`.
pub fn execute_network_command(cmd: Command) {
    match cmd {
        Command::Login { username, password } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::login(&username, &password).await {
                    Ok(token) => dispatch_global_message(Message::LoginSucceeded { token, user: username }),
                    Err(e) => dispatch_global_message(Message::LoginFailed(e)),
                }
            });
        }
        Command::Register { username, password } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::register(&username, &password).await {
                    Ok(()) => dispatch_global_message(Message::RegisterSucceeded),
                    Err(e) => dispatch_global_message(Message::RegisterFailed(e)),
                }
            });
        }
        Command::FetchDatabases { token, epoch } => {
            debug_log!("Executing FetchDatabases command (epoch {})", epoch);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::list_databases(&token).await {
                    Ok(list) => dispatch_global_message(Message::DatabasesLoaded { epoch, list }),
                    Err(error) => dispatch_global_message(Message::DatabasesFailed { epoch, error }),
                }
            });
        }
        Command::UploadDatabase { token, epoch, file } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::upload_database(&token, &file).await {
                    Ok(()) => dispatch_global_message(Message::UploadSucceeded { epoch }),
                    Err(error) => dispatch_global_message(Message::UploadFailed { epoch, error }),
                }
            });
        }
        Command::CreateDatabase { token, epoch, name } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::create_database(&token, &name).await {
                    Ok(()) => dispatch_global_message(Message::CreateSucceeded { epoch }),
                    Err(error) => dispatch_global_message(Message::CreateFailed { epoch, error }),
                }
            });
        }
        Command::SubmitQuery { token, database, question, seq } => {
            debug_log!("Submitting query #{} against {}", seq, database);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::submit_query(&token, &question, &database).await {
                    Ok(response) => {
                        dispatch_global_message(Message::QueryCompleted { database, seq, response })
                    }
                    Err(error) => dispatch_global_message(Message::QueryFailed { database, seq, error }),
                }
            });
        }
        other => {
            crate::error_log!("Not a network command: {}", other.name());
        }
    }
}

/// DOM-side effects: re-rendering, notifications and form resets.
pub fn execute_ui_command(cmd: Command) {
    match cmd {
        Command::Render => render_current_state(),
        Command::Toast { kind, text } => crate::toast::show(&text, kind),
        Command::ResetForm(overlay) => {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                crate::components::reset_form(&document, overlay);
            }
        }
        other => {
            crate::error_log!("Not a UI command: {}", other.name());
        }
    }
}

/// Make the whole page reflect `APP_STATE`.
pub fn render_current_state() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let result = APP_STATE.with(|state| crate::ui::render(&document, &state.borrow()));
    if let Err(e) = result {
        crate::error_log!("Failed to render UI: {:?}", e);
    }
}
