// src/messages.rs
//
// The events that can occur in the UI, and the side effects reducers ask for.
//
use crate::error::GatewayError;
use crate::models::{DatabaseKind, DatabaseList, QueryResponse};
use crate::toast::ToastKind;
use crate::transcript::ChatMessage;
use crate::views::Overlay;

#[derive(Debug, Clone)]
pub enum Message {
    // Dialogs
    OpenOverlay(Overlay),
    CloseOverlay(Overlay),

    // Authentication
    LoginRequested { username: String, password: String },
    LoginSucceeded { token: String, user: String },
    LoginFailed(GatewayError),
    RegisterRequested { username: String, password: String },
    RegisterSucceeded,
    RegisterFailed(GatewayError),
    Logout,

    /// A form check failed before anything was sent.
    ValidationFailed(GatewayError),

    // Database list
    // Outcomes carry the session epoch their request was sent under; see
    // `AppState::epoch`.
    RefreshDatabases,
    DatabasesLoaded { epoch: u64, list: DatabaseList },
    DatabasesFailed { epoch: u64, error: GatewayError },
    UploadRequested(web_sys::File),
    UploadSucceeded { epoch: u64 },
    UploadFailed { epoch: u64, error: GatewayError },
    CreateRequested(String),
    CreateSucceeded { epoch: u64 },
    CreateFailed { epoch: u64, error: GatewayError },

    // Chat
    OpenDatabase { name: String, kind: DatabaseKind },
    LeaveToList,
    AppendMessage(ChatMessage),
    SubmitQuestion(String),
    QueryCompleted { database: String, seq: u64, response: QueryResponse },
    QueryFailed { database: String, seq: u64, error: GatewayError },
}

/// Commands represent side effects that should be executed after state updates.
/// This separates pure state changes from effects like DOM updates and API calls.
pub enum Command {
    /// Chain another message to be processed
    SendMessage(Message),

    /// Re-render pages, dialogs, lists and the chat from current state
    Render,

    /// Transient notification
    Toast { kind: ToastKind, text: String },

    /// Empty the fields of a dialog's form
    ResetForm(Overlay),

    Login { username: String, password: String },
    Register { username: String, password: String },
    FetchDatabases { token: String, epoch: u64 },
    UploadDatabase { token: String, epoch: u64, file: web_sys::File },
    CreateDatabase { token: String, epoch: u64, name: String },
    SubmitQuery { token: String, database: String, question: String, seq: u64 },
}

impl Command {
    /// Helper to create a SendMessage command
    pub fn send(msg: Message) -> Self {
        Command::SendMessage(msg)
    }

    pub fn error_toast(text: impl Into<String>) -> Self {
        Command::Toast { kind: ToastKind::Error, text: text.into() }
    }

    pub fn success_toast(text: impl Into<String>) -> Self {
        Command::Toast { kind: ToastKind::Success, text: text.into() }
    }

    /// Short name for logging.  Login and Register carry a password, so
    /// commands are never `Debug`-printed whole.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SendMessage(_) => "SendMessage",
            Command::Render => "Render",
            Command::Toast { .. } => "Toast",
            Command::ResetForm(_) => "ResetForm",
            Command::Login { .. } => "Login",
            Command::Register { .. } => "Register",
            Command::FetchDatabases { .. } => "FetchDatabases",
            Command::UploadDatabase { .. } => "UploadDatabase",
            Command::CreateDatabase { .. } => "CreateDatabase",
            Command::SubmitQuery { .. } => "SubmitQuery",
        }
    }
}
