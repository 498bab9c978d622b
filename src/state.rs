use std::cell::RefCell;

use crate::messages::{Command, Message};
use crate::models::DatabaseList;
use crate::query_tracker::QueryTracker;
use crate::session::Session;
use crate::transcript::TranscriptCache;
use crate::update;
use crate::views::Navigation;

// Store global application state
#[derive(Default)]
pub struct AppState {
    pub session: Session,
    pub nav: Navigation,
    // Per-database transcripts plus the active-database pointer
    pub transcripts: TranscriptCache,
    pub queries: QueryTracker,
    // Dashboard lists as last returned by the backend
    pub databases: DatabaseList,
    pub databases_loaded: bool,
    pub is_loading: bool,
    // Bumped on every sign-in and sign-out.  Dashboard requests carry the
    // value they were sent under, and outcomes from another epoch are dropped.
    pub epoch: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a message and return the side effects it requested.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update::update(self, msg)
    }

    /// Start a new signed-in session.
    pub fn sign_in(&mut self, token: String, user: String) {
        self.epoch += 1;
        self.session.sign_in(token, user);
    }

    /// True when an outcome sent under `epoch` still belongs to this session.
    pub fn is_current_epoch(&self, epoch: u64) -> bool {
        self.epoch == epoch && self.session.is_authenticated()
    }

    /// Back to a freshly loaded, signed-out page.
    pub fn reset_session(&mut self) {
        self.epoch += 1;
        self.session.sign_out();
        self.transcripts.clear();
        self.queries.clear();
        self.databases = DatabaseList::default();
        self.databases_loaded = false;
        self.is_loading = false;
    }

    /// True while a query for the active database is outstanding.
    pub fn active_query_pending(&self) -> bool {
        self.transcripts
            .active()
            .is_some_and(|db| self.queries.is_pending(&db.name))
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

// Global helper function for dispatching messages.  The state borrow is
// released before any command runs so executors and renderers can borrow
// again.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    for cmd in commands {
        match cmd {
            Command::SendMessage(msg) => dispatch_global_message(msg),
            cmd @ (Command::Render | Command::Toast { .. } | Command::ResetForm(_)) => {
                crate::command_executors::execute_ui_command(cmd)
            }
            cmd => crate::command_executors::execute_network_command(cmd),
        }
    }
}
