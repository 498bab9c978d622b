//! Chat-view reducer: opening databases, transcripts, and query round trips.

use crate::constants::{LOGIN_REQUIRED, NO_DATABASE_SELECTED, QUERY_FAILED};
use crate::messages::{Command, Message};
use crate::models::QueryResponse;
use crate::render::ResultTable;
use crate::state::AppState;
use crate::transcript::{ChatMessage, MessageBody};
use crate::validation::validate_question;
use crate::views::View;

/// Assistant messages for a successful query: the SQL, then either the
/// result table or a single "no results" note.
pub fn query_response_messages(response: &QueryResponse) -> Vec<ChatMessage> {
    let mut out = vec![ChatMessage::assistant(MessageBody::Sql { sql: response.sql.clone() })];
    match ResultTable::from_rows(&response.results) {
        Some(table) => out.push(ChatMessage::assistant(MessageBody::Table(table))),
        None => out.push(ChatMessage::assistant(MessageBody::NoResults)),
    }
    out
}

/// Returns `true` when the message was handled by the chat reducer.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::OpenDatabase { name, kind } => {
            debug_log!("Opening chat for {} ({})", name, kind.as_str());
            state.transcripts.open(name, *kind);
            state.nav.show_view(View::Chat);
            commands.push(Command::Render);
            true
        }
        Message::LeaveToList => {
            // Clearing the pointer keeps a later query from silently going to
            // a database the user already left.
            state.transcripts.leave();
            state.nav.show_view(View::Dashboard);
            if state.session.is_authenticated() {
                commands.push(Command::send(Message::RefreshDatabases));
            }
            commands.push(Command::Render);
            true
        }
        Message::AppendMessage(message) => {
            match state.transcripts.append(message.clone()) {
                Ok(_) => commands.push(Command::Render),
                Err(e) => commands.push(Command::error_toast(e.to_string())),
            }
            true
        }
        Message::SubmitQuestion(question) => {
            let Some(database) = state.transcripts.active().map(|db| db.name.clone()) else {
                commands.push(Command::error_toast(NO_DATABASE_SELECTED));
                return true;
            };
            let Some(token) = state.session.token().map(str::to_string) else {
                commands.push(Command::error_toast(LOGIN_REQUIRED));
                return true;
            };
            if let Err(e) = validate_question(question) {
                commands.push(Command::error_toast(e.to_string()));
                return true;
            }

            let question = question.trim().to_string();
            state.transcripts.append_to(&database, ChatMessage::user(question.clone()));
            let seq = state.queries.issue(&database);
            commands.push(Command::SubmitQuery { token, database, question, seq });
            commands.push(Command::Render);
            true
        }
        Message::QueryCompleted { database, seq, response } => {
            if state.queries.complete(database, *seq) {
                for message in query_response_messages(response) {
                    state.transcripts.append_to(database, message);
                }
            } else {
                debug_log!("Discarding stale response #{} for {}", seq, database);
            }
            commands.push(Command::Render);
            true
        }
        Message::QueryFailed { database, seq, error } => {
            if state.queries.complete(database, *seq) {
                let detail = error.user_message(QUERY_FAILED);
                state
                    .transcripts
                    .append_to(database, ChatMessage::assistant(MessageBody::Error { detail }));
            } else {
                debug_log!("Discarding stale failure #{} for {}", seq, database);
            }
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}
