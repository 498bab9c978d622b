//! End-to-end walks through the update loop: sign in, pick databases, ask
//! questions, receive (possibly late) answers, sign out.
//!
//! Run with: cargo test --test chat_flow

use nl2sql_frontend::error::GatewayError;
use nl2sql_frontend::messages::{Command, Message};
use nl2sql_frontend::models::{DatabaseKind, DatabaseList, QueryResponse};
use nl2sql_frontend::state::AppState;
use nl2sql_frontend::transcript::{MessageBody, Sender};
use nl2sql_frontend::views::{Overlay, View};

fn signed_in() -> AppState {
    let mut state = AppState::new();
    state.dispatch(Message::OpenOverlay(Overlay::Login));
    state.dispatch(Message::LoginSucceeded { token: "tok".into(), user: "alice".into() });
    state
}

fn ask(state: &mut AppState, question: &str) -> (String, u64) {
    let cmds = state.dispatch(Message::SubmitQuestion(question.into()));
    cmds.into_iter()
        .find_map(|c| match c {
            Command::SubmitQuery { database, seq, token, .. } => {
                assert_eq!(token, "tok");
                Some((database, seq))
            }
            _ => None,
        })
        .expect("question was not sent")
}

fn answer(sql: &str, rows: serde_json::Value) -> QueryResponse {
    serde_json::from_value(serde_json::json!({ "sql": sql, "results": rows })).unwrap()
}

fn bodies(state: &AppState, db: &str) -> Vec<MessageBody> {
    state
        .transcripts
        .get(db)
        .map(|t| t.messages().iter().map(|m| m.body.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn question_and_answer_round_trip() {
    let mut state = signed_in();
    assert_eq!(state.nav.view(), View::Dashboard);
    assert_eq!(state.nav.overlay(), None);

    let epoch = state.epoch;
    let list: DatabaseList = serde_json::from_value(serde_json::json!({
        "uploaded": [{"name": "sales.db", "size": 4096, "modified": 1700000000.0}],
        "created": []
    }))
    .unwrap();
    state.dispatch(Message::DatabasesLoaded { epoch, list });
    assert_eq!(state.databases.uploaded.len(), 1);

    state.dispatch(Message::OpenDatabase { name: "sales.db".into(), kind: DatabaseKind::Uploaded });
    assert_eq!(state.nav.view(), View::Chat);
    assert!(state.transcripts.current().unwrap().is_fresh());

    let (db, seq) = ask(&mut state, "  how many orders?  ");
    assert_eq!(db, "sales.db");
    assert!(state.active_query_pending());

    state.dispatch(Message::QueryCompleted {
        database: db.clone(),
        seq,
        response: answer("SELECT COUNT(*) AS n FROM orders", serde_json::json!([{"n": 42}])),
    });
    assert!(!state.active_query_pending());

    let transcript = state.transcripts.current().unwrap();
    let senders: Vec<Sender> = transcript.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::Assistant, Sender::User, Sender::Assistant, Sender::Assistant]);

    let b = bodies(&state, "sales.db");
    assert_eq!(b[1], MessageBody::Text("how many orders?".into()));
    assert_eq!(b[2], MessageBody::Sql { sql: "SELECT COUNT(*) AS n FROM orders".into() });
    match &b[3] {
        MessageBody::Table(table) => {
            assert_eq!(table.columns, vec!["n".to_string()]);
            assert_eq!(table.rows, vec![vec!["42".to_string()]]);
        }
        other => panic!("expected a table, got {:?}", other),
    }
}

#[test]
fn late_answer_lands_in_its_own_transcript() {
    let mut state = signed_in();
    state.dispatch(Message::OpenDatabase { name: "a.db".into(), kind: DatabaseKind::Uploaded });
    let (db_a, seq_a) = ask(&mut state, "q for a");

    state.dispatch(Message::OpenDatabase { name: "b.db".into(), kind: DatabaseKind::Created });
    let before_b = bodies(&state, "b.db");

    state.dispatch(Message::QueryCompleted {
        database: db_a,
        seq: seq_a,
        response: answer("SELECT 1", serde_json::json!([])),
    });

    assert_eq!(bodies(&state, "b.db"), before_b);
    let a = bodies(&state, "a.db");
    assert_eq!(a.last(), Some(&MessageBody::NoResults));

    // Going back to A shows the answer.
    state.dispatch(Message::OpenDatabase { name: "a.db".into(), kind: DatabaseKind::Uploaded });
    assert_eq!(state.transcripts.current().unwrap().len(), a.len());
}

#[test]
fn older_answer_after_newer_one_is_dropped() {
    let mut state = signed_in();
    state.dispatch(Message::OpenDatabase { name: "a.db".into(), kind: DatabaseKind::Uploaded });
    let (_, first) = ask(&mut state, "first");
    let (_, second) = ask(&mut state, "second");

    state.dispatch(Message::QueryCompleted {
        database: "a.db".into(),
        seq: second,
        response: answer("SELECT 2", serde_json::json!([])),
    });
    let len = state.transcripts.current().unwrap().len();

    state.dispatch(Message::QueryFailed {
        database: "a.db".into(),
        seq: first,
        error: GatewayError::Network("timeout".into()),
    });
    assert_eq!(state.transcripts.current().unwrap().len(), len);
}

#[test]
fn failure_is_shown_as_error_bubble() {
    let mut state = signed_in();
    state.dispatch(Message::OpenDatabase { name: "a.db".into(), kind: DatabaseKind::Uploaded });
    let (db, seq) = ask(&mut state, "drop everything");

    state.dispatch(Message::QueryFailed {
        database: db,
        seq,
        error: GatewayError::Server { status: 400, message: Some("Only SELECT queries are allowed".into()) },
    });

    assert_eq!(
        bodies(&state, "a.db").last(),
        Some(&MessageBody::Error { detail: "Only SELECT queries are allowed".into() })
    );
}

#[test]
fn logout_forgets_everything_and_ignores_stragglers() {
    let mut state = signed_in();
    let epoch = state.epoch;
    state.dispatch(Message::DatabasesLoaded { epoch, list: DatabaseList::default() });
    state.dispatch(Message::OpenDatabase { name: "a.db".into(), kind: DatabaseKind::Uploaded });
    let (db, seq) = ask(&mut state, "q");

    state.dispatch(Message::Logout);
    assert_eq!(state.nav.view(), View::Landing);
    assert!(!state.session.is_authenticated());
    assert!(state.transcripts.is_empty());
    assert!(state.transcripts.active().is_none());

    state.dispatch(Message::QueryCompleted { database: db, seq, response: answer("SELECT 1", serde_json::json!([])) });
    assert!(state.transcripts.is_empty());

    // A new session starts from a clean greeting.
    state.dispatch(Message::LoginSucceeded { token: "tok".into(), user: "bob".into() });
    state.dispatch(Message::OpenDatabase { name: "a.db".into(), kind: DatabaseKind::Uploaded });
    assert!(state.transcripts.current().unwrap().is_fresh());
}

#[test]
fn dashboard_outcomes_from_a_previous_session_are_ignored() {
    let mut state = signed_in();
    let alice = state.epoch;

    state.dispatch(Message::Logout);
    state.dispatch(Message::LoginSucceeded { token: "tok2".into(), user: "bob".into() });

    let list: DatabaseList = serde_json::from_value(serde_json::json!({
        "uploaded": [{"name": "alice_private.db", "size": 1, "modified": 0.0}],
        "created": []
    }))
    .unwrap();
    let cmds = state.dispatch(Message::DatabasesLoaded { epoch: alice, list });
    assert!(cmds.is_empty());
    assert!(state.databases.uploaded.is_empty());

    let cmds = state.dispatch(Message::UploadSucceeded { epoch: alice });
    assert!(cmds.is_empty());
}

#[test]
fn signed_out_user_cannot_query() {
    let mut state = AppState::new();
    state.dispatch(Message::OpenDatabase { name: "a.db".into(), kind: DatabaseKind::Uploaded });
    let cmds = state.dispatch(Message::SubmitQuestion("hello".into()));
    assert!(!cmds.iter().any(|c| matches!(c, Command::SubmitQuery { .. })));
    assert!(cmds
        .iter()
        .any(|c| matches!(c, Command::Toast { text, .. } if text == "Please login first")));
}
