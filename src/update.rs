// src/update.rs
//
use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    // Delegate to domain-specific reducers; the first one that consumes the
    // message wins.
    if crate::reducers::session::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::dashboard::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::chat::update(state, &msg, &mut commands) {
        return commands;
    }

    crate::error_log!("Unhandled message: {:?}", msg);
    commands
}
