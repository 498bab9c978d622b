//! Domain reducers.
//!
//! Each domain (session, dashboard, chat) lives in its own module and returns
//! `true` when it consumed the message.  Reducers only touch `AppState` and
//! push `Command`s; network and DOM work happens in the executors.

pub mod chat;
pub mod dashboard;
pub mod session;
