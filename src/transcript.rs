//! Per-database chat transcripts.
//!
//! The cache is the single home of every transcript, including the one on
//! screen: opening a database creates its entry immediately, and every append
//! lands directly in the entry.  Switching databases therefore never loses
//! conversation context, and the chat view can always render
//! `cache[active]`.

use std::collections::HashMap;

use uuid::Uuid;

use crate::constants::GREETING_MESSAGE;
use crate::error::TranscriptError;
use crate::models::{ActiveDatabase, DatabaseKind};
use crate::render::{render_body, ResultTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "message user-message",
            Sender::Assistant => "message bot-message",
        }
    }
}

/// Structured message content; turned into markup only at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Sql { sql: String },
    Table(ResultTable),
    NoResults,
    Error { detail: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub body: MessageBody,
}

impl ChatMessage {
    pub fn new(sender: Sender, body: MessageBody) -> Self {
        Self { id: Uuid::new_v4(), sender, body }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, MessageBody::Text(text.into()))
    }

    pub fn assistant(body: MessageBody) -> Self {
        Self::new(Sender::Assistant, body)
    }

    /// Escaped inner HTML of the message bubble.
    pub fn rendered(&self) -> String {
        render_body(&self.body)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Fresh transcript holding only the assistant's greeting.
    pub fn greeting() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(MessageBody::Text(GREETING_MESSAGE.to_string()))],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True when nothing but the greeting has been said yet.
    pub fn is_fresh(&self) -> bool {
        matches!(
            self.messages.as_slice(),
            [only] if only.sender == Sender::Assistant
                && only.body == MessageBody::Text(GREETING_MESSAGE.to_string())
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct TranscriptCache {
    entries: HashMap<String, Transcript>,
    active: Option<ActiveDatabase>,
}

impl TranscriptCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&ActiveDatabase> {
        self.active.as_ref()
    }

    /// Make `name` the active database and return its transcript, creating
    /// the greeting entry on first open.
    pub fn open(&mut self, name: &str, kind: DatabaseKind) -> &Transcript {
        self.active = Some(ActiveDatabase { name: name.to_string(), kind });
        self.entries.entry(name.to_string()).or_insert_with(Transcript::greeting)
    }

    /// Append to the active database's transcript.
    pub fn append(&mut self, message: ChatMessage) -> Result<&Transcript, TranscriptError> {
        let name = self
            .active
            .as_ref()
            .map(|db| db.name.clone())
            .ok_or(TranscriptError::NoActiveDatabase)?;
        Ok(self.append_to(&name, message))
    }

    /// Append to a named database's transcript, active or not.  Used for
    /// query responses that arrive after the user moved on.
    pub fn append_to(&mut self, name: &str, message: ChatMessage) -> &Transcript {
        let transcript = self.entries.entry(name.to_string()).or_insert_with(Transcript::greeting);
        transcript.push(message);
        transcript
    }

    /// Stop targeting the active database.  Its transcript stays cached.
    pub fn leave(&mut self) -> Option<ActiveDatabase> {
        self.active.take()
    }

    /// Transcript of the active database.
    pub fn current(&self) -> Option<&Transcript> {
        self.active.as_ref().and_then(|db| self.entries.get(&db.name))
    }

    pub fn get(&self, name: &str) -> Option<&Transcript> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every transcript and the active database.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_open_caches_greeting() {
        let mut cache = TranscriptCache::new();
        let shown = cache.open("sales.db", DatabaseKind::Uploaded).clone();

        assert!(shown.is_fresh());
        assert_eq!(shown.len(), 1);
        assert_eq!(cache.get("sales.db"), Some(&shown));
        assert_eq!(cache.active().map(|db| db.kind), Some(DatabaseKind::Uploaded));
    }

    #[test]
    fn switching_back_restores_transcript() {
        let mut cache = TranscriptCache::new();
        cache.open("a.db", DatabaseKind::Uploaded);
        cache.append(ChatMessage::user("how many rows?")).unwrap();
        let before = cache.current().cloned().unwrap();

        cache.open("b.db", DatabaseKind::Created);
        cache.append(ChatMessage::user("other question")).unwrap();
        let restored = cache.open("a.db", DatabaseKind::Uploaded).clone();

        assert_eq!(restored, before);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn append_without_active_database_is_a_noop() {
        let mut cache = TranscriptCache::new();
        assert_eq!(
            cache.append(ChatMessage::user("hi")).unwrap_err(),
            TranscriptError::NoActiveDatabase
        );
        assert!(cache.is_empty());

        cache.open("a.db", DatabaseKind::Created);
        cache.leave();
        let snapshot = cache.get("a.db").cloned();
        assert!(cache.append(ChatMessage::user("late")).is_err());
        assert_eq!(cache.get("a.db").cloned(), snapshot);
    }

    #[test]
    fn leave_keeps_transcript_but_clears_pointer() {
        let mut cache = TranscriptCache::new();
        cache.open("a.db", DatabaseKind::Created);
        cache.append(ChatMessage::user("q")).unwrap();

        let left = cache.leave().unwrap();
        assert_eq!(left.name, "a.db");
        assert!(cache.active().is_none());
        assert!(cache.current().is_none());
        assert_eq!(cache.get("a.db").map(Transcript::len), Some(2));
    }

    #[test]
    fn append_to_routes_to_inactive_database() {
        let mut cache = TranscriptCache::new();
        cache.open("a.db", DatabaseKind::Uploaded);
        cache.open("b.db", DatabaseKind::Uploaded);

        cache.append_to("a.db", ChatMessage::assistant(MessageBody::NoResults));
        assert_eq!(cache.get("a.db").map(Transcript::len), Some(2));
        assert_eq!(cache.current().map(Transcript::len), Some(1));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut cache = TranscriptCache::new();
        cache.open("a.db", DatabaseKind::Uploaded);
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.active().is_none());
    }

    #[test]
    fn rendered_user_text_is_escaped() {
        let msg = ChatMessage::user("<b>hi</b>");
        assert_eq!(msg.rendered(), "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(msg.sender.css_class(), "message user-message");
    }
}
