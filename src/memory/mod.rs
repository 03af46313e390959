use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use crate::types::{ChatMessage, Message};

/// Default number of messages retained per session (10 exchanges).
pub const DEFAULT_MAX_MESSAGES: usize = 20;
/// Default message lifetime in seconds.
pub const DEFAULT_MAX_AGE_SECS: u64 = 3600;

/// Per-session conversation history, bounded by age and size on trim.
///
/// Entries are created on first append and live for the process lifetime.
/// The store itself does no locking; the gateway keeps it behind a single
/// `RwLock` and runs append + trim for one request under one write guard.
pub struct ConversationMemory {
    max_messages: usize,
    max_age: Duration,
    sessions: HashMap<String, Vec<Message>>,
}

impl ConversationMemory {
    pub fn new(max_messages: usize, max_age: Duration) -> Self {
        Self {
            max_messages,
            max_age,
            sessions: HashMap::new(),
        }
    }

    /// Append messages to a session, stamping each with `now`.
    pub fn append<I>(&mut self, session: &str, messages: I, now: DateTime<Utc>)
    where
        I: IntoIterator<Item = ChatMessage>,
    {
        let entry = self.sessions.entry(session.to_string()).or_default();
        entry.extend(messages.into_iter().map(|m| m.at(now)));
    }

    /// Drop expired messages, keep the most recent `max_messages`, write the
    /// result back as the session's history and return it.
    pub fn trim(&mut self, session: &str, now: DateTime<Utc>) -> Vec<Message> {
        let (max_age, max_messages) = (self.max_age, self.max_messages);
        let Some(entry) = self.sessions.get_mut(session) else {
            return Vec::new();
        };

        entry.retain(|m| now - m.timestamp < max_age);
        if entry.len() > max_messages {
            let drain_count = entry.len() - max_messages;
            entry.drain(..drain_count);
        }
        entry.clone()
    }

    /// Current history for a session without trimming.
    pub fn get(&self, session: &str) -> Vec<Message> {
        self.sessions.get(session).cloned().unwrap_or_default()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn max_messages(&self) -> usize {
        self.max_messages
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_MESSAGES,
            Duration::seconds(DEFAULT_MAX_AGE_SECS as i64),
        )
    }
}
