//! In-memory transcript of one shell run.
//!
//! Nothing here is persisted; the transcript exists so the shell can report
//! end-of-session statistics and so callers can inspect what was said.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One line of the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Transcript and metadata for one shell run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Record one completed turn: the user's input and the reply it got.
    pub fn add_exchange(&mut self, input: &str, response: &str) {
        self.add_message(Role::User, input.to_string());
        self.add_message(Role::Assistant, response.to_string());
    }

    fn add_message(&mut self, role: Role, content: String) {
        self.messages.push(ChatMessage { role, content });
        self.updated_at = Utc::now();
    }

    /// Completed turns, counted as user messages.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }

    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
