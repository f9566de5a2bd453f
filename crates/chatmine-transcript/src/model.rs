use crate::error::DuplicateMessageId;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Author of a chat message.
///
/// Exports only distinguish `user` and `assistant` in a meaningful way; any
/// other role string (`system`, `tool`, ...) is kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(raw) => raw,
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single message of a chat history. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
}

/// Ordered message store of one chat.
///
/// Iteration follows insertion order, which for loaded transcripts is the
/// key order of the `messages` object in the export file. Ids are unique.
#[derive(Debug, Clone, Default)]
pub struct History {
    messages: Vec<Message>,
    positions: HashMap<String, usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, rejecting an id that is already present.
    pub fn insert(&mut self, message: Message) -> Result<(), DuplicateMessageId> {
        if self.positions.contains_key(&message.id) {
            return Err(DuplicateMessageId(message.id));
        }
        self.positions
            .insert(message.id.clone(), self.messages.len());
        self.messages.push(message);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Message> {
        self.positions.get(id).map(|&i| &self.messages[i])
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// `(id, message)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.messages.iter().map(|m| (m.id.as_str(), m))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Chat {
    pub history: History,
}

/// Root of a loaded chat export.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub chats: Vec<Chat>,
}

impl Transcript {
    pub fn message_count(&self) -> usize {
        self.chats.iter().map(|c| c.history.len()).sum()
    }
}

/// Interest category a message can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Narrative / scene vocabulary, any role.
    Scene,
    /// Specification / code vocabulary in an assistant message.
    Spec,
}

/// Artifacts mined from one message. Derived per run, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub categories: Vec<Category>,
    pub code_blocks: Vec<String>,
    pub json_objects: Vec<serde_json::Value>,
}
