//! Messages passed between the phrases of one cast.
//!
//! An effect can leave a named message in the cast's mailbox; effects of
//! later phrases look it up by name. Names are normalized (trimmed and
//! lowercased), so `" Marked "` and `"marked"` are the same message.

use serde::{Deserialize, Serialize};

use crate::core::{BlockLocation, EntityId, Location};

/// Data carried by a message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MessagePayload {
    /// Presence is the whole message.
    Flag,
    Integer(i64),
    Number(f64),
    Text(String),
    Entity(EntityId),
    Block(BlockLocation),
    Location(Location),
}

/// A named message in a cast's mailbox.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpellMessage {
    name: String,
    payload: MessagePayload,
}

/// Normalize a message name: trimmed and lowercased.
pub fn normalize_message_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl SpellMessage {
    /// Create a message with a payload.
    pub fn new(name: &str, payload: MessagePayload) -> Self {
        Self {
            name: normalize_message_name(name),
            payload,
        }
    }

    /// Create a payload-less message.
    pub fn flag(name: &str) -> Self {
        Self::new(name, MessagePayload::Flag)
    }

    /// The normalized name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn payload(&self) -> &MessagePayload {
        &self.payload
    }

    /// Consume the message, keeping only its payload.
    #[must_use]
    pub fn into_payload(self) -> MessagePayload {
        self.payload
    }
}
