//! Pure projection of the message store into display rows
//!
//! Front-ends draw these rows; nothing here holds state of its own.

use crate::domain::{Message, MessageId, MessageRole};
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Identity marker drawn next to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Bot,
    User,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Bot => "AI",
            Badge::User => "You",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow<'a> {
    pub id: &'a MessageId,
    pub role: MessageRole,
    pub alignment: Alignment,
    pub badge: Badge,
    pub content: &'a str,
    pub time: String,
}

impl<'a> MessageRow<'a> {
    pub fn from_message(message: &'a Message) -> Self {
        let (alignment, badge) = match message.role {
            MessageRole::User => (Alignment::Right, Badge::User),
            MessageRole::Assistant => (Alignment::Left, Badge::Bot),
        };
        Self {
            id: &message.id,
            role: message.role,
            alignment,
            badge,
            content: &message.content,
            time: format_time(&message.timestamp),
        }
    }
}

/// One row per message, in store order.
pub fn thread_rows(messages: &[Message]) -> Vec<MessageRow<'_>> {
    messages.iter().map(MessageRow::from_message).collect()
}

/// Local wall-clock time, e.g. `3:04:05 PM`.
pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%-I:%M:%S %p").to_string()
}
