//! Append-only message store with change notification
//!
//! The store owns the conversation thread for the lifetime of a session.
//! Views never poll it implicitly: they call [`MessageStore::subscribe`] and
//! re-derive themselves whenever a [`StoreEvent`] arrives.

mod ids;

pub use ids::{IdStrategy, MessageIdGenerator, SequentialIds, UuidIds};

use crate::domain::{Message, MessageId, MessageRole};
use tokio::sync::mpsc;
use tracing::debug;

/// Notification sent to subscribers after the store changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Appended {
        index: usize,
        id: MessageId,
        role: MessageRole,
    },
}

/// Ordered, append-only sequence of messages.
pub struct MessageStore {
    messages: Vec<Message>,
    ids: Box<dyn MessageIdGenerator>,
    subscribers: Vec<mpsc::UnboundedSender<StoreEvent>>,
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore {
    /// Empty store using sequential ids.
    pub fn new() -> Self {
        Self::with_ids(Box::new(SequentialIds::new()))
    }

    pub fn with_ids(ids: Box<dyn MessageIdGenerator>) -> Self {
        Self {
            messages: Vec::new(),
            ids,
            subscribers: Vec::new(),
        }
    }

    /// Allocate an id for a message about to be created.
    pub fn next_id(&self) -> MessageId {
        self.ids.next_id()
    }

    /// Build a message with a fresh id and append it.
    pub fn push(&mut self, role: MessageRole, content: impl Into<String>) -> &Message {
        let message = Message::new(self.next_id(), role, content);
        let index = self.append(message);
        &self.messages[index]
    }

    /// Add a message to the end of the thread, returning its index.
    pub fn append(&mut self, message: Message) -> usize {
        let index = self.messages.len();
        let event = StoreEvent::Appended {
            index,
            id: message.id.clone(),
            role: message.role,
        };
        debug!(
            index,
            id = %message.id,
            role = message.role.as_str(),
            "Appending message"
        );
        self.messages.push(message);
        self.notify(event);
        index
    }

    /// All messages in insertion order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Register for change notifications.
    ///
    /// Dropping the receiver unsubscribes; the sender is pruned on the next
    /// append.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<StoreEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, event: StoreEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}

impl std::fmt::Debug for MessageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageStore")
            .field("messages", &self.messages)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
