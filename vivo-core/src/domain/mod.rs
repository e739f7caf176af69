mod message;

pub use message::{Message, MessageId, MessageRole};
