//! Message identifier generators

use crate::domain::MessageId;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of unique message identifiers, injected into the store.
pub trait MessageIdGenerator: Send + Sync {
    fn next_id(&self) -> MessageId;
}

/// Monotonic counter; ids are "1", "2", "3", ...
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageIdGenerator for SequentialIds {
    fn next_id(&self) -> MessageId {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        MessageId::new(value.to_string())
    }
}

/// Random UUID v4 ids.
#[derive(Debug, Default)]
pub struct UuidIds;

impl MessageIdGenerator for UuidIds {
    fn next_id(&self) -> MessageId {
        MessageId::new(Uuid::new_v4().to_string())
    }
}

/// Configurable choice of generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn MessageIdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
            IdStrategy::Uuid => Box::new(UuidIds),
        }
    }
}
