//! Chat session: message store, pending input and one analysis exchange per turn
//!
//! A turn is split in two so an event loop never blocks on the network:
//! [`ChatSession::begin_submit`] records the question and hands back a
//! [`PendingTurn`], and [`ChatSession::complete`] applies the result once the
//! exchange resolves. [`ChatSession::submit`] composes both for callers that
//! can simply await.

mod input;
mod quick;

pub use input::InputController;
pub use quick::{QUICK_ACTIONS, QuickAction, quick_action};

use crate::analysis::{AnalysisClient, AnalysisError};
use crate::config::AppConfig;
use crate::domain::{Message, MessageId, MessageRole};
use crate::store::{MessageIdGenerator, MessageStore, StoreEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Session-level state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Submitting,
}

/// A question that has been recorded and is waiting for its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub user_message_id: MessageId,
    pub text: String,
}

/// What happened when the user asked to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Pending text was blank; nothing changed.
    Ignored,
    /// A turn is already in flight; pending text is left as it was.
    Busy,
    /// The user message was appended and the exchange may start.
    Started(PendingTurn),
}

/// Result of an awaited [`ChatSession::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Ignored,
    Busy,
    Answered(MessageId),
}

pub struct ChatSession<C> {
    client: Arc<C>,
    store: MessageStore,
    input: InputController,
    in_flight: Option<MessageId>,
    last_error: Option<String>,
}

impl<C> ChatSession<C>
where
    C: AnalysisClient + 'static,
{
    /// New session with sequential ids, seeded with `greeting`.
    pub fn new(client: C, greeting: impl Into<String>) -> Self {
        Self::with_store(client, MessageStore::new(), greeting)
    }

    pub fn with_ids(
        client: C,
        ids: Box<dyn MessageIdGenerator>,
        greeting: impl Into<String>,
    ) -> Self {
        Self::with_store(client, MessageStore::with_ids(ids), greeting)
    }

    pub fn from_config(client: C, config: &AppConfig) -> Self {
        Self::with_ids(client, config.ids.generator(), config.greeting.clone())
    }

    fn with_store(client: C, mut store: MessageStore, greeting: impl Into<String>) -> Self {
        store.push(MessageRole::Assistant, greeting);
        Self {
            client: Arc::new(client),
            store,
            input: InputController::new(),
            in_flight: None,
            last_error: None,
        }
    }

    /// Shared handle to the analysis client, for spawning an exchange.
    pub fn client(&self) -> Arc<C> {
        Arc::clone(&self.client)
    }

    pub fn messages(&self) -> &[Message] {
        self.store.all()
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<StoreEvent> {
        self.store.subscribe()
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputController {
        &mut self.input
    }

    pub fn state(&self) -> SessionState {
        if self.in_flight.is_some() {
            SessionState::Submitting
        } else {
            SessionState::Idle
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// User-facing description of the most recent failed turn.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Pre-fill the input with a quick action. Never sends.
    pub fn apply_quick_action(&mut self, number: usize) -> Option<&'static QuickAction> {
        let action = quick_action(number)?;
        self.input.set(action.text);
        debug!(number, text = action.text, "Applied quick action");
        Some(action)
    }

    /// Record the pending text as a user message and enter `Submitting`.
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.input.is_blank() {
            return SubmitOutcome::Ignored;
        }
        if self.in_flight.is_some() {
            debug!("Submit rejected, a turn is already in flight");
            return SubmitOutcome::Busy;
        }

        let text = self.input.take();
        let id = self.store.next_id();
        self.store.append(Message::user(id.clone(), text.clone()));
        self.in_flight = Some(id.clone());
        self.last_error = None;
        info!(id = %id, chars = text.chars().count(), "Submitting question");

        SubmitOutcome::Started(PendingTurn {
            user_message_id: id,
            text,
        })
    }

    /// Apply the outcome of the exchange started by `turn`.
    ///
    /// On success exactly one assistant message is appended. On failure the
    /// store is left untouched, the error is kept for display and returned.
    /// A turn that is not the one in flight is ignored.
    pub fn complete(
        &mut self,
        turn: &PendingTurn,
        result: Result<String, AnalysisError>,
    ) -> Result<(), AnalysisError> {
        if self.in_flight.as_ref() != Some(&turn.user_message_id) {
            warn!(id = %turn.user_message_id, "Ignoring result for a turn that is not in flight");
            return Ok(());
        }
        self.in_flight = None;

        match result {
            Ok(analysis) => {
                let message = self.store.push(MessageRole::Assistant, analysis);
                info!(id = %message.id, reply_to = %turn.user_message_id, "Received answer");
                Ok(())
            }
            Err(err) => {
                warn!(id = %turn.user_message_id, error = %err, "Analysis failed");
                self.last_error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Send the pending text and wait for the answer.
    pub async fn submit(&mut self) -> Result<Submission, AnalysisError> {
        let turn = match self.begin_submit() {
            SubmitOutcome::Ignored => return Ok(Submission::Ignored),
            SubmitOutcome::Busy => return Ok(Submission::Busy),
            SubmitOutcome::Started(turn) => turn,
        };

        let result = self.client.analyze(&turn.text).await;
        self.complete(&turn, result)?;

        let answer = self
            .store
            .last()
            .map(|message| message.id.clone())
            .unwrap_or_else(|| turn.user_message_id.clone());
        Ok(Submission::Answered(answer))
    }
}
