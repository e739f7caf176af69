//! Core of the Vivo Health chat client.
//!
//! A [`ChatSession`] owns an append-only [`MessageStore`], the user's pending
//! text and an [`AnalysisClient`] that forwards each question to
//! `POST /api/lab/analyze`. Front-ends subscribe to the store and draw the
//! rows produced by [`view::thread_rows`].

pub mod analysis;
pub mod config;
pub mod constants;
pub mod domain;
pub mod session;
pub mod store;
pub mod view;

pub use analysis::{AnalysisClient, AnalysisError, HttpAnalysisClient};
pub use config::{AppConfig, ConfigError};
pub use domain::{Message, MessageId, MessageRole};
pub use session::{ChatSession, PendingTurn, SessionState, SubmitOutcome, Submission};
pub use store::{MessageStore, StoreEvent};
