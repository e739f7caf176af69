//! TUI Chat interface module
//!
//! - state.rs: screen-local state (scroll, spinner, notices)
//! - ui.rs: rendering of the thread, sidebar and input box
//! - input.rs: key handling
//! - messaging.rs: background analysis exchange and command handling
//! - runner.rs: coordinates the components

mod input;
mod messaging;
mod runner;
mod state;
mod ui;

// Re-exports
pub use input::{InputAction, handle_input};
pub use runner::{ChatResult, run_chat};
pub use state::ChatScreenState;
