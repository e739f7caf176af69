//! TUI module for terminal user interface using Ratatui
//!
//! Provides the full-screen chat thread, input box and quick questions.

pub mod screens;
mod terminal;
pub mod theme;

pub use terminal::{Tui, init_terminal, restore_terminal};
