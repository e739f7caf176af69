//! TUI Theme
//!
//! Calm teal for the assistant, warm blue for the user, muted greys for
//! everything that is not conversation.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - the user's side of the thread
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Assistant color - soft teal
pub const ASSISTANT: Color = Color::Rgb(120, 200, 170);

/// Secondary accent - warm amber for highlights
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Error indicator - soft red
pub const ERROR: Color = Color::Rgb(220, 100, 100);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(110, 110, 120);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

pub fn error() -> Style {
    Style::default().fg(ERROR)
}

/// Badge on user messages
pub fn user_badge() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Badge on assistant messages
pub fn assistant_badge() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ASSISTANT)
        .add_modifier(Modifier::BOLD)
}

pub fn user_text() -> Style {
    Style::default().fg(ACCENT)
}

pub fn assistant_text() -> Style {
    Style::default().fg(Color::White)
}

pub fn timestamp() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(ASSISTANT)
}

/// Destructive action hint
pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}
