//! Chat input handling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use vivo_core::session::InputController;

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input
    Submit,
    /// Exit the chat
    Exit,
    /// Execute a command
    Command(String),
    /// Pre-fill the input with quick question N (1-based)
    QuickAction(usize),
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
    /// Terminal resized or input edited; redraw only
    Redraw,
}

/// Handle a terminal event, editing `input` in place.
pub fn handle_input(input: &mut InputController, event: Event) -> InputAction {
    match event {
        Event::Key(key) => handle_key(input, key),
        Event::Paste(text) => {
            for c in text.chars() {
                input.insert_char(c);
            }
            InputAction::Redraw
        }
        Event::Resize(_, _) => InputAction::Redraw,
        _ => InputAction::None,
    }
}

fn handle_key(input: &mut InputController, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    if ctrl && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }
    if ctrl && key.code == KeyCode::Char('c') {
        input.clear();
        return InputAction::Redraw;
    }

    match key.code {
        // Shift/Alt+Enter asks for a line break, plain Enter sends
        KeyCode::Enter if shift || alt => {
            input.insert_newline();
            InputAction::Redraw
        }
        KeyCode::Enter => {
            if input.is_command() {
                return InputAction::Command(input.take());
            }
            InputAction::Submit
        }
        KeyCode::F(n @ 1..=3) => InputAction::QuickAction(usize::from(n)),
        KeyCode::Char(c @ '1'..='3') if alt => {
            InputAction::QuickAction(c as usize - '0' as usize)
        }
        KeyCode::Esc => {
            input.clear();
            InputAction::Redraw
        }
        KeyCode::Backspace => {
            input.delete_char();
            InputAction::Redraw
        }
        KeyCode::Delete => {
            input.delete_char_forward();
            InputAction::Redraw
        }
        KeyCode::Left => {
            input.move_cursor_left();
            InputAction::Redraw
        }
        KeyCode::Right => {
            input.move_cursor_right();
            InputAction::Redraw
        }
        KeyCode::Home => {
            input.move_cursor_home();
            InputAction::Redraw
        }
        KeyCode::End => {
            input.move_cursor_end();
            InputAction::Redraw
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char('u') if ctrl => InputAction::ScrollTop,
        KeyCode::Char('d') if ctrl => InputAction::ScrollBottom,
        KeyCode::Char(c) if !ctrl => {
            input.insert_char(c);
            InputAction::Redraw
        }
        KeyCode::Tab => {
            input.insert_char(' ');
            input.insert_char(' ');
            InputAction::Redraw
        }
        _ => InputAction::None,
    }
}
