//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_input};
use super::messaging::{CommandFlow, ResponseEvent, handle_command, spawn_analysis};
use super::state::ChatScreenState;
use super::ui::ChatUI;
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};
use vivo_core::session::{ChatSession, SubmitOutcome};
use vivo_core::AnalysisClient;

/// Result of chat session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatResult {
    Exit,
}

/// Run the TUI chat interface
pub async fn run_chat<C>(
    mut session: ChatSession<C>,
    endpoint: &str,
) -> Result<ChatResult, Box<dyn Error>>
where
    C: AnalysisClient + 'static,
{
    let mut terminal = init_terminal()?;
    let result = run_chat_loop(&mut terminal, &mut session, endpoint).await;
    info!(messages = session.messages().len(), "Chat session closed");
    finish(result, restore_terminal())
}

/// The loop's own error takes precedence over a failed terminal restore.
fn finish(
    result: Result<ChatResult, Box<dyn Error>>,
    restored: io::Result<()>,
) -> Result<ChatResult, Box<dyn Error>> {
    if let Err(err) = restored {
        warn!(error = %err, "Failed to restore terminal");
        if result.is_ok() {
            return Err(err.into());
        }
    }
    result
}

/// Internal chat loop
async fn run_chat_loop<C>(
    terminal: &mut Tui,
    session: &mut ChatSession<C>,
    endpoint: &str,
) -> Result<ChatResult, Box<dyn Error>>
where
    C: AnalysisClient + 'static,
{
    let (response_tx, mut response_rx) = mpsc::channel::<ResponseEvent>(10);
    let mut store_events = session.subscribe();
    let mut screen = ChatScreenState::new();
    let mut max_scroll: u16 = 0;

    loop {
        // Re-derive the thread whenever the store reports a change
        while let Ok(_event) = store_events.try_recv() {
            screen.scroll_to_bottom();
        }

        if screen.dirty {
            terminal.draw(|frame| {
                max_scroll = ChatUI::render(frame, session, &screen, endpoint);
            })?;
            screen.dirty = false;
        }

        while let Ok(event) = response_rx.try_recv() {
            match event {
                ResponseEvent::TurnFinished { turn, result } => {
                    // Failure is surfaced through `last_error` in the header
                    let _ = session.complete(&turn, result);
                    screen.dirty = true;
                }
            }
        }

        let timeout = if session.is_submitting() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            let action = handle_input(session.input_mut(), event);

            match action {
                InputAction::Exit => {
                    return Ok(ChatResult::Exit);
                }

                InputAction::Submit => match session.begin_submit() {
                    SubmitOutcome::Ignored => {}
                    SubmitOutcome::Busy => {
                        screen.set_status("Still waiting for the previous answer");
                    }
                    SubmitOutcome::Started(turn) => {
                        screen.status_message = None;
                        spawn_analysis(session.client(), turn, response_tx.clone());
                    }
                },

                InputAction::Command(cmd) => {
                    if handle_command(session, &mut screen, &cmd) == CommandFlow::Exit {
                        return Ok(ChatResult::Exit);
                    }
                }

                InputAction::QuickAction(number) => {
                    if let Some(action) = session.apply_quick_action(number) {
                        screen.set_status(format!("Ready to send: {}", action.label));
                    }
                }

                InputAction::ScrollUp => screen.scroll_up(max_scroll),
                InputAction::ScrollDown => screen.scroll_down(max_scroll),
                InputAction::ScrollTop => screen.scroll_top(),
                InputAction::ScrollBottom => screen.scroll_to_bottom(),
                InputAction::Redraw => screen.dirty = true,
                InputAction::None => {}
            }
        } else if session.is_submitting() {
            screen.tick_loading();
        }
    }
}
