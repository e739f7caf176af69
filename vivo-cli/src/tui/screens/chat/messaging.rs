//! Messaging handlers for chat
//!
//! Runs the analysis exchange off the event loop and handles slash commands.

use crate::commands::{CommandResult, parse_command};
use super::state::ChatScreenState;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;
use vivo_core::session::{ChatSession, PendingTurn, QUICK_ACTIONS};
use vivo_core::{AnalysisClient, AnalysisError};

/// Events from async response handling
pub(crate) enum ResponseEvent {
    TurnFinished {
        turn: PendingTurn,
        result: Result<String, AnalysisError>,
    },
}

/// Run one analysis exchange and report back over `tx`.
pub(crate) fn spawn_analysis<C>(client: Arc<C>, turn: PendingTurn, tx: mpsc::Sender<ResponseEvent>)
where
    C: AnalysisClient + 'static,
{
    tokio::spawn(async move {
        let result = client.analyze(&turn.text).await;
        debug!(id = %turn.user_message_id, ok = result.is_ok(), "Analysis exchange finished");
        let _ = tx.send(ResponseEvent::TurnFinished { turn, result }).await;
    });
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandFlow {
    Continue,
    Exit,
}

/// Handle command execution
pub(crate) fn handle_command<C>(
    session: &mut ChatSession<C>,
    screen: &mut ChatScreenState,
    input: &str,
) -> CommandFlow
where
    C: AnalysisClient + 'static,
{
    match parse_command(input) {
        CommandResult::None => {}

        CommandResult::ShowHelp => {
            screen.show_help = !screen.show_help;
            screen.dirty = true;
        }

        CommandResult::ListQuick => {
            let list: Vec<String> = QUICK_ACTIONS
                .iter()
                .enumerate()
                .map(|(i, action)| format!("{}: {}", i + 1, action.label))
                .collect();
            screen.set_status(format!("Quick questions: {}", list.join(" │ ")));
        }

        CommandResult::Quick(number) => match session.apply_quick_action(number) {
            Some(action) => screen.set_status(format!("Ready to send: {}", action.label)),
            None => screen.set_status(format!(
                "No quick question {number}. Choose 1-{}.",
                QUICK_ACTIONS.len()
            )),
        },

        CommandResult::InvalidQuick(arg) => {
            screen.set_status(format!("'{arg}' is not a quick question number."));
        }

        CommandResult::Exit => return CommandFlow::Exit,

        CommandResult::Unknown(cmd) => {
            screen.set_status(format!(
                "Unknown command: /{cmd}. Type /help for available commands."
            ));
        }
    }
    CommandFlow::Continue
}
