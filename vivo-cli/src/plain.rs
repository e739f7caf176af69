//! Line-oriented chat over stdin/stdout
//!
//! Every non-empty line is a question. `/quick N` pre-fills the pending
//! question; an empty line then sends it, any other line replaces it.

use crate::commands::{CommandResult, parse_command};
use thiserror::Error;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;
use vivo_core::constants::{DISCLAIMER, SUBTITLE, TITLE};
use vivo_core::session::{ChatSession, QUICK_ACTIONS, Submission};
use vivo_core::view::{Alignment, MessageRow};
use vivo_core::{AnalysisClient, StoreEvent};

#[derive(Debug, Error)]
pub enum PlainModeError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
}

enum LoopControl {
    Continue,
    Exit,
}

pub async fn run<C>(session: ChatSession<C>) -> Result<(), PlainModeError>
where
    C: AnalysisClient + 'static,
{
    let stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    run_with(session, stdin, &mut stdout).await
}

/// Drive a session from any line source and sink.
pub async fn run_with<C, R, W>(
    mut session: ChatSession<C>,
    reader: R,
    out: &mut W,
) -> Result<(), PlainModeError>
where
    C: AnalysisClient + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut store_events = session.subscribe();

    print_banner(out, &session).await?;

    loop {
        prompt(out, &session).await?;
        let Some(line) = lines.next_line().await? else {
            write_line(out, "").await?;
            break;
        };

        let trimmed = line.trim();
        if trimmed.starts_with('/') {
            match handle_command(trimmed, &mut session, out).await? {
                LoopControl::Continue => continue,
                LoopControl::Exit => break,
            }
        }

        if !trimmed.is_empty() {
            session.input_mut().set(line.as_str());
        }

        let outcome = session.submit().await;
        print_new_messages(out, &session, &mut store_events).await?;

        match outcome {
            Ok(Submission::Ignored) => {}
            Ok(Submission::Busy) => {
                write_line(out, "Still waiting for the previous answer.").await?;
            }
            Ok(Submission::Answered(id)) => {
                debug!(id = %id, "Turn answered");
            }
            Err(err) => {
                write_line(out, &format!("✗ {}", err.user_message())).await?;
            }
        }
    }

    out.flush().await?;
    Ok(())
}

async fn handle_command<C, W>(
    input: &str,
    session: &mut ChatSession<C>,
    out: &mut W,
) -> Result<LoopControl, PlainModeError>
where
    C: AnalysisClient + 'static,
    W: AsyncWrite + Unpin,
{
    match parse_command(input) {
        CommandResult::None => {}
        CommandResult::ShowHelp => print_help(out).await?,
        CommandResult::ListQuick => print_quick(out).await?,
        CommandResult::Quick(number) => match session.apply_quick_action(number) {
            Some(action) => {
                write_line(
                    out,
                    &format!("Pending: {} (Enter to send, or type a new question)", action.text),
                )
                .await?;
            }
            None => {
                write_line(
                    out,
                    &format!("No quick question {number}. Choose 1-{}.", QUICK_ACTIONS.len()),
                )
                .await?;
            }
        },
        CommandResult::InvalidQuick(arg) => {
            write_line(out, &format!("'{arg}' is not a quick question number.")).await?;
        }
        CommandResult::Exit => return Ok(LoopControl::Exit),
        CommandResult::Unknown(cmd) => {
            write_line(
                out,
                &format!("Unknown command: /{cmd}. Type /help for available commands."),
            )
            .await?;
        }
    }
    Ok(LoopControl::Continue)
}

async fn print_banner<C, W>(out: &mut W, session: &ChatSession<C>) -> Result<(), PlainModeError>
where
    C: AnalysisClient + 'static,
    W: AsyncWrite + Unpin,
{
    write_line(out, TITLE).await?;
    write_line(out, SUBTITLE).await?;
    write_line(out, DISCLAIMER).await?;
    write_line(out, "Type /help for commands.").await?;
    write_line(out, "").await?;
    for message in session.messages() {
        write_line(out, &format_row(&MessageRow::from_message(message))).await?;
    }
    Ok(())
}

async fn print_help<W: AsyncWrite + Unpin>(out: &mut W) -> Result<(), PlainModeError> {
    write_line(out, "Commands:").await?;
    write_line(out, "  /quick [n]  - list quick questions or pre-fill number n").await?;
    write_line(out, "  /help       - show this help").await?;
    write_line(out, "  /exit       - leave the chat").await?;
    Ok(())
}

async fn print_quick<W: AsyncWrite + Unpin>(out: &mut W) -> Result<(), PlainModeError> {
    write_line(out, "Quick questions:").await?;
    for (i, action) in QUICK_ACTIONS.iter().enumerate() {
        write_line(out, &format!("  {}. {}", i + 1, action.text)).await?;
    }
    Ok(())
}

/// Print every message appended since the last call.
async fn print_new_messages<C, W>(
    out: &mut W,
    session: &ChatSession<C>,
    events: &mut mpsc::UnboundedReceiver<StoreEvent>,
) -> Result<(), PlainModeError>
where
    C: AnalysisClient + 'static,
    W: AsyncWrite + Unpin,
{
    while let Ok(StoreEvent::Appended { index, .. }) = events.try_recv() {
        if let Some(message) = session.messages().get(index) {
            write_line(out, &format_row(&MessageRow::from_message(message))).await?;
        }
    }
    Ok(())
}

async fn prompt<C, W>(out: &mut W, session: &ChatSession<C>) -> Result<(), PlainModeError>
where
    C: AnalysisClient + 'static,
    W: AsyncWrite + Unpin,
{
    let marker = if session.input().is_blank() { "> " } else { "(pending) > " };
    out.write_all(marker.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

/// `[time] AI: text` for the assistant, right-hand marker for the user.
pub fn format_row(row: &MessageRow<'_>) -> String {
    let body = row.content.replace('\n', "\n    ");
    match row.alignment {
        Alignment::Left => format!("[{}] {}: {}", row.time, row.badge.label(), body),
        Alignment::Right => format!("    [{}] {}: {}", row.time, row.badge.label(), body),
    }
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, line: &str) -> Result<(), PlainModeError> {
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}
