//! Plain (line-oriented) chat mode

#[path = "../common/mod.rs"]
mod common;

use common::{GREETING, MockClient};
use std::sync::Arc;
use vivo_cli::plain::run_with;
use vivo_core::session::ChatSession;

async fn run_lines(mock: &Arc<MockClient>, input: &str) -> String {
    let session = ChatSession::new(Arc::clone(mock), GREETING);
    let mut out: Vec<u8> = Vec::new();
    run_with(session, input.as_bytes(), &mut out)
        .await
        .expect("plain mode runs");
    String::from_utf8(out).expect("utf-8 output")
}

#[tokio::test]
async fn prints_greeting_and_answer() {
    let mock = Arc::new(MockClient::answering("120/80 mmHg is typical."));

    let output = run_lines(&mock, "What is a normal blood pressure?\n/exit\n").await;

    assert!(output.contains("AI Health Chatbot"));
    assert!(output.contains(&format!("AI: {GREETING}")));
    assert!(output.contains("You: What is a normal blood pressure?"));
    assert!(output.contains("AI: 120/80 mmHg is typical."));
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn blank_lines_are_not_sent() {
    let mock = Arc::new(MockClient::answering("unused"));

    run_lines(&mock, "\n   \n\n").await;

    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn quick_command_prefills_and_blank_line_sends() {
    let mock = Arc::new(MockClient::answering("Here is what they mean."));

    let output = run_lines(&mock, "/quick 1\n\n").await;

    assert!(output.contains("Pending: What do my lab results mean?"));
    assert_eq!(mock.texts(), vec!["What do my lab results mean?".to_string()]);
}

#[tokio::test]
async fn quick_command_alone_sends_nothing() {
    let mock = Arc::new(MockClient::answering("unused"));

    run_lines(&mock, "/quick 2\n/exit\n").await;

    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn typed_line_replaces_pending_quick_question() {
    let mock = Arc::new(MockClient::answering("ok"));

    run_lines(&mock, "/quick 2\nIs my iron low?\n").await;

    assert_eq!(mock.texts(), vec!["Is my iron low?".to_string()]);
}

#[tokio::test]
async fn failure_is_reported_after_the_question() {
    let mock = Arc::new(MockClient::failing(500, "Analysis failed"));

    let output = run_lines(&mock, "Explain my cholesterol levels\n").await;

    let question = output.find("You: Explain my cholesterol levels").expect("question echoed");
    let error = output.find("✗ Analysis failed").expect("error shown");
    assert!(question < error);
    assert!(!output.contains("AI: Analysis failed"));
}

#[tokio::test]
async fn unknown_command_is_reported() {
    let mock = Arc::new(MockClient::answering("unused"));

    let output = run_lines(&mock, "/reset\n").await;

    assert!(output.contains("Unknown command: /reset"));
    assert_eq!(mock.calls(), 0);
}
