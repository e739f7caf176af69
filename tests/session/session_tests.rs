//! ChatSession behaviour: submission, failure handling and quick actions

#[path = "../common/mod.rs"]
mod common;

use common::{GREETING, MockClient};
use std::collections::HashSet;
use std::sync::Arc;
use vivo_core::domain::{MessageId, MessageRole};
use vivo_core::session::{ChatSession, PendingTurn, SessionState, SubmitOutcome, Submission};
use vivo_core::store::{StoreEvent, UuidIds};

fn session_with(mock: &Arc<MockClient>) -> ChatSession<Arc<MockClient>> {
    ChatSession::new(Arc::clone(mock), GREETING)
}

#[test]
fn test_session_is_seeded_with_greeting() {
    let mock = Arc::new(MockClient::answering("unused"));
    let session = session_with(&mock);

    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, MessageRole::Assistant);
    assert_eq!(session.messages()[0].content, GREETING);
    assert_eq!(session.state(), SessionState::Idle);
}

#[tokio::test]
async fn test_blank_submit_is_noop() {
    let mock = Arc::new(MockClient::answering("unused"));
    let mut session = session_with(&mock);

    for blank in ["", "   ", "\t\n  "] {
        session.input_mut().set(blank);
        let outcome = session.submit().await.expect("blank submit never fails");
        assert_eq!(outcome, Submission::Ignored);
    }

    assert_eq!(session.messages().len(), 1);
    assert_eq!(mock.calls(), 0);
}

#[test]
fn test_begin_submit_appends_user_message_before_exchange() {
    let mock = Arc::new(MockClient::answering("unused"));
    let mut session = session_with(&mock);
    session.input_mut().set("  Is 5.4 mmol/L glucose high?  ");

    let turn = match session.begin_submit() {
        SubmitOutcome::Started(turn) => turn,
        other => panic!("expected a started turn, got {other:?}"),
    };

    assert_eq!(session.messages().len(), 2);
    let user = &session.messages()[1];
    assert_eq!(user.role, MessageRole::User);
    assert_eq!(user.content, "  Is 5.4 mmol/L glucose high?  ");
    assert_eq!(user.id, turn.user_message_id);
    assert!(session.input().is_empty());
    assert_eq!(session.state(), SessionState::Submitting);
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_success_appends_one_assistant_message_after_user() {
    let mock = Arc::new(MockClient::answering("X"));
    let mut session = session_with(&mock);
    session.input_mut().set("question");

    let outcome = session.submit().await.expect("analysis succeeds");

    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, MessageRole::User);
    assert_eq!(messages[2].role, MessageRole::Assistant);
    assert_eq!(messages[2].content, "X");
    assert_eq!(outcome, Submission::Answered(messages[2].id.clone()));
    assert!(session.input().is_empty());
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(mock.texts(), vec!["question".to_string()]);
}

#[tokio::test]
async fn test_failure_appends_nothing_and_keeps_user_message() {
    let mock = Arc::new(MockClient::failing(500, "Analysis failed"));
    let mut session = session_with(&mock);
    session.input_mut().set("What is HbA1c?");

    let err = session.submit().await.expect_err("analysis fails");

    assert_eq!(err.user_message(), "Analysis failed");
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[1].content, "What is HbA1c?");
    assert_eq!(session.messages()[1].role, MessageRole::User);
    assert_eq!(session.last_error(), Some("Analysis failed"));
    assert!(session.input().is_empty());
    assert_eq!(session.state(), SessionState::Idle);
}

#[tokio::test]
async fn test_next_success_clears_previous_error() {
    let failing = Arc::new(MockClient::failing(500, "Analysis failed"));
    let mut session = session_with(&failing);
    session.input_mut().set("first");
    let _ = session.submit().await;
    assert!(session.last_error().is_some());

    session.input_mut().set("second");
    let turn = match session.begin_submit() {
        SubmitOutcome::Started(turn) => turn,
        other => panic!("expected a started turn, got {other:?}"),
    };
    assert!(session.last_error().is_none());

    session
        .complete(&turn, Ok("fine".to_string()))
        .expect("success");
    assert!(session.last_error().is_none());
}

#[test]
fn test_second_submit_while_in_flight_is_busy() {
    let mock = Arc::new(MockClient::answering("unused"));
    let mut session = session_with(&mock);
    session.input_mut().set("first");
    assert!(matches!(session.begin_submit(), SubmitOutcome::Started(_)));

    session.input_mut().set("second");
    assert_eq!(session.begin_submit(), SubmitOutcome::Busy);

    assert_eq!(session.input().text(), "second");
    assert_eq!(session.messages().len(), 2);
}

#[test]
fn test_result_for_unknown_turn_is_ignored() {
    let mock = Arc::new(MockClient::answering("unused"));
    let mut session = session_with(&mock);
    session.input_mut().set("real");
    let turn = match session.begin_submit() {
        SubmitOutcome::Started(turn) => turn,
        other => panic!("expected a started turn, got {other:?}"),
    };

    let stale = PendingTurn {
        user_message_id: MessageId::new("not-in-flight"),
        text: "old".to_string(),
    };
    session
        .complete(&stale, Ok("late answer".to_string()))
        .expect("ignored");

    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.state(), SessionState::Submitting);

    session
        .complete(&turn, Ok("answer".to_string()))
        .expect("success");
    assert_eq!(session.messages().len(), 3);

    // A turn can only complete once
    session
        .complete(&turn, Ok("again".to_string()))
        .expect("ignored");
    assert_eq!(session.messages().len(), 3);
}

#[test]
fn test_quick_action_prefills_without_sending() {
    let mock = Arc::new(MockClient::answering("unused"));
    let mut session = session_with(&mock);

    let action = session.apply_quick_action(2).expect("quick action 2");

    assert_eq!(action.text, "Explain my cholesterol levels");
    assert_eq!(session.input().text(), "Explain my cholesterol levels");
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(mock.calls(), 0);
}

#[test]
fn test_quick_action_out_of_range() {
    let mock = Arc::new(MockClient::answering("unused"));
    let mut session = session_with(&mock);
    session.input_mut().set("draft");

    assert!(session.apply_quick_action(0).is_none());
    assert!(session.apply_quick_action(4).is_none());
    assert_eq!(session.input().text(), "draft");
}

#[tokio::test]
async fn test_messages_stay_in_insertion_order_across_turns() {
    let mock = Arc::new(MockClient::answering("ok"));
    let mut session = session_with(&mock);

    for question in ["one", "two", "three"] {
        session.input_mut().set(question);
        session.submit().await.expect("success");
    }

    let contents: Vec<&str> = session
        .messages()
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(contents, vec![GREETING, "one", "ok", "two", "ok", "three", "ok"]);

    let ids: HashSet<_> = session.messages().iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids.len(), 7);
}

#[tokio::test]
async fn test_subscriber_sees_user_then_assistant() {
    let mock = Arc::new(MockClient::answering("answer"));
    let mut session = session_with(&mock);
    let mut events = session.subscribe();
    session.input_mut().set("question");

    session.submit().await.expect("success");

    let roles: Vec<(usize, MessageRole)> = std::iter::from_fn(|| events.try_recv().ok())
        .map(|StoreEvent::Appended { index, role, .. }| (index, role))
        .collect();
    assert_eq!(
        roles,
        vec![(1, MessageRole::User), (2, MessageRole::Assistant)]
    );
}

#[tokio::test]
async fn test_uuid_ids_are_unique() {
    let mock = Arc::new(MockClient::answering("ok"));
    let mut session = ChatSession::with_ids(Arc::clone(&mock), Box::new(UuidIds), GREETING);
    session.input_mut().set("a");
    session.submit().await.expect("success");

    let ids: HashSet<_> = session.messages().iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids.len(), 3);
    assert!(session.messages().iter().all(|m| m.id.as_str().len() == 36));
}

#[tokio::test]
async fn test_end_to_end_blood_pressure_question() {
    let mock = Arc::new(MockClient::answering("120/80 mmHg is typical."));
    let mut session = session_with(&mock);
    assert_eq!(session.messages().len(), 1);

    session.input_mut().set("What is a normal blood pressure?");
    session.submit().await.expect("success");

    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].role, MessageRole::Assistant);
    assert_eq!(messages[1].role, MessageRole::User);
    assert_eq!(messages[1].content, "What is a normal blood pressure?");
    assert_eq!(messages[2].role, MessageRole::Assistant);
    assert_eq!(messages[2].content, "120/80 mmHg is typical.");
}
