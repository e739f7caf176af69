//! ChatScreenState tests

use vivo_cli::tui::screens::chat::ChatScreenState;

#[test]
fn test_new_state_sticks_to_bottom() {
    let state = ChatScreenState::new();

    assert_eq!(state.scroll_offset, u16::MAX);
    assert_eq!(state.loading_frame, 0);
    assert!(state.status_message.is_none());
    assert!(state.dirty);
}

#[test]
fn test_scroll_up_from_bottom_uses_visible_max() {
    let mut state = ChatScreenState::new();

    state.scroll_up(10);
    assert_eq!(state.scroll_offset, 9);

    state.scroll_top();
    state.scroll_up(10);
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_scroll_down_is_clamped() {
    let mut state = ChatScreenState::new();
    state.scroll_offset = 4;

    state.scroll_down(5);
    assert_eq!(state.scroll_offset, 5);

    state.scroll_down(5);
    assert_eq!(state.scroll_offset, 5);

    state.scroll_to_bottom();
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_loading_tick_wraps() {
    let mut state = ChatScreenState::new();
    state.loading_frame = 3;

    state.tick_loading();

    assert_eq!(state.loading_frame, 0);
    assert_eq!(state.spinner(), "⠋");
}

#[test]
fn test_status_marks_dirty() {
    let mut state = ChatScreenState::new();
    state.dirty = false;

    state.set_status("Ready to send: Cholesterol");

    assert!(state.dirty);
    assert_eq!(
        state.status_message.as_deref(),
        Some("Ready to send: Cholesterol")
    );
}
