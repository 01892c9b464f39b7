use super::*;

#[test]
fn status_state_defaults_hidden() {
    let state = StatusState::default();
    assert!(!state.visible);
    assert!(state.message.is_none());
    assert_eq!(state.class_name(), "hidden");
    assert_eq!(state.text(), "");
}

#[test]
fn show_makes_message_visible_with_severity_class() {
    let mut state = StatusState::default();
    state.show(StatusMessage::success("Signed up!"));
    assert!(state.visible);
    assert_eq!(state.text(), "Signed up!");
    assert_eq!(state.class_name(), "success");

    state.show(StatusMessage::error("Already registered"));
    assert_eq!(state.class_name(), "error");
}

#[test]
fn hide_with_current_seq_hides_but_keeps_text() {
    let mut state = StatusState::default();
    let seq = state.show(StatusMessage::error("Already registered"));
    assert!(state.hide(seq));
    assert!(!state.visible);
    assert_eq!(state.class_name(), "error hidden");
    assert_eq!(state.text(), "Already registered");
}

#[test]
fn stale_hide_does_not_hide_newer_message() {
    let mut state = StatusState::default();
    let first = state.show(StatusMessage::success("first"));
    let second = state.show(StatusMessage::success("second"));
    assert!(!state.hide(first));
    assert!(state.visible);
    assert_eq!(state.text(), "second");
    assert!(state.hide(second));
    assert!(!state.visible);
}

#[test]
fn hide_twice_is_noop() {
    let mut state = StatusState::default();
    let seq = state.show(StatusMessage::success("ok"));
    assert!(state.hide(seq));
    assert!(!state.hide(seq));
}

#[test]
fn hide_delay_is_five_seconds() {
    assert_eq!(STATUS_HIDE_DELAY_MS, 5_000);
}
