#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_tool_is_idle() {
    let state = UiState::default();
    assert_eq!(state.active_tool, Tool::Idle);
}

#[test]
fn ui_state_default_brush_size() {
    let state = UiState::default();
    assert_eq!(state.brush_size, DEFAULT_BRUSH_SIZE);
}

#[test]
fn ui_state_default_no_notice() {
    let state = UiState::default();
    assert!(state.notice.is_none());
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notify_error_sets_error_notice() {
    let mut state = UiState::default();
    state.notify_error("upload failed");
    let notice = state.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "upload failed");
}

#[test]
fn notify_info_sets_info_notice() {
    let mut state = UiState::default();
    state.notify_info("done");
    let notice = state.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Info);
}

#[test]
fn later_notice_replaces_earlier() {
    // One notice at a time: a new report supersedes the previous one.
    let mut state = UiState::default();
    state.notify_error("first");
    state.notify_error("second");
    assert_eq!(state.notice.unwrap().text, "second");
}

#[test]
fn dismiss_clears_notice() {
    let mut state = UiState::default();
    state.notify_error("oops");
    state.dismiss_notice();
    assert!(state.notice.is_none());
}

#[test]
fn dismiss_without_notice_is_harmless() {
    let mut state = UiState::default();
    state.dismiss_notice();
    assert!(state.notice.is_none());
}
