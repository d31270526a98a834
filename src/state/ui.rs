#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use easel::brush::Tool;
use easel::consts::DEFAULT_BRUSH_SIZE;

/// UI state for dark mode, the active brush tool, and the notice line.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Tool armed on the edit canvas.
    pub active_tool: Tool,
    /// Brush diameter in canvas pixels.
    pub brush_size: f64,
    /// Current user-facing notification, if any.
    pub notice: Option<Notice>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            active_tool: Tool::default(),
            brush_size: DEFAULT_BRUSH_SIZE,
            notice: None,
        }
    }
}

impl UiState {
    /// Show an error notice, replacing any prior notice.
    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { kind: NoticeKind::Error, text: text.into() });
    }

    /// Show an informational notice, replacing any prior notice.
    pub fn notify_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { kind: NoticeKind::Info, text: text.into() });
    }

    /// Drop the current notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient user-facing notification shown in the status bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}
