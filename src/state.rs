//! Application State
//!
//! The page-load-scoped mutable state, gathered into one explicit struct
//! instead of scattered globals. The session controller owns the active
//! session and its stream; everything else the view reads lives here.

use marketscope_core::ReportSummary;

use crate::models::ChatMessage;
use crate::services::history::HistoryLedger;

/// The report currently on display, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportView {
    pub path: Option<String>,
    pub content: Option<String>,
}

impl ReportView {
    /// Show `content` for `path`, replacing whatever was displayed.
    pub fn show(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.path = Some(path.into());
        self.content = Some(content.into());
    }

    pub fn clear(&mut self) {
        self.path = None;
        self.content = None;
    }

    /// Whether `path` is the report currently displayed.
    pub fn is_showing(&self, path: &str) -> bool {
        self.path.as_deref() == Some(path)
    }
}

/// All mutable state shared between services and the view layer.
#[derive(Debug, Default)]
pub struct AppState {
    /// Newest-first record of past submissions.
    pub history: HistoryLedger,
    /// Append-only chat log; cleared only as a whole.
    pub chat: Vec<ChatMessage>,
    /// Last known report directory listing.
    pub reports: Vec<ReportSummary>,
    /// Report content on display.
    pub report_view: ReportView,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
