//! Session Models
//!
//! One tracked analysis job from submission to terminal status, plus its
//! display projection for the history list. The transition function lives on
//! [`Session`] so the state machine can be exercised without a live stream.

use serde::{Deserialize, Serialize};

use marketscope_core::streaming::SessionEvent;

/// Lifecycle status of an analysis job. Transitions are monotonic: a session
/// never leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Running,
    Completed,
    Failed,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Display label matching the original console.
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Running => "分析中",
            Self::Completed => "已完成",
            Self::Failed => "失败",
        }
    }
}

/// Side effects a transition asks the caller to perform. Keeping them out of
/// the transition function keeps it pure and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    /// The output buffer grew; the view should scroll.
    OutputGrew,
    /// Fetch the content of the produced artifact.
    LoadReport(String),
    /// Refresh the report directory listing.
    RefreshReports,
}

/// One in-flight or completed analysis job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Server-assigned token; unset before submission is accepted.
    pub session_id: Option<String>,
    /// Input identifier the job analyzes; immutable once submitted.
    pub stock_code: String,
    pub status: SessionStatus,
    /// Text chunks concatenated in arrival order.
    pub accumulated_output: String,
    /// Present only once the session completed.
    pub report_path: Option<String>,
}

impl Session {
    pub fn new(stock_code: impl Into<String>) -> Self {
        Self {
            session_id: None,
            stock_code: stock_code.into(),
            status: SessionStatus::Running,
            accumulated_output: String::new(),
            report_path: None,
        }
    }

    /// Apply one stream event and return the side effects to perform.
    ///
    /// Terminal sessions are frozen: every further event is ignored.
    pub fn apply(&mut self, event: SessionEvent) -> Vec<Followup> {
        if self.status.is_terminal() {
            return vec![];
        }

        match event {
            SessionEvent::Output(content) => {
                self.accumulated_output.push_str(&content);
                vec![Followup::OutputGrew]
            }
            SessionEvent::Complete { report_path } => {
                self.status = SessionStatus::Completed;
                if report_path.is_empty() {
                    return vec![];
                }
                self.report_path = Some(report_path.clone());
                vec![Followup::LoadReport(report_path), Followup::RefreshReports]
            }
            SessionEvent::Error { message } => {
                self.status = SessionStatus::Failed;
                self.accumulated_output
                    .push_str(&format!("\n错误: {message}\n"));
                vec![]
            }
            SessionEvent::TransportError { message } => {
                self.status = SessionStatus::Failed;
                self.accumulated_output.push_str(&format!("\n{message}\n"));
                vec![]
            }
        }
    }
}

/// A session projected for the newest-first history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub stock_code: String,
    /// Submission time, local wall clock.
    pub timestamp: String,
    pub status: SessionStatus,
    pub report_path: Option<String>,
}

impl HistoryEntry {
    pub fn running(stock_code: impl Into<String>) -> Self {
        Self {
            stock_code: stock_code.into(),
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            status: SessionStatus::Running,
            report_path: None,
        }
    }
}
