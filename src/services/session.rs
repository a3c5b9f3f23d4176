//! Session Controller
//!
//! Drives the submit-then-stream lifecycle of one analysis job at a time.
//! Every stream carries the epoch it was opened under; events from a
//! superseded epoch are discarded even if the old channel is still open, so
//! resubmission can never interleave stale output into the new session.

use marketscope_api::{AnalysisClient, AnalysisStream};
use marketscope_core::streaming::SessionEvent;
use marketscope_core::AnalysisOptions;

use crate::models::{Followup, HistoryEntry, Session, SessionStatus};
use crate::state::AppState;
use crate::utils::{AppError, AppResult};

/// Owns the active session and its event stream.
#[derive(Debug)]
pub struct SessionController {
    analysis: AnalysisClient,
    session: Option<Session>,
    stream: Option<AnalysisStream>,
    /// Bumped on every accepted submission; gates stale events.
    epoch: u64,
}

impl SessionController {
    pub fn new(analysis: AnalysisClient) -> Self {
        Self {
            analysis,
            session: None,
            stream: None,
            epoch: 0,
        }
    }

    /// Submit a new analysis job, replacing any session in progress.
    ///
    /// Validation failures leave every piece of state untouched. A rejected
    /// or unreachable submission still records the attempt in history,
    /// marked failed.
    pub async fn submit(
        &mut self,
        state: &mut AppState,
        stock_code: &str,
        options: &AnalysisOptions,
    ) -> AppResult<()> {
        let stock_code = stock_code.trim();
        if stock_code.is_empty() {
            return Err(AppError::validation("a stock code is required"));
        }

        // Supersede whatever was running. Dropping the old stream aborts
        // its pump; the epoch bump discards anything already in flight.
        self.epoch += 1;
        self.stream = None;
        state.report_view.clear();

        let mut session = Session::new(stock_code);
        state.history.record(HistoryEntry::running(stock_code));

        match self.analysis.submit(stock_code, options).await {
            Ok(outcome) => {
                session.session_id = Some(outcome.session_id.clone());
                self.stream = Some(self.analysis.open_stream(&outcome.session_id));
                self.session = Some(session);
                Ok(())
            }
            Err(err) => {
                session.status = SessionStatus::Failed;
                session
                    .accumulated_output
                    .push_str(&format!("错误: {err}\n"));
                self.session = Some(session);
                state.history.update_current(SessionStatus::Failed, None);
                Err(AppError::submission(err.to_string()))
            }
        }
    }

    /// Await the next event from the active stream, tagged with the epoch it
    /// belongs to. `None` means no stream is open or it has drained.
    pub async fn next_event(&mut self) -> Option<(u64, SessionEvent)> {
        let epoch = self.epoch;
        let stream = self.stream.as_mut()?;
        let event = stream.next_event().await?;
        Some((epoch, event))
    }

    /// Apply one event against the active session.
    ///
    /// Events from a superseded epoch are discarded without touching state.
    /// On a terminal transition the history ledger is updated and the
    /// stream is released.
    pub fn handle_event(
        &mut self,
        state: &mut AppState,
        epoch: u64,
        event: SessionEvent,
    ) -> Vec<Followup> {
        if epoch != self.epoch {
            tracing::debug!(
                stale = epoch,
                current = self.epoch,
                "discarding event from superseded stream"
            );
            return vec![];
        }

        let Some(session) = self.session.as_mut() else {
            tracing::debug!("event arrived with no active session");
            return vec![];
        };

        let followups = session.apply(event);

        if session.status.is_terminal() {
            state
                .history
                .update_current(session.status, session.report_path.clone());
            self.stream = None;
        }

        followups
    }

    /// Tear down the active stream, if any.
    pub fn shutdown(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.close();
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_streaming(&self) -> bool {
        self.stream.is_some()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
