//! Report Directory Service
//!
//! Keeps the report listing in state current and mediates viewing, deleting,
//! and downloading artifacts. Deleting the report currently on display also
//! clears the view, so the console never shows a ghost.

use marketscope_api::ReportClient;
use marketscope_core::ReportType;

use crate::state::AppState;
use crate::utils::{AppError, AppResult};

/// Orchestrates the report directory endpoints against shared state.
#[derive(Debug, Clone)]
pub struct ReportDirectory {
    client: ReportClient,
}

impl ReportDirectory {
    pub fn new(client: ReportClient) -> Self {
        Self { client }
    }

    /// Refresh the listing in state.
    ///
    /// The enveloped listing is preferred for its richer metadata; the plain
    /// listing is the fallback. If both fail the listing degrades to empty
    /// rather than poisoning the rest of the console.
    pub async fn refresh(&self, state: &mut AppState) {
        let reports = match self.client.list_history().await {
            Ok(reports) => reports,
            Err(err) => {
                tracing::warn!(error = %err, "history listing failed, trying plain listing");
                match self.client.list().await {
                    Ok(reports) => reports,
                    Err(err) => {
                        tracing::warn!(error = %err, "report listing unavailable");
                        vec![]
                    }
                }
            }
        };
        state.reports = reports;
    }

    /// Fetch a report's content and put it on display.
    pub async fn load(&self, state: &mut AppState, path: &str) -> AppResult<()> {
        let content = self.client.fetch_content(path).await?;
        state.report_view.show(path, content);
        Ok(())
    }

    /// Delete a report, refresh the listing, and clear the view if the
    /// deleted report was the one on display.
    pub async fn delete(
        &self,
        state: &mut AppState,
        path: &str,
        report_type: Option<ReportType>,
    ) -> AppResult<()> {
        let outcome = match report_type {
            Some(report_type) => self.client.delete_typed(path, report_type).await?,
            None => self.client.delete_by_path(path).await?,
        };

        if !outcome.success {
            return Err(AppError::internal(
                outcome
                    .message
                    .unwrap_or_else(|| "report could not be deleted".to_string()),
            ));
        }

        self.refresh(state).await;
        if state.report_view.is_showing(path) {
            state.report_view.clear();
        }
        Ok(())
    }

    /// Download a report as raw bytes with its save filename.
    pub async fn download(&self, path: &str) -> AppResult<(String, Vec<u8>)> {
        Ok(self.client.download(path).await?)
    }
}
