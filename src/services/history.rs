//! History Ledger
//!
//! Newest-first record of submitted analysis jobs. The front entry always
//! corresponds to the most recent submission, which is the only one whose
//! status can still change.

use crate::models::{HistoryEntry, SessionStatus};

/// Newest-first list of submissions for the current run.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh submission at the front of the ledger.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
    }

    /// Update the most recent entry with a terminal outcome.
    pub fn update_current(&mut self, status: SessionStatus, report_path: Option<String>) {
        match self.entries.first_mut() {
            Some(entry) => {
                entry.status = status;
                if report_path.is_some() {
                    entry.report_path = report_path;
                }
            }
            None => {
                tracing::warn!("history update with no recorded submissions");
            }
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
