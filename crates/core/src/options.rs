//! Analysis Options
//!
//! Optional parameters sent alongside a job submission. Field names match the
//! wire format of the submission endpoint.

use serde::{Deserialize, Serialize};

/// Configuration record for one analysis job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisOptions {
    /// Output format produced by the engine.
    pub format: String,
    /// Destination override; `None` lets the server choose.
    pub output: Option<String>,
    /// Speech synthesis toggle.
    pub tts: bool,
    /// Iteration budget for the remote engine.
    pub max_steps: u32,
    /// Round count for the adversarial sub-agents.
    pub debate_rounds: u32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            output: None,
            tts: false,
            max_steps: 10,
            debate_rounds: 3,
        }
    }
}
