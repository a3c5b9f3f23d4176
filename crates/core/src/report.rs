//! Report Metadata
//!
//! Server-owned metadata about persisted report artifacts. Paths are opaque
//! identifiers and may carry directory separators of either convention.

use serde::{Deserialize, Serialize};

/// Classification of a report artifact, used for badge display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Html,
    Debate,
    Research,
    Battle,
    Other,
}

impl ReportType {
    /// Parse the server's `type` string; unrecognized values become `Other`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "html" => Self::Html,
            "debate" => Self::Debate,
            "research" => Self::Research,
            "battle" => Self::Battle,
            _ => Self::Other,
        }
    }

    /// Best-effort classification from the artifact path, for listing shapes
    /// that carry no `type` field.
    pub fn classify_path(path: &str) -> Self {
        if path.contains(".html") {
            Self::Html
        } else if path.contains("debate") {
            Self::Debate
        } else if path.contains("research") {
            Self::Research
        } else if path.contains("battle") {
            Self::Battle
        } else {
            Self::Other
        }
    }

    /// Bootstrap badge class for the listing view.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Html => "bg-primary",
            Self::Debate => "bg-success",
            Self::Research => "bg-info",
            Self::Battle => "bg-warning",
            Self::Other => "bg-secondary",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Debate => "debate",
            Self::Research => "research",
            Self::Battle => "battle",
            Self::Other => "other",
        }
    }
}

/// One entry in the report directory listing, normalized from the two wire
/// variants the server exposes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    /// Opaque artifact path.
    pub path: String,
    /// Badge classification.
    pub report_type: ReportType,
    /// Stock code the report covers, when the server extracted one.
    pub stock_code: Option<String>,
    /// Generation date string as reported by the server.
    pub date: Option<String>,
    /// File name of the artifact.
    pub filename: Option<String>,
    /// Short summary excerpt.
    pub summary: Option<String>,
    /// Recommendation excerpt.
    pub recommendation: Option<String>,
}
