//! MarketScope Core
//!
//! Foundational types for the MarketScope Console workspace. This crate has
//! zero dependencies on application-level code (HTTP clients, the console
//! driver, etc.).
//!
//! ## Module Organization
//!
//! - `streaming` - Wire-level stream payloads, session events, and the SSE
//!   line decoder
//! - `options` - Analysis job options sent with a submission
//! - `report` - Report directory metadata shared between the API clients and
//!   the console
//!
//! ## Design Principles
//!
//! 1. **Minimal dependency surface (serde/serde_json/thiserror only)** - keeps
//!    build times minimal
//! 2. **Wire shapes live here** - the API crate and the console agree on one
//!    definition of every payload
//! 3. **Unidirectional dependency** - this crate depends on nothing else in
//!    the workspace

pub mod options;
pub mod report;
pub mod streaming;

// ── Analysis Options ───────────────────────────────────────────────────
pub use options::AnalysisOptions;

// ── Report Metadata ────────────────────────────────────────────────────
pub use report::{ReportSummary, ReportType};

// ── Streaming Types ────────────────────────────────────────────────────
pub use streaming::{DecodeError, SessionEvent, SseLineDecoder, StreamPayload};
