//! MarketScope API
//!
//! HTTP/JSON clients for the analysis backend:
//! - Job submission and the server-push output stream
//! - Report directory (list, fetch, delete, download, view routing)
//! - Single and group chat to named analysis agents
//!
//! Each client is stateless per call and owns nothing beyond a shared
//! `reqwest::Client` and the backend base URL. All wire shapes are adapted
//! onto the normalized types in `marketscope-core` at this boundary.

pub mod analysis;
pub mod chat;
pub mod http_client;
pub mod reports;
pub mod types;

// Re-export main types
pub use analysis::{AnalysisClient, AnalysisStream, SubmitOutcome, DISCONNECT_MESSAGE};
pub use chat::{AgentReply, ChatClient};
pub use http_client::build_http_client;
pub use reports::{view_route, DeleteOutcome, ReportClient};
pub use types::{ApiError, ApiResult};
