//! Services
//!
//! Orchestration between the API clients, the models, and the shared state.
//! Each service owns one concern; none of them reach into another's state.

pub mod chat;
pub mod history;
pub mod reports;
pub mod session;

pub use chat::ChatService;
pub use history::HistoryLedger;
pub use reports::ReportDirectory;
pub use session::SessionController;
