//! Models
//!
//! Data structures for sessions, history, and chat. Report metadata lives in
//! `marketscope-core` because the API clients normalize onto it directly.

pub mod chat;
pub mod session;

pub use chat::{agent_label, ChatMessage, ChatRole, AVAILABLE_AGENTS};
pub use session::{Followup, HistoryEntry, Session, SessionStatus};
