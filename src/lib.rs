//! MarketScope Console
//!
//! Client-side application layer for the MarketScope stock-analysis backend:
//! the session controller that tracks one analysis job from submission
//! through streamed output to its terminal state, the history ledger of past
//! submissions, the report directory, and the agent chat log.
//!
//! All mutable UI state lives in an explicit [`state::AppState`] owned by the
//! caller; there are no global singletons. Network access goes through the
//! clients in `marketscope-api`.

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
