//! Chat Models
//!
//! Messages in the agent chat log and the static catalog of named analysis
//! agents.

use serde::{Deserialize, Serialize};

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Agent,
    System,
}

/// One entry in the append-only chat log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    /// Display label of the speaker.
    pub speaker: String,
    pub content: String,
    pub timestamp: String,
}

impl ChatMessage {
    fn now() -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            speaker: "您".to_string(),
            content: content.into(),
            timestamp: Self::now(),
        }
    }

    pub fn agent(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Agent,
            speaker: speaker.into(),
            content: content.into(),
            timestamp: Self::now(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            speaker: "系统".to_string(),
            content: content.into(),
            timestamp: Self::now(),
        }
    }
}

/// Named analysis agents available for chat, as `(id, display label)`.
pub const AVAILABLE_AGENTS: &[(&str, &str)] = &[
    ("big_deal_analysis", "大单异动分析智能体"),
    ("chip_analysis", "筹码分析智能体"),
    ("hot_money", "游资分析智能体"),
    ("risk_control", "风险控制智能体"),
    ("sentiment", "舆情分析智能体"),
    ("technical_analysis", "技术分析智能体"),
];

/// Resolve an agent id to its display label; unknown ids display as-is.
pub fn agent_label(agent_id: &str) -> &str {
    AVAILABLE_AGENTS
        .iter()
        .find(|(id, _)| *id == agent_id)
        .map(|(_, label)| *label)
        .unwrap_or(agent_id)
}
