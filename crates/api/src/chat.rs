//! Chat Client
//!
//! Sends a message to one named analysis agent or a group of them. Responses
//! are returned in server order; the client never reorders or deduplicates
//! group replies.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::types::{parse_http_error, ApiError, ApiResult};

#[derive(Debug, Serialize)]
struct SingleChatRequest<'a> {
    agent: &'a str,
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct SingleChatResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct GroupChatRequest<'a> {
    agents: &'a [String],
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct GroupChatResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    responses: Vec<AgentReply>,
    #[serde(default)]
    error: Option<String>,
}

/// One agent's reply in a group conversation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AgentReply {
    pub agent: String,
    pub response: String,
}

/// Client for the chat endpoints.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
}

impl ChatClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Send a message to a single agent.
    pub async fn send_single(&self, agent_id: &str, message: &str) -> ApiResult<String> {
        if agent_id.trim().is_empty() {
            return Err(ApiError::Validation("an agent must be selected".to_string()));
        }
        if message.trim().is_empty() {
            return Err(ApiError::Validation("message must not be empty".to_string()));
        }

        let body = self
            .post_text(
                "/api/chat/single",
                &SingleChatRequest {
                    agent: agent_id,
                    message,
                },
            )
            .await?;

        let parsed: SingleChatResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("chat response: {e}")))?;

        if !parsed.success {
            return Err(ApiError::Rejected(
                parsed.error.unwrap_or_else(|| "chat failed".to_string()),
            ));
        }
        parsed
            .response
            .ok_or_else(|| ApiError::Parse("chat response carried no reply".to_string()))
    }

    /// Send a message to a non-empty group of agents. Replies come back in
    /// server order.
    pub async fn send_group(
        &self,
        agent_ids: &[String],
        message: &str,
    ) -> ApiResult<Vec<AgentReply>> {
        if agent_ids.is_empty() {
            return Err(ApiError::Validation(
                "at least one agent must join a group chat".to_string(),
            ));
        }
        if message.trim().is_empty() {
            return Err(ApiError::Validation("message must not be empty".to_string()));
        }

        let body = self
            .post_text(
                "/api/chat/group",
                &GroupChatRequest {
                    agents: agent_ids,
                    message,
                },
            )
            .await?;

        let parsed: GroupChatResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("group chat response: {e}")))?;

        if !parsed.success {
            return Err(ApiError::Rejected(
                parsed.error.unwrap_or_else(|| "group chat failed".to_string()),
            ));
        }
        Ok(parsed.responses)
    }

    async fn post_text<B: Serialize>(&self, route: &str, body: &B) -> ApiResult<String> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, route))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status != 200 {
            return Err(parse_http_error(status, &text));
        }
        Ok(text)
    }
}
