//! Chat Service
//!
//! Runs the agent chat log. Delivery failures are part of the conversation,
//! not errors: they land in the log as system messages so the user's own
//! message is never silently lost.

use marketscope_api::{ApiError, ChatClient};

use crate::models::{agent_label, ChatMessage};
use crate::state::AppState;
use crate::utils::{AppError, AppResult};

/// Orchestrates single and group chat against the shared chat log.
#[derive(Debug, Clone)]
pub struct ChatService {
    client: ChatClient,
}

impl ChatService {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    /// Send a message to one agent.
    ///
    /// Validation failures return an error without touching the log. Once
    /// the user's message is in the log, delivery failures are appended as
    /// system messages and the call still succeeds.
    pub async fn send_single(
        &self,
        state: &mut AppState,
        agent_id: &str,
        message: &str,
    ) -> AppResult<()> {
        if agent_id.trim().is_empty() {
            return Err(AppError::validation("an agent must be selected"));
        }
        if message.trim().is_empty() {
            return Err(AppError::validation("message must not be empty"));
        }

        state.chat.push(ChatMessage::user(message));

        match self.client.send_single(agent_id, message).await {
            Ok(reply) => {
                state
                    .chat
                    .push(ChatMessage::agent(agent_label(agent_id), reply));
            }
            Err(err) => self.record_failure(state, err),
        }
        Ok(())
    }

    /// Send a message to a group of agents. Replies are appended in server
    /// order.
    pub async fn send_group(
        &self,
        state: &mut AppState,
        agent_ids: &[String],
        message: &str,
    ) -> AppResult<()> {
        if agent_ids.is_empty() {
            return Err(AppError::validation(
                "at least one agent must join a group chat",
            ));
        }
        if message.trim().is_empty() {
            return Err(AppError::validation("message must not be empty"));
        }

        state.chat.push(ChatMessage::user(message));

        match self.client.send_group(agent_ids, message).await {
            Ok(replies) => {
                for reply in replies {
                    state
                        .chat
                        .push(ChatMessage::agent(agent_label(&reply.agent), reply.response));
                }
            }
            Err(err) => self.record_failure(state, err),
        }
        Ok(())
    }

    pub fn clear(&self, state: &mut AppState) {
        state.chat.clear();
    }

    fn record_failure(&self, state: &mut AppState, err: ApiError) {
        tracing::warn!(error = %err, "chat delivery failed");
        state.chat.push(ChatMessage::system(format!("错误: {err}")));
    }
}
