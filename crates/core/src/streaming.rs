//! Stream Event Types
//!
//! Wire-level payloads for the analysis server-push channel, the event type
//! the session state machine consumes, and the SSE line decoder that bridges
//! the two. The API crate decodes raw stream lines into [`StreamPayload`]s and
//! forwards [`SessionEvent`]s; the console never sees the wire format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One JSON payload on the analysis stream, as sent by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamPayload {
    /// Greeting emitted when the channel opens. Carries no state.
    Connected,

    /// Keep-alive emitted while the engine is quiet. Carries no state.
    Heartbeat,

    /// Incremental console output from the analysis engine.
    Output { content: String },

    /// Terminal: the job finished. `report_path` may be empty when the run
    /// produced no artifact.
    Complete {
        #[serde(default)]
        report_path: String,
    },

    /// Terminal: the server reported a failure.
    Error { message: String },

    /// Unrecognized payload types are skipped, not errors.
    #[serde(other)]
    Unknown,
}

impl StreamPayload {
    /// Whether this payload ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete { .. } | Self::Error { .. })
    }

    /// Map a wire payload to the event the session state machine consumes.
    ///
    /// Non-mutating payloads (`connected`, `heartbeat`, unknown types) map to
    /// `None` and are dropped before they reach the controller.
    pub fn into_session_event(self) -> Option<SessionEvent> {
        match self {
            Self::Output { content } => Some(SessionEvent::Output(content)),
            Self::Complete { report_path } => Some(SessionEvent::Complete { report_path }),
            Self::Error { message } => Some(SessionEvent::Error { message }),
            Self::Connected | Self::Heartbeat | Self::Unknown => None,
        }
    }
}

/// Event consumed by the session state machine.
///
/// `Error` carries the server-reported reason; `TransportError` is the
/// channel-level failure (disconnect, malformed payload). Both are terminal
/// and converge on a failed session, distinguished only by message text.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Append a chunk to the session's accumulated output.
    Output(String),
    /// The job completed, possibly producing an artifact.
    Complete { report_path: String },
    /// The server reported a failure.
    Error { message: String },
    /// The channel itself failed.
    TransportError { message: String },
}

/// Errors raised while decoding a stream line.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DecodeError {
    /// A `data:` line carried a payload that is not valid JSON.
    #[error("Malformed stream payload: {0}")]
    Malformed(String),
}

/// Decoder for one SSE line into a [`StreamPayload`].
///
/// SSE streams may include `event:`, `id:`, `retry:`, and comment lines;
/// only `data:` lines carry payloads.
#[derive(Debug, Default)]
pub struct SseLineDecoder;

impl SseLineDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a single line. `Ok(None)` means the line carries no payload
    /// (blank, comment, non-data field, or `[DONE]` sentinel).
    pub fn decode_line(&self, line: &str) -> Result<Option<StreamPayload>, DecodeError> {
        let trimmed = line.trim();

        let json_str = if let Some(rest) = trimmed.strip_prefix("data:") {
            rest.trim_start()
        } else if trimmed.starts_with('{') {
            // Raw JSON without SSE prefix
            trimmed
        } else {
            return Ok(None);
        };

        if json_str.is_empty() || json_str == "[DONE]" {
            return Ok(None);
        }

        serde_json::from_str(json_str)
            .map(Some)
            .map_err(|e| DecodeError::Malformed(e.to_string()))
    }
}
