//! Analysis Job Client
//!
//! Submits analysis jobs and pumps the server-push output stream for a
//! session. The pump translates wire payloads into [`SessionEvent`]s; the
//! consumer never sees SSE framing or the non-mutating keep-alive payloads.

use futures_util::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use marketscope_core::streaming::{SessionEvent, SseLineDecoder};
use marketscope_core::AnalysisOptions;

use crate::types::{parse_http_error, ApiError, ApiResult};

/// Diagnostic appended when the channel fails without a server-reported
/// reason. Distinct from explicit `error` payloads, which carry their own
/// message.
pub const DISCONNECT_MESSAGE: &str = "connection interrupted, analysis may be incomplete";

/// Event channel depth for one stream.
const STREAM_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    stock_code: &'a str,
    options: &'a AnalysisOptions,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Accepted submission: the session identifier plus the server's greeting.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub session_id: String,
    pub message: Option<String>,
}

/// Client for the job-submission and streaming endpoints.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Submit an analysis job for `stock_code`.
    ///
    /// Input validation belongs to the caller; this method goes straight to
    /// the wire.
    pub async fn submit(
        &self,
        stock_code: &str,
        options: &AnalysisOptions,
    ) -> ApiResult<SubmitOutcome> {
        let response = self
            .client
            .post(format!("{}/api/analyze", self.base_url))
            .json(&SubmitRequest {
                stock_code,
                options,
            })
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status != 200 {
            return Err(parse_http_error(status, &body));
        }

        let parsed: SubmitResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("submit response: {e}")))?;

        match (parsed.success, parsed.session_id) {
            (true, Some(session_id)) => Ok(SubmitOutcome {
                session_id,
                message: parsed.message,
            }),
            (true, None) => Err(ApiError::Parse(
                "submit response accepted but carried no session id".to_string(),
            )),
            (false, _) => Err(ApiError::Rejected(
                parsed
                    .error
                    .unwrap_or_else(|| "analysis could not be started".to_string()),
            )),
        }
    }

    /// Open the server-push channel for `session_id`.
    ///
    /// The returned stream owns the pump task; dropping or closing it aborts
    /// the task, so no events fire after teardown.
    pub fn open_stream(&self, session_id: &str) -> AnalysisStream {
        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        let url = format!("{}/api/stream/{}", self.base_url, session_id);
        let client = self.client.clone();
        let task = tokio::spawn(pump_stream(client, url, tx));
        AnalysisStream { rx, task }
    }
}

/// A live server-push channel for one session.
#[derive(Debug)]
pub struct AnalysisStream {
    rx: mpsc::Receiver<SessionEvent>,
    task: JoinHandle<()>,
}

impl AnalysisStream {
    /// Await the next event. `None` means the channel closed after a
    /// terminal event (or the pump was aborted).
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.rx.recv().await
    }

    /// Synchronously stop the pump. No further events will be delivered.
    pub fn close(&mut self) {
        self.task.abort();
        self.rx.close();
    }
}

impl Drop for AnalysisStream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Read the SSE body, decode lines, and forward session events until a
/// terminal payload or a transport failure.
async fn pump_stream(client: Client, url: String, tx: mpsc::Sender<SessionEvent>) {
    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, "analysis stream failed to connect");
            let _ = tx.send(disconnect_event()).await;
            return;
        }
    };

    if !response.status().is_success() {
        tracing::warn!(
            status = response.status().as_u16(),
            "analysis stream rejected"
        );
        let _ = tx.send(disconnect_event()).await;
        return;
    }

    let decoder = SseLineDecoder::new();
    let mut stream = response.bytes_stream();
    let mut buffer = String::new();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(err) => {
                tracing::warn!(error = %err, "analysis stream interrupted");
                let _ = tx.send(disconnect_event()).await;
                return;
            }
        };

        buffer.push_str(&String::from_utf8_lossy(&chunk));

        // Process complete lines
        while let Some(line_end) = buffer.find('\n') {
            let line = buffer[..line_end].to_string();
            buffer = buffer[line_end + 1..].to_string();

            match decoder.decode_line(&line) {
                Ok(Some(payload)) => {
                    let terminal = payload.is_terminal();
                    if let Some(event) = payload.into_session_event() {
                        if tx.send(event).await.is_err() {
                            // Receiver gone: superseded or torn down.
                            return;
                        }
                    }
                    if terminal {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "analysis stream payload malformed");
                    let _ = tx.send(disconnect_event()).await;
                    return;
                }
            }
        }
    }

    // The server closed the connection without a terminal payload.
    let _ = tx.send(disconnect_event()).await;
}

fn disconnect_event() -> SessionEvent {
    SessionEvent::TransportError {
        message: DISCONNECT_MESSAGE.to_string(),
    }
}
