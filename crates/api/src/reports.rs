//! Report Directory Client
//!
//! Lists, fetches, deletes, and downloads persisted report artifacts. The
//! server exposes two historical listing shapes and two delete call shapes;
//! both are adapted onto normalized types here rather than branched on in
//! business logic.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use marketscope_core::{ReportSummary, ReportType};

use crate::types::{parse_http_error, ApiError, ApiResult};

/// Plain listing entry (`/api/reports`), no `type` field.
#[derive(Debug, Deserialize)]
struct WireReport {
    path: String,
    #[serde(rename = "type", default)]
    report_type: Option<String>,
    #[serde(rename = "stockCode", default)]
    stock_code: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    recommendation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    reports: Vec<WireReport>,
}

#[derive(Debug, Deserialize)]
struct HistoryListResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    reports: Vec<WireReport>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeleteByPathRequest<'a> {
    path: &'a str,
}

#[derive(Debug, Serialize)]
struct DeleteTypedRequest<'a> {
    report_path: &'a str,
    report_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct DeleteResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Normalized result of a delete call, whichever wire shape was used.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: Option<String>,
}

/// Normalize a wire listing entry; entries without a `type` field are
/// classified from the path.
fn normalize_report(wire: WireReport) -> ReportSummary {
    let report_type = match wire.report_type.as_deref() {
        Some(value) => ReportType::from_wire(value),
        None => ReportType::classify_path(&wire.path),
    };
    ReportSummary {
        path: wire.path,
        report_type,
        stock_code: wire.stock_code,
        date: wire.date,
        filename: wire.filename,
        summary: wire.summary,
        recommendation: wire.recommendation,
    }
}

fn normalize_delete(wire: DeleteResponse) -> DeleteOutcome {
    DeleteOutcome {
        success: wire.success,
        message: wire.message.or(wire.error),
    }
}

/// Final path segment, accepting either separator convention.
fn final_segment(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}

/// Resolve the route for viewing a report.
///
/// HTML artifacts are served as static files addressed by file name; every
/// other format goes through the content API with the full percent-encoded
/// path.
pub fn view_route(path: &str) -> String {
    if path.contains(".html") {
        format!("/report/html/{}", final_segment(path))
    } else {
        format!("/api/view/{}", urlencoding::encode(path))
    }
}

/// Client for the report directory endpoints.
#[derive(Debug, Clone)]
pub struct ReportClient {
    client: Client,
    base_url: String,
}

impl ReportClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the plain listing (`/api/reports`).
    pub async fn list(&self) -> ApiResult<Vec<ReportSummary>> {
        let body = self.get_text("/api/reports".to_string()).await?;
        let parsed: ListResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("report listing: {e}")))?;
        Ok(parsed.reports.into_iter().map(normalize_report).collect())
    }

    /// Fetch the enveloped listing (`/api/reports/history`).
    pub async fn list_history(&self) -> ApiResult<Vec<ReportSummary>> {
        let body = self.get_text("/api/reports/history".to_string()).await?;
        let parsed: HistoryListResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("report history listing: {e}")))?;
        if !parsed.success {
            return Err(ApiError::Rejected(
                parsed
                    .message
                    .unwrap_or_else(|| "report listing unavailable".to_string()),
            ));
        }
        Ok(parsed.reports.into_iter().map(normalize_report).collect())
    }

    /// Fetch the content of one report.
    pub async fn fetch_content(&self, path: &str) -> ApiResult<String> {
        #[derive(Debug, Deserialize)]
        struct ContentResponse {
            content: String,
        }

        let body = self
            .get_text(format!("/api/report/{}", urlencoding::encode(path)))
            .await?;
        let parsed: ContentResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("report content: {e}")))?;
        Ok(parsed.content)
    }

    /// Delete a report by opaque path (legacy call shape).
    pub async fn delete_by_path(&self, path: &str) -> ApiResult<DeleteOutcome> {
        self.post_delete(&DeleteByPathRequest { path }).await
    }

    /// Delete a report by path and type (current call shape).
    pub async fn delete_typed(
        &self,
        path: &str,
        report_type: ReportType,
    ) -> ApiResult<DeleteOutcome> {
        self.post_delete(&DeleteTypedRequest {
            report_path: path,
            report_type: report_type.as_str(),
        })
        .await
    }

    /// Download a report; returns the save filename and the raw bytes.
    pub async fn download(&self, path: &str) -> ApiResult<(String, Vec<u8>)> {
        let response = self
            .client
            .get(format!(
                "{}/api/download/{}",
                self.base_url,
                urlencoding::encode(path)
            ))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(parse_http_error(status, &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((final_segment(path).to_string(), bytes.to_vec()))
    }

    async fn get_text(&self, route: String) -> ApiResult<String> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, route))
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
        Ok(body)
    }

    async fn post_delete<B: Serialize>(&self, body: &B) -> ApiResult<DeleteOutcome> {
        let response = self
            .client
            .post(format!("{}/api/reports/delete", self.base_url))
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

        let parsed: DeleteResponse = serde_json::from_str(&text)
            .map_err(|e| ApiError::Parse(format!("delete response: {e}")))?;
        Ok(normalize_delete(parsed))
    }
}
