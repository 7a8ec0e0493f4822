//! CompressionApiV1 — reqwest implementation of the `CompressionApi` trait.

use std::time::Duration;

use serde::Deserialize;

use super::{CompressionApi, SubmitParams};
use crate::error::{AppError, Result};
use crate::models::outcome::OperationOutcome;

const USER_AGENT: &str = "compresor-client/0.1.0";

/// Fallback when a failure response carries no `error` field.
pub const MSG_UNKNOWN_ERROR: &str = "Ocurrió un error desconocido.";

/// Body of a failure response. Absence of `error` is a valid shape and maps to
/// the unknown-error fallback, as does any JSON value that is not an object.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
}

pub struct CompressionApiV1 {
    client: reqwest::Client,
    base_url: String,
}

impl CompressionApiV1 {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a path or absolute URL against the configured base.
    fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl CompressionApi for CompressionApiV1 {
    async fn submit(&self, params: SubmitParams) -> Result<OperationOutcome> {
        let form = reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(params.data)
                .file_name(params.file_name)
                .mime_str("application/octet-stream")
                .map_err(|e| AppError::Internal(format!("MIME parse error: {}", e)))?,
        );

        let url = self.url_for(params.endpoint);
        let resp = self.client.post(&url).multipart(form).send().await?;

        // Read the status before consuming the body; failure bodies still
        // carry the server's message.
        let status = resp.status();
        let body: serde_json::Value = resp.json().await?;

        if status.is_success() {
            serde_json::from_value(body)
                .map_err(|e| AppError::Network(format!("Invalid success body from {}: {}", url, e)))
        } else {
            let parsed: ApiErrorBody = serde_json::from_value(body).unwrap_or_default();
            Err(AppError::Api(
                parsed.error.unwrap_or_else(|| MSG_UNKNOWN_ERROR.to_string()),
            ))
        }
    }

    async fn fetch_result(&self, download_url: &str) -> Result<Vec<u8>> {
        let url = self.url_for(download_url);
        let resp = self.client.get(&url).send().await?.error_for_status()?;
        Ok(resp.bytes().await?.to_vec())
    }
}

/// Lightweight connectivity check against the configured server.
///
/// Sends an HTTP HEAD request with a 5-second timeout. Any HTTP response counts
/// as reachable; a failed request (network error, timeout, DNS failure) does
/// not. Offline is a normal application state, not an error.
pub async fn check_connectivity(base_url: &str) -> bool {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
    {
        Ok(c) => c,
        Err(_) => return false,
    };
    client.head(base_url).send().await.is_ok()
}
