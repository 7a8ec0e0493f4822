//! Compresor server API seam.
//!
//! The `CompressionApi` trait is the sole interface for HTTP interaction with
//! the compresor service. All network requests are implemented inside `api/`;
//! upper layers (`services/`, `commands/`) call through the trait and never
//! construct HTTP requests directly, so a wire-format change touches only this
//! module.

use std::future::Future;

use crate::error::Result;
use crate::models::outcome::OperationOutcome;

/// One file bound for one endpoint. Exactly one file per request; the
/// implementation encodes it as the single multipart field `file`.
#[derive(Debug, Clone)]
pub struct SubmitParams {
    pub endpoint: &'static str,
    pub file_name: String,
    pub data: Vec<u8>,
}

pub trait CompressionApi {
    /// Submit one operation request and interpret the response.
    ///
    /// `Ok` carries the validated success body. A non-2xx response with a JSON
    /// body becomes `AppError::Api` carrying the server's message; everything
    /// else (connection failure, non-JSON body, invalid success shape) becomes
    /// `AppError::Network`.
    fn submit(
        &self,
        params: SubmitParams,
    ) -> impl Future<Output = Result<OperationOutcome>> + Send;

    /// Fetch a produced artifact by its download URL (absolute, or relative to
    /// the server base URL).
    fn fetch_result(&self, download_url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

pub mod v1;
