//! Typed payload of a completed operation.

use serde::Deserialize;

/// Parsed body of a successful compress/decompress response.
///
/// Deserialized strictly at the api boundary: a 2xx response whose body is
/// missing any required field never reaches the renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperationOutcome {
    pub original_size: u64,
    pub compressed_size: u64,
    pub download_url: String,
    /// Human confirmation sent by the server; informational only.
    #[serde(default)]
    pub message: Option<String>,
}

impl OperationOutcome {
    /// Size reduction as a percentage of the original.
    ///
    /// Defined only for a non-empty original. An operation that grows the file
    /// (typical for decompression) yields a negative value.
    pub fn reduction_percent(&self) -> Option<f64> {
        if self.original_size == 0 {
            return None;
        }
        Some((1.0 - self.compressed_size as f64 / self.original_size as f64) * 100.0)
    }
}
