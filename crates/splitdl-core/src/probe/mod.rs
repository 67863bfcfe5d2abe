//! HTTP HEAD / metadata probing.
//!
//! Confirms `Accept-Ranges: bytes`, reads `Content-Length`, and suggests an
//! output filename before any part is fetched.

mod parse;

use serde::Serialize;

use crate::error::DownloadError;
use crate::transport::{HttpRequest, Transport};

/// What the pipeline needs to know about the remote file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// Total size in bytes from `Content-Length`.
    pub total_size: u64,
    /// Sanitized name from `Content-Disposition` or the resolved URL path.
    pub suggested_file_name: String,
    /// URL after redirects.
    pub effective_url: String,
}

/// Performs a HEAD request with `user_agent` and interprets the final response.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn probe(
    transport: &dyn Transport,
    url: &str,
    user_agent: &str,
) -> Result<ProbeResult, DownloadError> {
    let request = HttpRequest::head(url).header("User-Agent", user_agent);
    let response = transport
        .execute(&request)
        .map_err(|source| DownloadError::UnreachableSource {
            url: url.to_string(),
            source,
        })?;

    let result = parse::interpret_head(url, &response)?;
    tracing::info!(
        url,
        total_size = result.total_size,
        file_name = %result.suggested_file_name,
        "probe ok"
    );
    Ok(result)
}
