//! Interpret a HEAD response into a `ProbeResult`.

use super::ProbeResult;
use crate::error::DownloadError;
use crate::transport::HttpResponse;
use crate::url_model;

/// Checks, in order: status, range support, length. The filename never fails.
pub(crate) fn interpret_head(
    url: &str,
    response: &HttpResponse,
) -> Result<ProbeResult, DownloadError> {
    if response.status > 299 {
        return Err(DownloadError::UnexpectedStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    let accept_ranges = response.header("accept-ranges");
    if accept_ranges.map(str::trim) != Some("bytes") {
        return Err(DownloadError::RangeUnsupported {
            url: url.to_string(),
            accept_ranges: accept_ranges.map(str::to_string),
        });
    }

    let effective_url = if response.effective_url.is_empty() {
        url.to_string()
    } else {
        response.effective_url.clone()
    };
    let suggested_file_name =
        url_model::derive_filename(&effective_url, response.header("content-disposition"));

    let total_size = response
        .header("content-length")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .ok_or_else(|| DownloadError::MissingLength {
            url: url.to_string(),
        })?;

    Ok(ProbeResult {
        total_size,
        suggested_file_name,
        effective_url,
    })
}
