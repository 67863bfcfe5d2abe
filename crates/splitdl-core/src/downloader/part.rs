//! Single-part HTTP Range GET.

use crate::error::DownloadError;
use crate::segmenter::PartRange;
use crate::transport::{HttpRequest, Transport};

use super::state::PartResult;

/// Downloads one planned range into memory.
///
/// The whole body must be exactly `range.len()` bytes: a short read and a
/// server that ignores `Range` (200 with the full body) both fail with
/// `LengthMismatch`. Touches no shared state.
pub fn fetch_part(
    transport: &dyn Transport,
    url: &str,
    user_agent: &str,
    range: &PartRange,
) -> Result<PartResult, DownloadError> {
    let request = HttpRequest::get(url)
        .header("User-Agent", user_agent)
        .header("Range", range.range_header_value());

    tracing::debug!(index = range.index, from = range.from, to = range.to, "part start");

    let response = transport
        .execute(&request)
        .map_err(|source| DownloadError::UnreachableSource {
            url: url.to_string(),
            source,
        })?;

    if response.status > 299 {
        return Err(DownloadError::UnexpectedStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    let part = PartResult::new(*range, response.body)?;
    tracing::debug!(index = range.index, bytes = part.data().len(), "part done");
    Ok(part)
}
