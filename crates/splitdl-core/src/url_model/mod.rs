//! Output filename derivation.
//!
//! The probe suggests a name from `Content-Disposition` when the server sends
//! one, otherwise from the last path segment of the resolved URL.

mod disposition;
mod sanitize;

pub use disposition::disposition_filename;
pub use sanitize::sanitize_filename;

/// Name used when neither the header nor the URL yields anything usable.
pub const DEFAULT_FILENAME: &str = "download.bin";

/// Last non-empty path segment of `url`, percent-decoded.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let decoded = disposition::percent_decode(segment);
    (!decoded.is_empty()).then_some(decoded)
}

/// Derives a safe local filename for a download.
///
/// # Examples
///
/// - `derive_filename("https://example.com/archive.zip", None)` → `"archive.zip"`
/// - `derive_filename("https://example.com/", Some("attachment; filename=\"report.pdf\""))` → `"report.pdf"`
pub fn derive_filename(url: &str, content_disposition: Option<&str>) -> String {
    let from_header = content_disposition
        .and_then(disposition_filename)
        .map(|name| sanitize_filename(&name))
        .filter(|name| !name.is_empty());

    from_header
        .or_else(|| {
            filename_from_url_path(url)
                .map(|name| sanitize_filename(&name))
                .filter(|name| !name.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}
