//! Sequential merge of completed parts into the output file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checksum::{digests_match, HashingWriter};
use crate::downloader::DownloadState;
use crate::error::DownloadError;

const WRITE_BUF: usize = 256 * 1024;

/// A fully written output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedFile {
    pub path: PathBuf,
    pub bytes: u64,
    /// Lowercase hex SHA-256 of the written bytes.
    pub sha256: String,
    /// True when an expected digest was given and matched.
    pub verified: bool,
}

/// Writes the parts of `state` to `output_path` in index order.
///
/// The file is created or truncated. Empty slots are skipped, so an incomplete
/// state ends in `IncompleteFile` rather than a silently short file. On
/// `IntegrityMismatch` the written file is left in place.
pub fn assemble(
    state: &DownloadState,
    output_path: &Path,
    expected_sha256: Option<&str>,
) -> Result<MergedFile, DownloadError> {
    let file = File::create(output_path).map_err(|source| DownloadError::OutputCreateFailed {
        path: output_path.to_path_buf(),
        source,
    })?;
    let write_err = |source| DownloadError::OutputWriteFailed {
        path: output_path.to_path_buf(),
        source,
    };

    let mut out = HashingWriter::new(BufWriter::with_capacity(WRITE_BUF, file));
    for part in state.parts_in_order().flatten() {
        out.write_all(part.data()).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;

    let written = out.written();
    let (buffered, sha256) = out.finish();
    let file = buffered.into_inner().map_err(|e| write_err(e.into_error()))?;
    file.sync_all().map_err(write_err)?;
    drop(file);

    tracing::info!(path = %output_path.display(), bytes = written, sha256 = %sha256, "merged");

    if written != state.total_size() {
        return Err(DownloadError::IncompleteFile {
            expected: state.total_size(),
            written,
        });
    }

    let verified = match expected_sha256 {
        Some(expected) if !digests_match(expected, &sha256) => {
            tracing::warn!(expected, actual = %sha256, "checksum mismatch");
            return Err(DownloadError::IntegrityMismatch {
                expected: expected.to_string(),
                actual: sha256,
            });
        }
        Some(_) => {
            tracing::info!("checksum verified");
            true
        }
        None => false,
    };

    Ok(MergedFile {
        path: output_path.to_path_buf(),
        bytes: written,
        sha256,
        verified,
    })
}
