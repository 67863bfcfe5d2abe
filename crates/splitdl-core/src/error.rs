//! Error taxonomy for the download pipeline.
//!
//! Every stage returns `DownloadError`; `phase()` tells the caller which stage
//! terminated the run (probe, plan, fetch, or merge).

use std::fmt;
use std::path::PathBuf;

use crate::transport::TransportError;

/// Pipeline stage that produced a terminating error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Probe,
    Plan,
    Fetch,
    Merge,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Probe => "probe",
            Phase::Plan => "plan",
            Phase::Fetch => "fetch",
            Phase::Merge => "merge",
        };
        f.write_str(name)
    }
}

/// Failure of one part task, collected at the join barrier.
#[derive(Debug)]
pub struct PartFailure {
    pub index: usize,
    pub error: DownloadError,
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// The request could not be sent or completed (DNS, connect, timeout, bad URL).
    #[error("request to {url} failed")]
    UnreachableSource {
        url: String,
        #[source]
        source: TransportError,
    },

    /// Final response status was above 299.
    #[error("{url} returned HTTP {status}")]
    UnexpectedStatus { url: String, status: u32 },

    /// Server did not send `Accept-Ranges: bytes`.
    #[error("{url} does not accept byte ranges (Accept-Ranges: {})", .accept_ranges.as_deref().unwrap_or("<absent>"))]
    RangeUnsupported {
        url: String,
        accept_ranges: Option<String>,
    },

    /// `Content-Length` was absent or not a number.
    #[error("{url} did not report a usable Content-Length")]
    MissingLength { url: String },

    #[error("cannot split {total_size} bytes into {part_count} parts")]
    InvalidPlan { total_size: u64, part_count: usize },

    /// A part's body did not match its planned range length.
    #[error("part {index}: expected {expected} bytes, received {received}")]
    LengthMismatch {
        index: usize,
        expected: u64,
        received: u64,
    },

    /// The task for a part could not be spawned or panicked.
    #[error("part {index}: task failed: {reason}")]
    PartTaskFailed { index: usize, reason: String },

    /// One or more planned parts have no result after the join barrier.
    #[error("{} part(s) missing after fetch: {}", .missing.len(), describe_failures(.failures))]
    PartialDownload {
        missing: Vec<usize>,
        failures: Vec<PartFailure>,
    },

    #[error("failed to create output file {}", .path.display())]
    OutputCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file {}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Merged byte count differs from the probed size.
    #[error("merged file is {written} bytes, expected {expected}")]
    IncompleteFile { expected: u64, written: u64 },

    #[error("SHA-256 mismatch: expected {expected}, computed {actual}")]
    IntegrityMismatch { expected: String, actual: String },
}

impl DownloadError {
    pub fn phase(&self) -> Phase {
        match self {
            DownloadError::UnreachableSource { .. }
            | DownloadError::UnexpectedStatus { .. }
            | DownloadError::RangeUnsupported { .. }
            | DownloadError::MissingLength { .. } => Phase::Probe,
            DownloadError::InvalidPlan { .. } => Phase::Plan,
            DownloadError::LengthMismatch { .. }
            | DownloadError::PartTaskFailed { .. }
            | DownloadError::PartialDownload { .. } => Phase::Fetch,
            DownloadError::OutputCreateFailed { .. }
            | DownloadError::OutputWriteFailed { .. }
            | DownloadError::IncompleteFile { .. }
            | DownloadError::IntegrityMismatch { .. } => Phase::Merge,
        }
    }
}

fn describe_failures(failures: &[PartFailure]) -> String {
    if failures.is_empty() {
        return "no failure recorded".to_string();
    }
    failures
        .iter()
        .map(|f| match &f.error {
            // Include the transport cause; Display of the outer variant omits it.
            DownloadError::UnreachableSource { source, .. } => {
                format!("[{}] {}: {}", f.index, f.error, source)
            }
            other => format!("[{}] {}", f.index, other),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
