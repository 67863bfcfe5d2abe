use std::path::PathBuf;

use crate::config::SplitConfig;

/// One download: where from, how many parts, where to, and what to expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub part_count: usize,
    /// Defaults to the current working directory.
    pub output_dir: Option<PathBuf>,
    /// Overrides the probed filename.
    pub file_name: Option<String>,
    /// Hex SHA-256 the merged file must match (any case).
    pub expected_sha256: Option<String>,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>, part_count: usize) -> Self {
        Self {
            url: url.into(),
            part_count,
            output_dir: None,
            file_name: None,
            expected_sha256: None,
        }
    }

    /// Request using the configured part count.
    pub fn from_config(url: impl Into<String>, cfg: &SplitConfig) -> Self {
        Self::new(url, cfg.parts)
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn expected_sha256(mut self, hex: impl Into<String>) -> Self {
        self.expected_sha256 = Some(hex.into());
        self
    }
}
