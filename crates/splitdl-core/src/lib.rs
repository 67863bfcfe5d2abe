pub mod config;
pub mod logging;

pub mod checksum;
pub mod downloader;
pub mod error;
pub mod job;
pub mod probe;
pub mod segmenter;
pub mod storage;
pub mod transport;
pub mod url_model;

pub use error::{DownloadError, PartFailure, Phase};
pub use job::{download_async, DownloadRequest, Downloader};
pub use probe::ProbeResult;
pub use segmenter::{plan_parts, PartPlan, PartRange};
pub use storage::MergedFile;
