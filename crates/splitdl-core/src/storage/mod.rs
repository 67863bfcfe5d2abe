//! Output file assembly.
//!
//! After the fetch barrier, writes every part to `<dir>/<name>` in plan order,
//! hashing as it goes, then checks the byte count and optional digest.

mod merge;

pub use merge::{assemble, MergedFile};
