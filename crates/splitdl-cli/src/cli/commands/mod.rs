//! CLI command handlers, one file per command.

mod checksum;
mod docs;
mod get;
mod plan;
mod probe;

pub use checksum::run_checksum;
pub use docs::{run_completions, run_man};
pub use get::run_get;
pub use plan::run_plan;
pub use probe::run_probe;
