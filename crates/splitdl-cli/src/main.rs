use splitdl_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Fall back to stderr when the state dir is not writable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args().await {
        match err.downcast_ref::<clap::Error>() {
            // Already formatted with usage and hints.
            Some(usage) => eprint!("{}", usage),
            None => eprintln!("splitdl error: {:#}", err),
        }
        std::process::exit(cli::exit_code(&err));
    }
}
