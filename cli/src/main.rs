mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, check};
use terminal::{logging, print};
use tracing::error;

/// Exit code for configuration and environment errors.
const FATAL_EXIT_CODE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    print::header("pingsheet");

    match check::check(&commands).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}
