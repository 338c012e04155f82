use std::process::ExitCode;

use bankist::{app, telemetry};
use clap::Parser;

fn main() -> ExitCode {
    let cli = app::Cli::parse();
    telemetry::init(&cli.log_level);

    match app::execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
