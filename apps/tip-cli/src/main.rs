//! # tip-cli Entry Point
//!
//! Thin wrapper around [`tip_cli::run`]. Failures are printed to stderr as
//! a JSON `CliError` and the process exits with status 1.

use std::process::ExitCode;

fn main() -> ExitCode {
    match tip_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match serde_json::to_string(&err) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{err}"),
            }
            ExitCode::FAILURE
        }
    }
}
