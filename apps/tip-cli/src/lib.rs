//! # Tip Calc Command-Line Front End
//!
//! Drives the `tip-core` engine from files and flags and prints JSON.
//!
//! ## Module Organization
//! ```text
//! tip-cli/src/
//! ├── main.rs         ◄─── Binary entry, exit codes
//! ├── lib.rs          ◄─── You are here (arguments, logging, dispatch)
//! ├── config.rs       ◄─── AppConfig from TIP_* environment variables
//! ├── error.rs        ◄─── CliError { code, message }
//! └── commands/
//!     ├── session.rs  ◄─── Replay a message script
//!     ├── calc.rs     ◄─── One-shot calculation
//!     └── cases.rs    ◄─── Test-case catalogue listing
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap)                                              │
//! │  2. Load AppConfig from the environment                                 │
//! │  3. Initialize tracing on stderr                                        │
//! │     • RUST_LOG wins, then TIP_LOG, then "info,tip=debug"                │
//! │  4. Run the subcommand, print its JSON result on stdout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::calc::{CalcRequest, TipChoice};
use config::AppConfig;
use error::CliError;

/// Tip calculator engine driver.
#[derive(Parser, Debug)]
#[command(name = "tip-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a JSON array of form messages and print each render
    Session {
        /// Path to the message script
        script: PathBuf,

        /// Print only the render after the last message
        #[arg(long, default_value_t = false)]
        final_only: bool,
    },

    /// Compute the outputs for one set of field values
    Calc {
        /// Bill field text, e.g. "12,50"
        #[arg(short, long)]
        bill: String,

        /// Party size field text
        #[arg(short, long)]
        people: String,

        /// Preset tip percentage
        #[arg(long, conflicts_with = "custom")]
        preset: Option<u16>,

        /// Custom tip field text
        #[arg(long)]
        custom: Option<String>,
    },

    /// List a test-case catalogue grouped by section
    Cases {
        /// Path to the test-cases JSON file
        file: PathBuf,
    },
}

/// Parses arguments from the process and runs.
pub fn run() -> Result<(), CliError> {
    run_with(Cli::parse())
}

/// Runs an already-parsed command line.
pub fn run_with(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    info!(presets = ?config.presets.percents(), "tip-cli starting");

    match cli.command {
        Command::Session { script, final_only } => {
            let messages = commands::session::load_script(&script)?;
            let steps = commands::session::replay(&messages, config.presets, final_only)?;
            print_json(&steps)
        }
        Command::Calc {
            bill,
            people,
            preset,
            custom,
        } => {
            let tip = match (preset, custom) {
                (Some(percent), _) => TipChoice::Preset(percent),
                (None, Some(raw)) => TipChoice::Custom(raw),
                (None, None) => TipChoice::None,
            };
            let request = CalcRequest { bill, people, tip };
            let render = commands::calc::calculate(&request, config.presets)?;
            print_json(&render)
        }
        Command::Cases { file } => {
            let cases = commands::cases::load_cases(&file)?;
            print_json(&commands::cases::group_cases(cases))
        }
    }
}

/// Initializes the tracing subscriber on stderr.
///
/// `RUST_LOG` takes precedence over the configured filter. Safe to call
/// more than once; later calls are ignored.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calc_with_preset() {
        let cli = Cli::try_parse_from(["tip-cli", "calc", "--bill", "100", "--people", "2", "--preset", "10"])
            .unwrap();
        match cli.command {
            Command::Calc { bill, people, preset, custom } => {
                assert_eq!(bill, "100");
                assert_eq!(people, "2");
                assert_eq!(preset, Some(10));
                assert_eq!(custom, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_preset_conflicts_with_custom() {
        let result = Cli::try_parse_from([
            "tip-cli", "calc", "--bill", "100", "--people", "2", "--preset", "10", "--custom", "12",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_session() {
        let cli = Cli::try_parse_from(["tip-cli", "session", "demo.json", "--final-only"]).unwrap();
        match cli.command {
            Command::Session { script, final_only } => {
                assert_eq!(script, PathBuf::from("demo.json"));
                assert!(final_only);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
