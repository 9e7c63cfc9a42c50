//! my-npx-command CLI
//!
//! Command-line entry point: parses arguments, dispatches to a command and
//! turns errors into the process exit code.

use my_npx_cli::{Cli, Commands};
use my_npx_core::NpxError;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), NpxError> {
    let cli = Cli::parse_args();

    // Initialize logging on stderr; stdout carries command output only
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cwd = std::env::current_dir()?;

    // Execute command
    let result = match cli.command {
        Commands::Init(cmd) => cmd.execute(&cwd),
        Commands::Hello(cmd) => cmd.execute(&cwd),
        Commands::Completion(cmd) => {
            cmd.execute();
            Ok(())
        }
    };

    if let Err(e) = &result {
        if !e.is_precondition() {
            debug!("Command failed: {:?}", e);
        }
    }

    result
}
