//! CLI commands

mod completion;
mod hello;
mod init;

pub use completion::CompletionCommand;
pub use hello::HelloCommand;
pub use init::InitCommand;

use clap::{Parser, Subcommand};

/// my-npx-command - sample npx command
#[derive(Parser, Debug)]
#[command(name = "my-npx-command")]
#[command(author, version, about = "sample npx command", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize my-npx-config.json
    Init(InitCommand),

    /// Say hello to someone.
    Hello(HelloCommand),

    /// Generate shell completion scripts
    #[command(hide = true)]
    Completion(CompletionCommand),
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
