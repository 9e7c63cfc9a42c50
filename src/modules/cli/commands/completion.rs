//! Hidden command to generate shell completions.

use std::io::Write;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

/// Generate shell completion scripts.
///
/// Hidden from `--help`; installers and packaging scripts call it.
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Shell to generate completions for (e.g. bash, zsh)
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionCommand {
    pub fn execute(&self) {
        self.write_to(&mut std::io::stdout());
    }

    fn write_to(&self, out: &mut dyn Write) {
        let mut cmd = crate::Cli::command();
        generate(self.shell, &mut cmd, "my-npx-command", out);
    }
}
