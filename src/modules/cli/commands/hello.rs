//! Hello command implementation

use std::path::Path;

use clap::Args;
use my_npx_core::{load_config, NpxError};
use tracing::debug;

/// Hello command arguments
#[derive(Args, Debug)]
pub struct HelloCommand {}

impl HelloCommand {
    /// Execute the hello command in `dir`
    pub fn execute(&self, dir: &Path) -> Result<(), NpxError> {
        debug!("Loading configuration from: {}", dir.display());

        let config = load_config(dir)?;
        println!("{}", config.greeting());

        Ok(())
    }
}
