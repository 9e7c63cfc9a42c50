//! Init command implementation

use std::path::Path;

use clap::Args;
use my_npx_core::{init_config, NpxError, CONFIG_FILE_NAME};
use tracing::{debug, info};

/// Init command arguments
#[derive(Args, Debug)]
pub struct InitCommand {}

impl InitCommand {
    /// Execute the init command in `dir`
    pub fn execute(&self, dir: &Path) -> Result<(), NpxError> {
        debug!("Initializing configuration in: {}", dir.display());

        let path = init_config(dir)?;
        info!("Created: {}", path.display());

        println!("{} has been created successfully.", CONFIG_FILE_NAME);

        Ok(())
    }
}
