//! Core logic for my-npx-command
//!
//! This crate contains the configuration model, the error type, and the
//! file operations backing the `init` and `hello` commands.

pub mod config;
pub mod error;
pub mod ops;

pub use config::{Config, CONFIG_FILE_NAME, DEFAULT_NAME};
pub use error::{NpxError, Result};
pub use ops::{init_config, load_config};
