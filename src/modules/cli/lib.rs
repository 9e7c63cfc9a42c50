//! my-npx-command CLI
//!
//! This crate provides the command-line interface including:
//! - init: Create my-npx-config.json with default content
//! - hello: Print a greeting from my-npx-config.json

pub mod commands;

pub use commands::{Cli, Commands};
