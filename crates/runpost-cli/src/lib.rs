//! CLI, dataset loading, output formatting
//!
//! This crate provides the `runpost` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;

pub use cli::Cli;
pub use error::{ClientError, ClientResult};
