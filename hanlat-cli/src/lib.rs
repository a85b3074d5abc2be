//! hanlat CLI library
//!
//! This library provides the command-line interface for splitting mixed
//! Chinese and English text into per-script files.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use cli::Cli;
pub use error::{CliError, CliResult, Outcome};
