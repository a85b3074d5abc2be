//! Error handling for the CLI application

use hanlat_core::CoreError;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// CLI-specific errors, one per failing stage
#[derive(Error, Debug)]
pub enum CliError {
    /// The user dismissed the file picker
    #[error("file selection was cancelled")]
    PickerCancelled,

    /// The file picker could not be shown
    #[error("file picker failed: {0}")]
    PickerFailure(String),

    /// The input file could not be opened or read as UTF-8
    #[error("failed to read input file {}: {source}", path.display())]
    InputRead {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An output file could not be created or written
    #[error("failed to write output file {}: {source}", path.display())]
    OutputWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration file is unreadable or invalid
    #[error("configuration error in {}: {message}", path.display())]
    Config {
        /// Configuration file path
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// Pipeline assembly error from core
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// How a failed run is reported to the user
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Informational line on stdout; the process still exits 0
    Notice(String),
    /// Error line on stderr; the process exits 1
    Failure(String),
}

impl Outcome {
    /// Classify an error returned by a command
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<CliError>() {
            Some(CliError::PickerCancelled) => {
                Outcome::Notice("File selection was cancelled.".to_string())
            }
            _ => Outcome::Failure(format!("Error: {error:#}")),
        }
    }

    /// Whether the process should exit 0
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Notice(_))
    }

    /// Print the message to its stream and return the exit code
    pub fn emit(&self) -> ExitCode {
        match self {
            Outcome::Notice(message) => {
                println!("{message}");
                ExitCode::SUCCESS
            }
            Outcome::Failure(message) => {
                eprintln!("{message}");
                ExitCode::FAILURE
            }
        }
    }
}
