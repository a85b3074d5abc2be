//! File reading utilities

use crate::error::CliError;
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String, CliError> {
        let content = fs::read_to_string(path).map_err(|source| CliError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }
}
