//! Interactive input selection

use crate::error::CliError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a picker returned no path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    /// The user dismissed the dialog
    #[error("cancelled")]
    Cancelled,
    /// The dialog could not be shown
    #[error("{0}")]
    Failed(String),
}

impl From<PickError> for CliError {
    fn from(err: PickError) -> Self {
        match err {
            PickError::Cancelled => CliError::PickerCancelled,
            PickError::Failed(msg) => CliError::PickerFailure(msg),
        }
    }
}

/// Blocking source of an input path
pub trait FilePicker {
    /// Ask for a file
    fn pick(&self) -> Result<PathBuf, PickError>;
}

/// Native open-file dialog filtered to text files
#[derive(Debug, Clone)]
pub struct DialogPicker {
    title: String,
}

impl DialogPicker {
    /// Create a picker with the given window title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for DialogPicker {
    fn default() -> Self {
        Self::new("Select Input File")
    }
}

impl FilePicker for DialogPicker {
    #[cfg(feature = "dialog")]
    fn pick(&self) -> Result<PathBuf, PickError> {
        if cfg!(target_os = "linux")
            && std::env::var_os("DISPLAY").is_none()
            && std::env::var_os("WAYLAND_DISPLAY").is_none()
        {
            return Err(PickError::Failed(
                "no graphical session available; pass the input file as an argument".to_string(),
            ));
        }

        log::debug!("Opening file dialog: {}", self.title);
        rfd::FileDialog::new()
            .set_title(&self.title)
            .add_filter("Text Files", &["txt"])
            .pick_file()
            .ok_or(PickError::Cancelled)
    }

    #[cfg(not(feature = "dialog"))]
    fn pick(&self) -> Result<PathBuf, PickError> {
        Err(PickError::Failed(format!(
            "built without file dialog support ({}); pass the input file as an argument",
            self.title
        )))
    }
}

/// Use `explicit` when given, otherwise ask `picker`
pub fn resolve_input(
    explicit: Option<PathBuf>,
    picker: &dyn FilePicker,
) -> Result<PathBuf, CliError> {
    match explicit {
        Some(path) => Ok(path),
        None => {
            let path = picker.pick()?;
            println!("Selected input file: {}", path.display());
            Ok(path)
        }
    }
}
