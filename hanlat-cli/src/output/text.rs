//! Plain text output files

use crate::error::CliError;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

fn create(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path)
}

/// Write `content` to `path` as UTF-8, replacing any existing file
pub fn write_text(path: &Path, content: &str) -> Result<(), CliError> {
    let to_error = |source: io::Error| CliError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(create(path).map_err(to_error)?);
    writer.write_all(content.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Sibling of `input` named `<stem><suffix><ext>`
///
/// The extension starts at the last `.` of the file name, so a dotfile such
/// as `.notes` is all extension and becomes `_sc.notes`. Non-UTF-8 names are
/// kept byte for byte.
pub fn sentence_break_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::new();
    match (input.file_stem(), input.extension()) {
        (Some(stem), Some(ext)) => {
            name.push(stem);
            name.push(suffix);
            name.push(".");
            name.push(ext);
        }
        (Some(stem), None) if stem.as_encoded_bytes().starts_with(b".") => {
            name.push(suffix);
            name.push(stem);
        }
        (Some(stem), None) => {
            name.push(stem);
            name.push(suffix);
        }
        (None, _) => name.push(suffix),
    }
    input.with_file_name(name)
}
