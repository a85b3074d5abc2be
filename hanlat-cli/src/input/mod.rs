//! Input handling module

pub mod file_reader;
pub mod picker;

pub use file_reader::FileReader;
pub use picker::{resolve_input, DialogPicker, FilePicker, PickError};
