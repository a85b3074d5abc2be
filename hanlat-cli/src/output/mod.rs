//! Output writing module

pub mod text;

pub use text::{sentence_break_path, write_text};
