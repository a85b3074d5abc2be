//! Script-aware segmentation for mixed Chinese and English text
//!
//! This crate splits mixed-script prose into Chinese-run and Latin-run
//! segments, breaks the result into lines after punctuation and removes
//! blank or punctuation-only lines. It performs no I/O.
//!
//! # Example
//!
//! ```rust
//! use hanlat_core::{Category, CategoryBuffers, Pipeline};
//!
//! let buffers = CategoryBuffers::from_text("Hello, 世界！How are you?");
//! let pipeline = Pipeline::mixed();
//!
//! assert_eq!(buffers.render(Category::Chinese, &pipeline), "世界！");
//! assert_eq!(
//!     buffers.render(Category::Latin, &pipeline),
//!     "Hello,\nHow are you?"
//! );
//! ```

#![warn(missing_docs)]

pub mod category;
pub mod charset;
pub mod cleaner;
pub mod error;
pub mod extractor;
pub mod joiner;
pub mod pipeline;
pub mod splitter;

pub use category::{Category, CategoryBuffers};
pub use charset::{CharClass, CharSet, CustomSet};
pub use error::{CoreError, Result};
pub use extractor::{extract, Segments};
pub use joiner::join;
pub use pipeline::{Pipeline, PipelineBuilder};
pub use splitter::split_after;
