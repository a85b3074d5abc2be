//! Split-and-clean pipelines

use crate::charset::{CharClass, CharSet};
use crate::cleaner;
use crate::error::{CoreError, Result};
use crate::splitter;

/// A splitter set plus an optional punctuation-only filter
///
/// `run` applies split, then the punctuation-only filter, then the blank-line
/// filter. The two built-in entry points differ only in their sets.
pub struct Pipeline {
    splitter: Box<dyn CharSet>,
    filter: Option<Box<dyn CharSet>>,
}

impl Pipeline {
    /// Pipeline used for the three category outputs
    pub fn mixed() -> Self {
        Self {
            splitter: Box::new(CharClass::SplitterPunctuation),
            filter: Some(Box::new(CharClass::PunctuationOnly)),
        }
    }

    /// Pipeline used to break a whole file after Chinese sentence punctuation
    pub fn sentence_break() -> Self {
        Self {
            splitter: Box::new(CharClass::SentenceBreak),
            filter: None,
        }
    }

    /// Create a builder starting from the mixed pipeline's sets
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Name of the splitter set
    pub fn splitter_name(&self) -> &str {
        self.splitter.name()
    }

    /// Name of the punctuation-only filter set, if any
    pub fn filter_name(&self) -> Option<&str> {
        self.filter.as_deref().map(|set| set.name())
    }

    /// Split and clean `buffer`
    pub fn run(&self, buffer: &str) -> String {
        let split = splitter::split_after(buffer, self.splitter.as_ref());
        log::trace!(
            "split on {}: {} -> {} lines",
            self.splitter.name(),
            splitter::line_count(buffer),
            splitter::line_count(&split)
        );
        cleaner::clean(&split, self.filter.as_deref())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::mixed()
    }
}

/// Builder for pipelines with substituted character sets
pub struct PipelineBuilder {
    splitter: Box<dyn CharSet>,
    filter: Option<Box<dyn CharSet>>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        let Pipeline { splitter, filter } = Pipeline::mixed();
        Self { splitter, filter }
    }
}

impl PipelineBuilder {
    /// Start from the sentence-break pipeline's sets
    pub fn sentence_break() -> Self {
        let Pipeline { splitter, filter } = Pipeline::sentence_break();
        Self { splitter, filter }
    }

    /// Set the characters lines are broken after
    pub fn splitter(mut self, set: impl CharSet + 'static) -> Self {
        self.splitter = Box::new(set);
        self
    }

    /// Set the punctuation-only filter
    pub fn filter(mut self, set: impl CharSet + 'static) -> Self {
        self.filter = Some(Box::new(set));
        self
    }

    /// Disable the punctuation-only filter
    pub fn without_filter(mut self) -> Self {
        self.filter = None;
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Result<Pipeline> {
        for set in std::iter::once(&self.splitter).chain(self.filter.iter()) {
            if set.is_empty() {
                return Err(CoreError::EmptyCharSet {
                    name: set.name().to_string(),
                });
            }
        }

        Ok(Pipeline {
            splitter: self.splitter,
            filter: self.filter,
        })
    }
}
