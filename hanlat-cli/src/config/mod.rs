//! Configuration module

use crate::error::CliError;
use hanlat_core::{Category, CustomSet, Pipeline, PipelineBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct HanlatConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Punctuation table overrides
    #[serde(default)]
    pub punctuation: PunctuationConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the three category files are written to
    pub dir: PathBuf,

    /// File name for Chinese-run segments
    pub chinese_file: String,

    /// File name for Latin-run segments
    pub latin_file: String,

    /// File name for the combined segments
    pub combined_file: String,

    /// Suffix appended to the input stem in sentence-break mode
    pub sentence_break_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            chinese_file: Category::Chinese.default_file_name().to_string(),
            latin_file: Category::Latin.default_file_name().to_string(),
            combined_file: Category::Combined.default_file_name().to_string(),
            sentence_break_suffix: "_sc".to_string(),
        }
    }
}

impl OutputConfig {
    /// File name configured for `category`
    pub fn file_name(&self, category: Category) -> &str {
        match category {
            Category::Chinese => &self.chinese_file,
            Category::Latin => &self.latin_file,
            Category::Combined => &self.combined_file,
        }
    }
}

/// Punctuation overrides; each value is a string of member characters
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PunctuationConfig {
    /// Characters the mixed split breaks lines after
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splitter: Option<String>,

    /// Characters the sentence-break mode breaks lines after
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_break: Option<String>,

    /// Characters that make a line punctuation-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl HanlatConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `path` when given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Pipeline for the three category outputs
    pub fn mixed_pipeline(&self) -> Result<Pipeline, CliError> {
        let mut builder = Pipeline::builder();
        if let Some(chars) = &self.punctuation.splitter {
            builder = builder.splitter(CustomSet::new("punctuation.splitter", chars));
        }
        if let Some(chars) = &self.punctuation.filter {
            builder = builder.filter(CustomSet::new("punctuation.filter", chars));
        }
        Ok(builder.build()?)
    }

    /// Pipeline for the sentence-break mode
    pub fn sentence_break_pipeline(&self) -> Result<Pipeline, CliError> {
        let mut builder = PipelineBuilder::sentence_break();
        if let Some(chars) = &self.punctuation.sentence_break {
            builder = builder.splitter(CustomSet::new("punctuation.sentence_break", chars));
        }
        Ok(builder.build()?)
    }

    /// Destination of the `category` output
    pub fn output_path(&self, category: Category) -> PathBuf {
        self.output.dir.join(self.output.file_name(category))
    }
}
