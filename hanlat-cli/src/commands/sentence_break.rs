//! Sentence-break command implementation

use crate::config::HanlatConfig;
use crate::input::{resolve_input, FilePicker, FileReader};
use crate::output::{sentence_break_path, write_text};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the break command
#[derive(Debug, Args, Default)]
pub struct BreakArgs {
    /// Input text file (opens a file picker when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl BreakArgs {
    /// Execute the break command, returning the written path
    pub fn execute(&self, config: &HanlatConfig, picker: &dyn FilePicker) -> Result<PathBuf> {
        let input = resolve_input(self.input.clone(), picker)?;
        let pipeline = config.sentence_break_pipeline()?;
        let output = sentence_break_path(&input, &config.output.sentence_break_suffix);

        log::info!("Breaking {} into {}", input.display(), output.display());
        let text = FileReader::read_text(&input)?;
        let cleaned = pipeline.run(&text);
        write_text(&output, &cleaned)?;

        println!(
            "Processed file with empty lines removed has been saved to: {}",
            output.display()
        );
        Ok(output)
    }
}
