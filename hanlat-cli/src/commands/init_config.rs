//! Init-config command implementation

use crate::config::{HanlatConfig, OutputConfig};
use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// The `[output]` table on its own; `[punctuation]` is written by hand
#[derive(Serialize)]
struct OutputSection<'a> {
    output: &'a OutputConfig,
}

/// Arguments for the init-config command
#[derive(Debug, Args)]
pub struct InitConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "hanlat.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitConfigArgs {
    /// Execute the init-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let template = self.generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!("Use it with: hanlat --config {} <FILE>", self.output.display());

        Ok(())
    }

    /// Default settings as TOML, followed by the commented punctuation overrides
    fn generate_template(&self) -> Result<String> {
        let defaults = HanlatConfig::default();
        let output = toml::to_string_pretty(&OutputSection {
            output: &defaults.output,
        })
        .context("Failed to serialize default configuration")?;

        Ok(format!(
            r##"# hanlat configuration

{output}
[punctuation]
# Each override is a string of characters replacing a built-in table.
# splitter       - lines are broken after these in the three-file split
# sentence_break - lines are broken after these by `hanlat break`
# filter         - lines made only of these are dropped by the split
#
# splitter = "︱|丨，,。.?？/\\、：;；:—…\"“”！!"
# sentence_break = "，。？：！；、…—"
# filter = ".,!?;:'【】。、：；…—！丨︱-"
"##
        ))
    }
}
