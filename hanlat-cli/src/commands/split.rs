//! Split command implementation

use crate::config::HanlatConfig;
use crate::input::{resolve_input, FilePicker, FileReader};
use crate::output::write_text;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use hanlat_core::{Category, CategoryBuffers};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args, Default)]
pub struct SplitArgs {
    /// Input text file (opens a file picker when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory for the three output files (default: from config, else ".")
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl SplitArgs {
    /// Execute the split command, returning the written paths in category order
    pub fn execute(
        &self,
        config: &HanlatConfig,
        picker: &dyn FilePicker,
        quiet: bool,
    ) -> Result<Vec<PathBuf>> {
        let input = resolve_input(self.input.clone(), picker)?;
        let pipeline = config.mixed_pipeline()?;

        log::info!("Splitting {}", input.display());
        let text = FileReader::read_text(&input)?;
        let buffers = CategoryBuffers::from_text(&text);
        for category in Category::ALL {
            log::debug!(
                "{} segments: {}",
                category,
                buffers.segment_count(category)
            );
        }

        let dir = self.output_dir.as_deref().unwrap_or(config.output.dir.as_path());
        let mut progress = ProgressReporter::new(quiet);
        progress.init_outputs(Category::ALL.len() as u64);

        let mut written = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let name = config.output.file_name(category);
            let path = dir.join(name);
            let rendered = buffers.render(category, &pipeline);

            if let Err(e) = write_text(&path, &rendered) {
                progress.abandon();
                return Err(e.into());
            }
            progress.output_written(name);
            written.push(path);
        }
        progress.finish();

        for (category, path) in Category::ALL.iter().zip(&written) {
            println!("Saved {} output to: {}", category, path.display());
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::input::PickError;
    use std::fs;
    use tempfile::TempDir;

    struct NoPicker;

    impl FilePicker for NoPicker {
        fn pick(&self) -> Result<PathBuf, PickError> {
            Err(PickError::Cancelled)
        }
    }

    fn run(input: &str) -> (TempDir, Vec<String>) {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("input.txt");
        fs::write(&input_path, input).unwrap();

        let args = SplitArgs {
            input: Some(input_path),
            output_dir: Some(temp_dir.path().to_path_buf()),
        };
        let written = args
            .execute(&HanlatConfig::default(), &NoPicker, true)
            .unwrap();
        let contents = written
            .iter()
            .map(|path| fs::read_to_string(path).unwrap())
            .collect();
        (temp_dir, contents)
    }

    #[test]
    fn test_split_writes_three_files() {
        let (temp_dir, contents) = run("Hello, 世界！How are you?\n你好，world!");

        for name in [
            "pure_chinese_sentences.txt",
            "pure_english_sentences.txt",
            "combined_sentences.txt",
        ] {
            assert!(temp_dir.path().join(name).exists(), "missing {name}");
        }
        assert_eq!(contents[0], "世界！\n你好，");
        assert_eq!(contents[1], "Hello,\nHow are you?\nworld!");
        assert_eq!(
            contents[2],
            "世界！\nHello,\nHow are you?\n你好，\nworld!"
        );
    }

    #[test]
    fn test_split_punctuation_only_input() {
        let (_temp_dir, contents) = run(".,!?");
        assert_eq!(contents, vec!["", "", ""]);
    }

    #[test]
    fn test_split_without_input_asks_picker() {
        let args = SplitArgs::default();
        let error = args
            .execute(&HanlatConfig::default(), &NoPicker, true)
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::PickerCancelled)
        ));
    }

    #[test]
    fn test_split_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let args = SplitArgs {
            input: Some(temp_dir.path().join("missing.txt")),
            output_dir: Some(temp_dir.path().to_path_buf()),
        };
        let error = args
            .execute(&HanlatConfig::default(), &NoPicker, true)
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::InputRead { .. })
        ));
        assert!(!temp_dir.path().join("pure_chinese_sentences.txt").exists());
    }

    #[test]
    fn test_split_unwritable_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("input.txt");
        fs::write(&input_path, "你好").unwrap();

        let args = SplitArgs {
            input: Some(input_path),
            output_dir: Some(temp_dir.path().join("no").join("such").join("dir")),
        };
        let error = args
            .execute(&HanlatConfig::default(), &NoPicker, true)
            .unwrap_err();
        let message = error.to_string();
        assert!(message.contains("pure_chinese_sentences.txt"), "{message}");
    }
}
