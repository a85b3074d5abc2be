//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for output files
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for the outputs about to be written
    pub fn init_outputs(&mut self, total_outputs: u64) {
        if self.quiet {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} outputs {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");

        self.progress_bar = Some(ProgressBar::new(total_outputs).with_style(style));
    }

    /// Update progress for a written output
    pub fn output_written(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Wrote: {}", name));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    /// Abandon the bar after a failure, leaving it at its current position
    pub fn abandon(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.abandon_with_message("Failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_outputs(3);
        assert!(reporter.progress_bar.is_none());
        reporter.output_written("a.txt");
        reporter.finish();
    }

    #[test]
    fn test_reporter_counts_outputs() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_outputs(3);
        reporter.output_written("a.txt");
        reporter.output_written("b.txt");

        let pb = reporter.progress_bar.as_ref().unwrap();
        assert_eq!(pb.position(), 2);
        assert_eq!(pb.length(), Some(3));
        reporter.finish();
    }
}
