//! Top-level argument parsing and dispatch

use crate::commands::split::SplitArgs;
use crate::commands::Commands;
use crate::config::HanlatConfig;
use crate::input::{DialogPicker, FilePicker};
use crate::CliResult;
use clap::Parser;
use std::path::PathBuf;

/// Split mixed Chinese and English text into per-script files
#[derive(Debug, Parser)]
#[command(name = "hanlat", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Command to run (default: split)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default split command
    #[command(flatten)]
    pub split: SplitArgs,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true, env = "HANLAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Run the selected command with the native file picker
    pub fn run(&self) -> CliResult<()> {
        self.run_with(&DialogPicker::default())
    }

    /// Run the selected command, asking `picker` when no input is given
    pub fn run_with(&self, picker: &dyn FilePicker) -> CliResult<()> {
        if let Some(Commands::InitConfig(args)) = &self.command {
            return args.execute();
        }

        let config = HanlatConfig::load_or_default(self.config.as_deref())?;
        log::debug!("Configuration: {:?}", config);

        match &self.command {
            Some(Commands::Break(args)) => args.execute(&config, picker).map(drop),
            Some(Commands::Split(args)) => args.execute(&config, picker, self.quiet).map(drop),
            Some(Commands::InitConfig(_)) => Ok(()),
            None => self.split.execute(&config, picker, self.quiet).map(drop),
        }
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) -> CliResult<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()?;
        }

        Ok(())
    }
}
