//! CLI command implementations

use clap::Subcommand;

pub mod init_config;
pub mod sentence_break;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split mixed text into Chinese, English and combined files (default)
    Split(split::SplitArgs),

    /// Break a file after Chinese sentence punctuation into <stem>_sc<ext>
    Break(sentence_break::BreakArgs),

    /// Write a configuration file with the default settings
    InitConfig(init_config::InitConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let split_cmd = Commands::Split(split::SplitArgs {
            input: Some(PathBuf::from("test.txt")),
            output_dir: None,
        });

        let debug_str = format!("{:?}", split_cmd);
        assert!(debug_str.contains("Split"));
        assert!(debug_str.contains("test.txt"));

        let break_cmd = Commands::Break(sentence_break::BreakArgs {
            input: Some(PathBuf::from("novel.txt")),
        });

        let debug_str = format!("{:?}", break_cmd);
        assert!(debug_str.contains("Break"));
        assert!(debug_str.contains("novel.txt"));
    }

    #[test]
    fn test_enum_variants_completeness() {
        let init_cmd = Commands::InitConfig(init_config::InitConfigArgs {
            output: PathBuf::from("hanlat.toml"),
            force: false,
        });

        match init_cmd {
            Commands::InitConfig(args) => assert!(!args.force),
            Commands::Split(_) | Commands::Break(_) => panic!("Should be InitConfig"),
        }
    }
}
