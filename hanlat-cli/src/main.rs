use clap::Parser;
use hanlat_cli::{Cli, Outcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = cli.init_logging() {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            Outcome::from_error(&e).emit()
        }
    }
}
