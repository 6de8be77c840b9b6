//! pagesplit command-line entry point

use clap::Parser;
use pagesplit_cli::commands::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            eprintln!();
            eprintln!("{err:?}");
            ExitCode::FAILURE
        }
    }
}
