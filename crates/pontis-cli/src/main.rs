//! Entry point for the `pontis` binary: parse arguments, read input,
//! dispatch to the subcommand, map failures to exit codes.
mod cli;
mod cmd;
mod error;
mod io;

use clap::Parser as _;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin, StrategyArg};

use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{}", err.message());
        std::process::exit(err.exit_code());
    }
}

/// Dispatches the parsed CLI to its subcommand implementation.
fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Solve { file, strategy } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::solve::run(&content, (*strategy).into(), &cli.format)
        }
        Command::Inspect { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::inspect::run(&content, &cli.format)
        }
    }
}
