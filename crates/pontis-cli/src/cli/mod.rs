//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pontis_core::Strategy;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. This avoids stringly-typed handling of the
/// stdin sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits plain text to stdout — for `solve` that is exactly the
/// two company totals on one line. `Json` emits a single structured JSON
/// object instead.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// Ordering strategy selection for the `solve` subcommand.
///
/// Mirrors [`pontis_core::Strategy`]; kept separate so the core stays
/// free of clap derives.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyArg {
    /// LSD radix sort over the packed weight (default).
    Radix,
    /// Max-heap with repeated extraction.
    Heap,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Radix => Strategy::Radix,
            StrategyArg::Heap => Strategy::Heap,
        }
    }
}

/// All top-level subcommands exposed by the `pontis` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Select the maximum-weight spanning forest and print company totals.
    Solve {
        /// Path to a bridge plan, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Ordering strategy: radix (default) or heap.
        #[arg(long, default_value = "radix", value_enum)]
        strategy: StrategyArg,
    },

    /// Print summary statistics for a bridge plan.
    Inspect {
        /// Path to a bridge plan, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `pontis` binary.
///
/// Global flags are marked `global = true` so that clap propagates them
/// to every subcommand.
#[derive(Parser)]
#[command(
    name = "pontis",
    version,
    about = "Bridge network planner",
    long_about = "Selects the maximum-weight spanning forest from a plan of\n\
                  candidate bridges offered by two competing companies and\n\
                  reports each company's total payout."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `PONTIS_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "PONTIS_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}

#[cfg(test)]
mod tests;
