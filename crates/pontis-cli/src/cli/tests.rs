//! Unit tests for CLI argument parsing.
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use clap::CommandFactory as _;
use clap::Parser as _;

use super::*;

#[test]
fn cli_definition_is_internally_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn solve_parses_a_file_path() {
    let cli = Cli::try_parse_from(["pontis", "solve", "plan.txt"]).expect("should parse");
    match cli.command {
        Command::Solve { file, .. } => match file {
            PathOrStdin::Path(p) => assert_eq!(p, PathBuf::from("plan.txt")),
            PathOrStdin::Stdin => panic!("expected a path"),
        },
        Command::Inspect { .. } => panic!("expected solve"),
    }
}

#[test]
fn dash_parses_as_stdin() {
    let cli = Cli::try_parse_from(["pontis", "solve", "-"]).expect("should parse");
    match cli.command {
        Command::Solve { file, .. } => assert!(matches!(file, PathOrStdin::Stdin)),
        Command::Inspect { .. } => panic!("expected solve"),
    }
}

#[test]
fn strategy_defaults_to_radix() {
    let cli = Cli::try_parse_from(["pontis", "solve", "plan.txt"]).expect("should parse");
    match cli.command {
        Command::Solve { strategy, .. } => {
            assert!(matches!(strategy, StrategyArg::Radix));
        }
        Command::Inspect { .. } => panic!("expected solve"),
    }
}

#[test]
fn heap_strategy_is_selectable() {
    let cli = Cli::try_parse_from(["pontis", "solve", "plan.txt", "--strategy", "heap"])
        .expect("should parse");
    match cli.command {
        Command::Solve { strategy, .. } => {
            assert!(matches!(strategy, StrategyArg::Heap));
        }
        Command::Inspect { .. } => panic!("expected solve"),
    }
}

#[test]
fn unknown_strategy_is_rejected() {
    let result = Cli::try_parse_from(["pontis", "solve", "plan.txt", "--strategy", "bogo"]);
    assert!(result.is_err());
}

#[test]
fn format_flag_is_global() {
    let cli = Cli::try_parse_from(["pontis", "inspect", "plan.txt", "--format", "json"])
        .expect("should parse");
    assert!(matches!(cli.format, OutputFormat::Json));
}

#[test]
fn strategy_arg_maps_onto_core_strategy() {
    assert_eq!(Strategy::from(StrategyArg::Radix), Strategy::Radix);
    assert_eq!(Strategy::from(StrategyArg::Heap), Strategy::Heap);
}

#[test]
fn max_file_size_has_a_default() {
    let cli = Cli::try_parse_from(["pontis", "inspect", "plan.txt"]).expect("should parse");
    assert_eq!(cli.max_file_size, 268_435_456);
}
