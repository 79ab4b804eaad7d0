/// Command modules for the `pontis` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the input content and parsed arguments and returns
/// `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod inspect;
pub mod solve;
