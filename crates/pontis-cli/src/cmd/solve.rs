//! Implementation of `pontis solve <file>`.
//!
//! Parses a bridge plan, runs the forest builder with the selected
//! ordering strategy, and prints the two company totals to stdout:
//! red first, then blue, space-separated on one line. In `--format json`
//! mode a single JSON object is emitted instead.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use pontis_core::{ForestTotals, Strategy, parse_plan, solve};

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `solve` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] if `content` is not a valid plan,
/// or [`CliError::IoError`] if stdout cannot be written.
pub fn run(content: &str, strategy: Strategy, format: &OutputFormat) -> Result<(), CliError> {
    let plan = parse_plan(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;

    let totals = solve(plan, strategy);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, totals),
        OutputFormat::Json => print_json(&mut out, totals),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes the totals as `"<red> <blue>\n"`.
fn print_human<W: std::io::Write>(w: &mut W, totals: ForestTotals) -> std::io::Result<()> {
    writeln!(w, "{} {}", totals.red, totals.blue)
}

/// Writes the totals as a single pretty-printed JSON object.
fn print_json<W: std::io::Write>(w: &mut W, totals: ForestTotals) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(&totals).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
