//! Generates a wire-format bridge plan on stdout.
//!
//! Usage: `gen-input [ISLANDS] [BRIDGES] [SEED]` (defaults: 1000 islands,
//! 10000 bridges, seed 42). Pipe into the CLI:
//!
//! ```text
//! cargo run -p pontis-bench --bin gen-input -- 500 5000 | pontis solve -
//! ```

use std::error::Error;
use std::io::{BufWriter, Write as _};

use pontis_bench::random_records;
use pontis_core::Company;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    let island_count: u64 = parse_arg(&args, 1)?.unwrap_or(1_000);
    let bridge_count: usize = parse_arg(&args, 2)?.unwrap_or(10_000);
    let seed: u64 = parse_arg(&args, 3)?.unwrap_or(42);

    eprintln!(
        "generating {bridge_count} candidate bridges over {island_count} islands (seed {seed})"
    );
    let records = random_records(island_count, bridge_count, seed);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    writeln!(out, "{island_count} {bridge_count}")?;
    for record in &records {
        let tag = match record.company {
            Company::Red => 'r',
            Company::Blue => 'b',
        };
        writeln!(out, "{} {} {} {tag}", record.from, record.to, record.cost)?;
    }
    out.flush()?;

    Ok(())
}

/// Parses the positional argument at `index`, or `None` if absent.
fn parse_arg<T: std::str::FromStr>(
    args: &[String],
    index: usize,
) -> Result<Option<T>, Box<dyn Error>>
where
    T::Err: Error + 'static,
{
    match args.get(index) {
        Some(raw) => Ok(Some(raw.parse()?)),
        None => Ok(None),
    }
}
