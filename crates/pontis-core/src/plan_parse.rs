//! Wire-format ingestion for bridge plans.
//!
//! The format is a stream of unsigned integers and single-letter company
//! tags: `n m`, then `m` records of `from to cost company`. Anything
//! between tokens counts as separator — the scanner skips to the next
//! digit (or lowercase letter, for tags), so spaces, newlines, and
//! punctuation all work. A `r` tag assigns the bridge to red; any other
//! lowercase letter assigns it to blue. Trailing bytes after the last
//! record are ignored.
//!
//! The scanner owns its cursor state; parsing the same input twice, or
//! two inputs interleaved, cannot interfere.

use std::fmt;

use crate::bridge::{BridgePlan, BridgeRecord, PlanError};
use crate::weight::Company;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced while parsing a wire-format bridge plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanParseError {
    /// The input ended before the expected token appeared.
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// An integer token does not fit in 64 bits.
    ValueTooLarge {
        /// Which token overflowed.
        expected: &'static str,
    },
    /// The tokens parsed but failed plan validation.
    Plan(PlanError),
}

impl fmt::Display for PlanParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input while reading {expected}")
            }
            Self::ValueTooLarge { expected } => {
                write!(f, "{expected} does not fit in 64 bits")
            }
            Self::Plan(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for PlanParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Plan(err) => Some(err),
            Self::UnexpectedEnd { .. } | Self::ValueTooLarge { .. } => None,
        }
    }
}

impl From<PlanError> for PlanParseError {
    fn from(err: PlanError) -> Self {
        Self::Plan(err)
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Parses a wire-format bridge plan and validates it into a [`BridgePlan`].
///
/// # Errors
///
/// - [`PlanParseError::UnexpectedEnd`] — fewer tokens than the declared
///   bridge count requires.
/// - [`PlanParseError::ValueTooLarge`] — an integer token overflows.
/// - [`PlanParseError::Plan`] — tokens parsed but an endpoint or cost is
///   out of range (see [`PlanError`]).
pub fn parse_plan(input: &str) -> Result<BridgePlan, PlanParseError> {
    let mut scanner = Scanner::new(input);

    let island_count = scanner.next_uint("island count")?;
    let island_count = usize::try_from(island_count)
        .map_err(|_| PlanParseError::ValueTooLarge {
            expected: "island count",
        })?;
    let bridge_count = scanner.next_uint("bridge count")?;

    let mut records = Vec::with_capacity(plausible_capacity(bridge_count, input.len()));
    for _ in 0..bridge_count {
        let from = scanner.next_uint("bridge endpoint")?;
        let to = scanner.next_uint("bridge endpoint")?;
        let cost = scanner.next_uint("bridge cost")?;
        let company = match scanner.next_tag("company tag")? {
            b'r' => Company::Red,
            _ => Company::Blue,
        };
        records.push(BridgeRecord {
            from,
            to,
            cost,
            company,
        });
    }

    Ok(BridgePlan::new(island_count, records)?)
}

/// Bounds the records allocation by what the input could physically hold.
///
/// A record needs at least eight input bytes; a declared count beyond
/// that is a lie the scanner will expose on its own, and must not be
/// trusted with an allocation first.
fn plausible_capacity(declared: u64, input_len: usize) -> usize {
    let plausible = input_len / 8 + 1;
    usize::try_from(declared).map_or(plausible, |declared| declared.min(plausible))
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// Cursor over the raw input bytes.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    /// Skips to the next ASCII digit and accumulates the full run.
    fn next_uint(&mut self, expected: &'static str) -> Result<u64, PlanParseError> {
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos == self.bytes.len() {
            return Err(PlanParseError::UnexpectedEnd { expected });
        }

        let mut value: u64 = 0;
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_digit() {
            let digit = u64::from(self.bytes[self.pos] - b'0');
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or(PlanParseError::ValueTooLarge { expected })?;
            self.pos += 1;
        }
        Ok(value)
    }

    /// Skips to the next lowercase ASCII letter and consumes it.
    fn next_tag(&mut self, expected: &'static str) -> Result<u8, PlanParseError> {
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_lowercase() {
            self.pos += 1;
        }
        if self.pos == self.bytes.len() {
            return Err(PlanParseError::UnexpectedEnd { expected });
        }
        let tag = self.bytes[self.pos];
        self.pos += 1;
        Ok(tag)
    }
}
