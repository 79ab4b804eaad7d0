//! Packed sort keys for bridge weights.
//!
//! A bridge's cost and its owning company are packed into a single `u16`:
//! the cost occupies bits 0–13 and bit 14 is set for red bridges. The
//! mark bit artificially enlarges red costs, lifting every red key above
//! every blue key; in particular an equal-cost conflict between the two
//! companies always resolves in red's favor. Folding the company into
//! the key keeps both ordering strategies single-key, numeric-only
//! algorithms with no secondary comparator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of low bits reserved for the cost.
pub const COST_BITS: u32 = 14;

/// Largest cost that fits the packed representation (`2^14 - 1`).
pub const MAX_PACKABLE_COST: u16 = (1 << COST_BITS) - 1;

/// Mask selecting the cost bits of a packed key.
const COST_MASK: u16 = MAX_PACKABLE_COST;

/// Bit set on packed keys of red bridges.
const RED_MARK: u16 = 1 << COST_BITS;

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

/// One of the two construction companies competing for bridges.
///
/// When two bridges of equal cost connect the same pair of components and
/// only one can be selected, the red bridge wins. This preference is part
/// of the output contract, not an implementation accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Company {
    /// The tie-breaking company.
    Red,
    /// Loses ties against red at equal cost.
    Blue,
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("red"),
            Self::Blue => f.write_str("blue"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when packing a `(cost, company)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightError {
    /// The cost does not fit the 14-bit packed range `1..=16383`.
    CostOutOfRange {
        /// The rejected cost value.
        got: u64,
    },
}

impl fmt::Display for WeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CostOutOfRange { got } => {
                write!(f, "cost {got} outside packable range 1..={MAX_PACKABLE_COST}")
            }
        }
    }
}

impl std::error::Error for WeightError {}

// ---------------------------------------------------------------------------
// PackedWeight
// ---------------------------------------------------------------------------

/// A `(cost, company)` pair packed into one ordered integer key.
///
/// `PackedWeight` derives `Ord` on the raw key, which is the whole point:
/// sorting bridges by `PackedWeight` sorts them by cost with red above
/// blue at equal cost. Construct with [`PackedWeight::encode`]; the cost
/// range check there guarantees the mark bit never collides with cost
/// bits, so [`PackedWeight::cost`] and [`PackedWeight::company`] are a
/// total inverse of `encode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedWeight(u16);

impl PackedWeight {
    /// Packs a cost and company into a single sort key.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::CostOutOfRange`] unless `1 <= cost <= 16383`.
    /// Callers feeding parsed input should have already enforced the
    /// domain bound of 10 000, which is safely inside this range.
    pub fn encode(cost: u16, company: Company) -> Result<Self, WeightError> {
        if cost == 0 || cost > MAX_PACKABLE_COST {
            return Err(WeightError::CostOutOfRange { got: u64::from(cost) });
        }
        let mark = match company {
            Company::Red => RED_MARK,
            Company::Blue => 0,
        };
        Ok(Self(cost | mark))
    }

    /// Returns the cost encoded in this key.
    pub fn cost(self) -> u16 {
        self.0 & COST_MASK
    }

    /// Returns the company encoded in this key.
    pub fn company(self) -> Company {
        if self.0 & RED_MARK == RED_MARK {
            Company::Red
        } else {
            Company::Blue
        }
    }

    /// Returns the raw packed key for digit extraction in the radix sort.
    pub fn key(self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn encode_packs_cost_in_low_bits() {
        let w = PackedWeight::encode(10_000, Company::Blue).expect("in range");
        assert_eq!(w.key(), 10_000);
    }

    #[test]
    fn encode_marks_red_in_bit_14() {
        let w = PackedWeight::encode(10_000, Company::Red).expect("in range");
        assert_eq!(w.key(), 10_000 | (1 << 14));
    }

    #[test]
    fn decode_recovers_cost_and_company() {
        for company in [Company::Red, Company::Blue] {
            let w = PackedWeight::encode(1234, company).expect("in range");
            assert_eq!(w.cost(), 1234);
            assert_eq!(w.company(), company);
        }
    }

    #[test]
    fn round_trip_over_full_packable_range() {
        for cost in 1..=MAX_PACKABLE_COST {
            for company in [Company::Red, Company::Blue] {
                let w = PackedWeight::encode(cost, company).expect("in range");
                assert_eq!((w.cost(), w.company()), (cost, company));
            }
        }
    }

    #[test]
    fn zero_cost_is_rejected() {
        let err = PackedWeight::encode(0, Company::Blue).expect_err("out of range");
        assert_eq!(err, WeightError::CostOutOfRange { got: 0 });
    }

    #[test]
    fn cost_above_14_bits_is_rejected() {
        let err =
            PackedWeight::encode(MAX_PACKABLE_COST + 1, Company::Red).expect_err("out of range");
        assert_eq!(
            err,
            WeightError::CostOutOfRange {
                got: u64::from(MAX_PACKABLE_COST) + 1
            }
        );
    }

    #[test]
    fn red_outranks_blue_at_equal_cost() {
        let red = PackedWeight::encode(500, Company::Red).expect("in range");
        let blue = PackedWeight::encode(500, Company::Blue).expect("in range");
        assert!(red > blue);
    }

    #[test]
    fn mark_bit_dominates_cost_across_companies() {
        // The mark lifts every red key above every blue key, so a
        // descending sweep considers all red bridges before any blue one.
        let cheap_red = PackedWeight::encode(1, Company::Red).expect("in range");
        let dear_blue = PackedWeight::encode(MAX_PACKABLE_COST, Company::Blue).expect("in range");
        assert!(cheap_red > dear_blue);
    }

    #[test]
    fn ordering_matches_cost_within_one_company() {
        let cheap = PackedWeight::encode(1, Company::Red).expect("in range");
        let dear = PackedWeight::encode(2, Company::Red).expect("in range");
        assert!(cheap < dear);
    }

    #[test]
    fn company_display_names() {
        assert_eq!(Company::Red.to_string(), "red");
        assert_eq!(Company::Blue.to_string(), "blue");
    }

    #[test]
    fn company_serializes_lowercase() {
        let json = serde_json::to_string(&Company::Red).expect("serialize");
        assert_eq!(json, "\"red\"");
    }

    #[test]
    fn weight_error_display_mentions_value_and_range() {
        let msg = WeightError::CostOutOfRange { got: 70_000 }.to_string();
        assert!(msg.contains("70000"), "message: {msg}");
        assert!(msg.contains("16383"), "message: {msg}");
    }
}
