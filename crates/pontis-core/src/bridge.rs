//! Bridge records, validated bridge plans, and their error type.
//!
//! Validation happens once, at the boundary: [`BridgePlan::new`] converts
//! raw 1-based wire records into zero-based [`Bridge`] values, checking
//! endpoints against the island count and costs against the documented
//! domain bound. Everything downstream (ordering, forest assembly) can
//! then index and pack without further checks.

use std::fmt;

use crate::weight::{Company, PackedWeight};

/// Largest bridge cost the input domain allows.
///
/// Deliberately stricter than the 14-bit packable bound (16 383); the
/// gap is what leaves bit 14 free for the red mark.
pub const MAX_COST: u64 = 10_000;

// ---------------------------------------------------------------------------
// Bridge
// ---------------------------------------------------------------------------

/// A candidate bridge between two islands, ready for forest assembly.
///
/// Endpoints are zero-based island indices; the cost and company live in
/// the packed [`PackedWeight`] key. `Bridge` is `Copy` so the sort
/// strategies can shuffle values between buffers freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bridge {
    /// Zero-based index of one endpoint island.
    pub from: usize,
    /// Zero-based index of the other endpoint island.
    pub to: usize,
    /// Packed `(cost, company)` sort key.
    pub weight: PackedWeight,
}

// ---------------------------------------------------------------------------
// BridgeRecord
// ---------------------------------------------------------------------------

/// A raw bridge record as it appears on the wire: 1-based endpoints and
/// an unvalidated cost.
///
/// Produced by the plan parser (or a generator); consumed by
/// [`BridgePlan::new`], which is where all validation lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeRecord {
    /// 1-based endpoint island number.
    pub from: u64,
    /// 1-based endpoint island number.
    pub to: u64,
    /// Construction cost; valid records satisfy `1..=10_000`.
    pub cost: u64,
    /// The company offering to build this bridge.
    pub company: Company,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when validating raw records into a [`BridgePlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A record references an island number outside `1..=island_count`.
    IslandOutOfRange {
        /// Zero-based index of the offending record.
        bridge_index: usize,
        /// The island number as written in the record.
        island: u64,
        /// Number of islands in the plan.
        island_count: usize,
    },
    /// A record's cost falls outside `1..=10_000`.
    CostOutOfRange {
        /// Zero-based index of the offending record.
        bridge_index: usize,
        /// The cost as written in the record.
        cost: u64,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IslandOutOfRange {
                bridge_index,
                island,
                island_count,
            } => write!(
                f,
                "bridge {bridge_index}: island {island} outside 1..={island_count}"
            ),
            Self::CostOutOfRange { bridge_index, cost } => {
                write!(f, "bridge {bridge_index}: cost {cost} outside 1..={MAX_COST}")
            }
        }
    }
}

impl std::error::Error for PlanError {}

// ---------------------------------------------------------------------------
// BridgePlan
// ---------------------------------------------------------------------------

/// A validated set of candidate bridges over a fixed number of islands.
///
/// Construct with [`BridgePlan::new`]; once built, every bridge is known
/// to have in-range zero-based endpoints and a packable cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgePlan {
    island_count: usize,
    bridges: Vec<Bridge>,
}

impl BridgePlan {
    /// Validates raw records and builds a plan.
    ///
    /// Endpoints are checked against `1..=island_count` and converted to
    /// zero-based indices; costs are checked against `1..=10_000`, which
    /// guarantees packing cannot fail.
    ///
    /// # Errors
    ///
    /// - [`PlanError::IslandOutOfRange`] — an endpoint is 0 or exceeds
    ///   the island count.
    /// - [`PlanError::CostOutOfRange`] — a cost is 0 or exceeds the
    ///   domain bound.
    pub fn new(
        island_count: usize,
        records: impl IntoIterator<Item = BridgeRecord>,
    ) -> Result<Self, PlanError> {
        let mut bridges = Vec::new();

        for (bridge_index, record) in records.into_iter().enumerate() {
            let from = checked_island(record.from, island_count, bridge_index)?;
            let to = checked_island(record.to, island_count, bridge_index)?;

            if record.cost == 0 || record.cost > MAX_COST {
                return Err(PlanError::CostOutOfRange {
                    bridge_index,
                    cost: record.cost,
                });
            }
            // Both conversions are infallible after the bound check above;
            // they route through the same error variant to stay total.
            let cost = u16::try_from(record.cost).map_err(|_| PlanError::CostOutOfRange {
                bridge_index,
                cost: record.cost,
            })?;
            let weight = PackedWeight::encode(cost, record.company).map_err(|_| {
                PlanError::CostOutOfRange {
                    bridge_index,
                    cost: record.cost,
                }
            })?;

            bridges.push(Bridge { from, to, weight });
        }

        Ok(Self {
            island_count,
            bridges,
        })
    }

    /// Returns the number of islands in this plan.
    pub fn island_count(&self) -> usize {
        self.island_count
    }

    /// Returns the number of candidate bridges in this plan.
    pub fn bridge_count(&self) -> usize {
        self.bridges.len()
    }

    /// Returns the validated bridges.
    pub fn bridges(&self) -> &[Bridge] {
        &self.bridges
    }

    /// Decomposes the plan into its island count and bridge collection,
    /// handing ownership of the bridges to the caller (the forest builder
    /// reorders them in place).
    pub fn into_parts(self) -> (usize, Vec<Bridge>) {
        (self.island_count, self.bridges)
    }
}

/// Converts a 1-based island number to a zero-based index, checking range.
fn checked_island(
    island: u64,
    island_count: usize,
    bridge_index: usize,
) -> Result<usize, PlanError> {
    if island == 0 || island > island_count as u64 {
        return Err(PlanError::IslandOutOfRange {
            bridge_index,
            island,
            island_count,
        });
    }
    Ok((island - 1) as usize)
}
