//! Core library for `pontis`: maximum-weight spanning forest selection
//! over two-company bridge networks.
//!
//! The pipeline is small and linear: [`parse_plan`] turns wire-format
//! text into a validated [`BridgePlan`]; [`solve`] orders the bridges
//! with the chosen [`Strategy`] and greedily assembles the forest,
//! returning per-company [`ForestTotals`].

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod bridge;
pub mod forest;
pub mod order;
pub mod plan_parse;
pub mod union_find;
pub mod weight;

pub use bridge::{Bridge, BridgePlan, BridgeRecord, MAX_COST, PlanError};
pub use forest::{ForestTotals, solve};
pub use order::{Descending, Strategy};
pub use plan_parse::{PlanParseError, parse_plan};
pub use union_find::UnionFind;
pub use weight::{Company, MAX_PACKABLE_COST, PackedWeight, WeightError};

/// Returns the current version of the pontis-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
