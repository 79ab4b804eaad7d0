//! Greedy assembly of the maximum-weight spanning forest.
//!
//! Classic Kruskal, run from the top: bridges arrive in non-increasing
//! packed-weight order from the configured [`Strategy`], and a
//! [`UnionFind`] over the islands rejects any bridge whose endpoints are
//! already connected. Every accepted bridge credits its decoded cost to
//! the owning company. By the cut property the accepted set is a
//! maximum-weight spanning forest under the packed ordering; the packed
//! key's red mark is what steers equal-cost conflicts to red.

use serde::Serialize;

use crate::bridge::BridgePlan;
use crate::order::Strategy;
use crate::union_find::UnionFind;
use crate::weight::Company;

/// Per-company cost totals for the selected spanning forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ForestTotals {
    /// Sum of accepted red bridge costs.
    pub red: u64,
    /// Sum of accepted blue bridge costs.
    pub blue: u64,
}

/// Selects the maximum-weight spanning forest and returns each company's
/// total.
///
/// One fresh [`UnionFind`] is scoped to this call; nothing persists
/// across invocations and repeated calls on equal plans return equal
/// totals. The sweep stops as soon as `island_count - 1` bridges are
/// accepted — a spanning forest can hold no more, so the remaining
/// bridges could only be rejected anyway.
///
/// Degenerate plans are fine: no islands, no bridges, or a disconnected
/// archipelago simply yield a smaller forest (and zeroed totals where
/// nothing was accepted). Both strategies produce identical totals; the
/// choice only affects how the ordering work is scheduled.
pub fn solve(plan: BridgePlan, strategy: Strategy) -> ForestTotals {
    let (island_count, bridges) = plan.into_parts();

    let mut components = UnionFind::new(island_count);
    let mut totals = ForestTotals::default();
    let mut remaining = island_count.saturating_sub(1);

    for bridge in strategy.descending(bridges) {
        if remaining == 0 {
            break;
        }

        let from_root = components.find(bridge.from);
        let to_root = components.find(bridge.to);
        if from_root == to_root {
            continue;
        }

        components.union_roots(from_root, to_root);
        let cost = u64::from(bridge.weight.cost());
        match bridge.weight.company() {
            Company::Red => totals.red += cost,
            Company::Blue => totals.blue += cost,
        }
        remaining -= 1;
    }

    totals
}
