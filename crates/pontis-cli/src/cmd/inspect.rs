//! Implementation of `pontis inspect <file>`.
//!
//! Parses a bridge plan and prints summary statistics to stdout:
//! - island and candidate bridge counts
//! - bridge count per company
//! - cost range and total candidate cost
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use pontis_core::{BridgePlan, Company, parse_plan};

use crate::OutputFormat;
use crate::error::CliError;

/// Statistics gathered from a parsed [`BridgePlan`].
pub struct PlanStats {
    /// Number of islands.
    pub island_count: usize,
    /// Number of candidate bridges.
    pub bridge_count: usize,
    /// Candidate bridges offered by red.
    pub red_count: usize,
    /// Candidate bridges offered by blue.
    pub blue_count: usize,
    /// Smallest candidate cost, or `None` for an empty plan.
    pub min_cost: Option<u16>,
    /// Largest candidate cost, or `None` for an empty plan.
    pub max_cost: Option<u16>,
    /// Sum of all candidate costs.
    pub total_cost: u64,
}

impl PlanStats {
    /// Computes statistics from a parsed [`BridgePlan`].
    pub fn from_plan(plan: &BridgePlan) -> Self {
        let mut red_count = 0usize;
        let mut blue_count = 0usize;
        let mut min_cost: Option<u16> = None;
        let mut max_cost: Option<u16> = None;
        let mut total_cost = 0u64;

        for bridge in plan.bridges() {
            let cost = bridge.weight.cost();
            match bridge.weight.company() {
                Company::Red => red_count += 1,
                Company::Blue => blue_count += 1,
            }
            min_cost = Some(min_cost.map_or(cost, |m| m.min(cost)));
            max_cost = Some(max_cost.map_or(cost, |m| m.max(cost)));
            total_cost += u64::from(cost);
        }

        Self {
            island_count: plan.island_count(),
            bridge_count: plan.bridge_count(),
            red_count,
            blue_count,
            min_cost,
            max_cost,
            total_cost,
        }
    }
}

/// Runs the `inspect` command.
///
/// Parses `content` as a bridge plan, computes statistics, and writes
/// them to stdout in the requested format.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] if the content cannot be parsed,
/// or [`CliError::IoError`] if stdout cannot be written.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let plan = parse_plan(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;

    let stats = PlanStats::from_plan(&plan);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes plan statistics in human-readable aligned format.
fn print_human<W: std::io::Write>(w: &mut W, stats: &PlanStats) -> std::io::Result<()> {
    writeln!(w, "islands:     {}", stats.island_count)?;
    writeln!(w, "bridges:     {}", stats.bridge_count)?;
    writeln!(w, "  red:       {}", stats.red_count)?;
    writeln!(w, "  blue:      {}", stats.blue_count)?;
    if let (Some(min), Some(max)) = (stats.min_cost, stats.max_cost) {
        writeln!(w, "cost_range:  {min}..{max}")?;
    }
    writeln!(w, "total_cost:  {}", stats.total_cost)?;
    Ok(())
}

/// Writes plan statistics as a single JSON object to stdout.
fn print_json<W: std::io::Write>(w: &mut W, stats: &PlanStats) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();

    obj.insert(
        "island_count".to_owned(),
        serde_json::Value::Number(stats.island_count.into()),
    );
    obj.insert(
        "bridge_count".to_owned(),
        serde_json::Value::Number(stats.bridge_count.into()),
    );
    obj.insert(
        "red_count".to_owned(),
        serde_json::Value::Number(stats.red_count.into()),
    );
    obj.insert(
        "blue_count".to_owned(),
        serde_json::Value::Number(stats.blue_count.into()),
    );
    if let Some(min) = stats.min_cost {
        obj.insert("min_cost".to_owned(), serde_json::Value::Number(min.into()));
    }
    if let Some(max) = stats.max_cost {
        obj.insert("max_cost".to_owned(), serde_json::Value::Number(max.into()));
    }
    obj.insert(
        "total_cost".to_owned(),
        serde_json::Value::Number(stats.total_cost.into()),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn sample_plan() -> BridgePlan {
        parse_plan("4 4\n1 2 10 r\n2 3 10 b\n3 4 5 r\n1 4 1 b\n").expect("valid plan")
    }

    #[test]
    fn stats_count_companies_and_costs() {
        let stats = PlanStats::from_plan(&sample_plan());
        assert_eq!(stats.island_count, 4);
        assert_eq!(stats.bridge_count, 4);
        assert_eq!(stats.red_count, 2);
        assert_eq!(stats.blue_count, 2);
        assert_eq!(stats.min_cost, Some(1));
        assert_eq!(stats.max_cost, Some(10));
        assert_eq!(stats.total_cost, 26);
    }

    #[test]
    fn stats_for_an_empty_plan_have_no_cost_range() {
        let plan = parse_plan("3 0").expect("valid plan");
        let stats = PlanStats::from_plan(&plan);
        assert_eq!(stats.island_count, 3);
        assert_eq!(stats.bridge_count, 0);
        assert_eq!(stats.min_cost, None);
        assert_eq!(stats.max_cost, None);
        assert_eq!(stats.total_cost, 0);
    }

    #[test]
    fn human_output_lists_counts_and_range() {
        let stats = PlanStats::from_plan(&sample_plan());
        let mut buf = Vec::new();
        print_human(&mut buf, &stats).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("islands:     4"), "output: {text}");
        assert!(text.contains("cost_range:  1..10"), "output: {text}");
        assert!(text.contains("total_cost:  26"), "output: {text}");
    }

    #[test]
    fn human_output_omits_range_for_empty_plans() {
        let plan = parse_plan("3 0").expect("valid plan");
        let stats = PlanStats::from_plan(&plan);
        let mut buf = Vec::new();
        print_human(&mut buf, &stats).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(!text.contains("cost_range"), "output: {text}");
    }

    #[test]
    fn json_output_is_a_single_object() {
        let stats = PlanStats::from_plan(&sample_plan());
        let mut buf = Vec::new();
        print_json(&mut buf, &stats).expect("write");
        let value: serde_json::Value =
            serde_json::from_slice(&buf).expect("output should be valid JSON");
        assert_eq!(value["island_count"], 4);
        assert_eq!(value["red_count"], 2);
        assert_eq!(value["min_cost"], 1);
        assert_eq!(value["total_cost"], 26);
    }
}
