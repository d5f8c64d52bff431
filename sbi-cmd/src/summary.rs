//! Inventory summary: counts per year and per condition label.

use crate::SourceArgs;
use sbi_data::breakdown::{breakdown, ConditionTally};
use sbi_data::filter::filter;
use sbi_data::selection::FilterSelection;
use sbi_map::controller::ReactiveController;
use sbi_map::render::condition_color;

/// Print a summary of the inventory, optionally for one observation year.
pub fn run_summary(source: &SourceArgs, year: Option<i32>) -> anyhow::Result<()> {
    let controller = ReactiveController::new(source.load()?);
    let dataset = controller.dataset();
    let years = dataset.observation_years();

    let mut selection = controller.initial_selection();
    if let Some(y) = year {
        if !years.contains(&y) {
            log::warn!("No records for observation year {} (have {:?})", y, years);
        }
        selection = selection.for_year(y);
    }

    println!("{}", format_summary(&controller, &selection, &years));
    Ok(())
}

fn format_summary(
    controller: &ReactiveController,
    selection: &FilterSelection,
    years: &[i32],
) -> String {
    let dataset = controller.dataset();
    let subset = filter(dataset.records(), selection);
    let tallies = breakdown(&subset);

    let mut lines = Vec::new();
    lines.push(format!("Records:  {}", dataset.len()));
    lines.push(format!("Years:    {:?}", years));
    lines.push(format!(
        "Selected: {} (year: {})",
        subset.len(),
        selection
            .year
            .map_or_else(|| "all".to_string(), |y| y.to_string())
    ));
    lines.push(String::new());
    lines.push(format!(
        "{:<14} {:<12} {:>8} {:>7}",
        "Condition", "Color", "Bridges", "Share"
    ));
    for ConditionTally {
        condition_label,
        count,
        share,
    } in &tallies
    {
        lines.push(format!(
            "{:<14} {:<12} {:>8} {:>6.1}%",
            condition_label.to_string(),
            condition_color(*condition_label),
            count,
            share * 100.0
        ));
    }
    lines.join("\n")
}
