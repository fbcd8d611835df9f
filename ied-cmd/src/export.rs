//! Export the chart data of a page as JSON.

use crate::open_dataset;
use anyhow::Context;
use ied_core::page::{Page, PageView};
use ied_data::grouped_bar::GroupedBarChart;
use ied_db::Database;

/// Build the chart a path would show; not-found paths are an error.
pub fn chart_for_path(db: &Database, path: &str) -> anyhow::Result<GroupedBarChart> {
    match Page::resolve(path).view() {
        PageView::Chart(spec) => {
            let rows = db.query_level(spec.level)?;
            Ok(GroupedBarChart::from_level_counts(&spec, &rows))
        }
        PageView::NotFound { message, .. } => anyhow::bail!(message),
    }
}

pub fn run_export(data: &str, path: &str, output: Option<&str>) -> anyhow::Result<()> {
    let db = open_dataset(data)?;
    let chart = chart_for_path(&db, path)?;
    let json = serde_json::to_string_pretty(&chart)?;
    match output {
        Some(file) => {
            std::fs::write(file, json).with_context(|| format!("failed to write {}", file))?;
            log::info!("Wrote {} bars for {} to {}", chart.data.len(), path, file);
        }
        None => println!("{}", json),
    }
    Ok(())
}
