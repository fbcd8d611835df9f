//! One enrollment chart page: header plus a D3 grouped bar chart.

use crate::components::{ChartContainer, ChartHeader, ErrorDisplay};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use ied_core::page::ChartSpec;
use ied_data::grouped_bar::GroupedBarChart;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "enrollment-chart";

#[derive(Props, Clone, PartialEq)]
pub struct ChartPageProps {
    pub spec: ChartSpec,
}

/// Renders the grouped bar chart for `spec`.
///
/// Mount it with a `key` per chart so switching pages remounts the component
/// and the render effect runs for the new spec.
#[component]
pub fn ChartPage(props: ChartPageProps) -> Element {
    let state = use_context::<AppState>();
    let mut chart_error: Signal<Option<String>> = use_signal(|| None);
    let spec = props.spec.clone();

    // Re-runs when the database signal changes.
    use_effect(move || {
        let Some(db) = state.db.read().clone() else {
            return;
        };

        let rows = match db.query_level(spec.level) {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("[IED] chart: query for {} failed: {:#}", spec.level, e);
                chart_error.set(Some(format!("Could not read {} data.", spec.level)));
                return;
            }
        };

        let chart = GroupedBarChart::from_level_counts(&spec, &rows);
        if chart.is_empty() {
            chart_error.set(Some("No enrollment data available.".to_string()));
            return;
        }

        match chart.data_json() {
            Ok(data_json) => {
                chart_error.set(None);
                js_bridge::render_grouped_bar_chart(
                    CHART_CONTAINER_ID,
                    &data_json,
                    &chart.config_json(),
                );
            }
            Err(e) => chart_error.set(Some(e.to_string())),
        }
    });

    use_drop(|| js_bridge::destroy_chart(CHART_CONTAINER_ID));

    rsx! {
        ChartHeader {
            title: props.spec.title.clone(),
            subtitle: "Students enrolled per year".to_string(),
        }

        if let Some(err) = chart_error.read().as_ref() {
            ErrorDisplay { title: "Chart unavailable".to_string(), message: err.clone() }
        }

        ChartContainer {
            id: CHART_CONTAINER_ID.to_string(),
            title: props.spec.title.clone(),
        }
    }
}
