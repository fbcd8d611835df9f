//! Iranian Education Dashboard
//!
//! Three grouped bar charts of student enrollment in Iran (kindergarten,
//! grade school, high school; girls vs. boys per year) behind a collapsible
//! sidebar.
//!
//! Data flow:
//! 1. `build.rs` checks the dataset CSV and copies it into `OUT_DIR`.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount: load the CSV into the in-memory database once.
//! 4. The router resolves the URL path to a page; chart pages query their
//!    two columns and render via D3.js.
//!
//! Data source: "Iranian Students from 1968 to 2017" (Chubak Bidpaa, Kaggle).

use dioxus::prelude::*;
use ied_core::style::LayoutTheme;
use ied_dashboard_ui::components::ErrorDisplay;
use ied_dashboard_ui::js_bridge;
use ied_dashboard_ui::route::Route;
use ied_dashboard_ui::state::AppState;
use ied_db::Database;

const ENROLLMENT_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/iranian_students.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

/// Load the embedded dataset; an empty table counts as a failure.
fn load_database(csv_data: &str) -> anyhow::Result<Database> {
    let db = Database::from_csv(csv_data)?;
    match db.query_year_range()? {
        Some(range) => {
            log::info!("[IED] dashboard: loaded years {}-{}", range.first, range.last);
            Ok(db)
        }
        None => anyhow::bail!("No enrollment data available."),
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    use_context_provider(LayoutTheme::dark);

    // ─── Load the dataset once on mount ───
    use_effect(move || {
        match load_database(ENROLLMENT_CSV) {
            Ok(db) => {
                state.db.set(Some(db));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("[IED] dashboard: failed to load dataset: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load enrollment data: {:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // ─── Render ───
    rsx! {
        if let Some(err) = state.error_msg.read().as_ref() {
            div {
                style: "max-width: 900px; margin: 2rem auto; padding: 1rem;",
                ErrorDisplay { title: "Dataset unavailable".to_string(), message: err.clone() }
            }
        } else {
            Router::<Route> {}
        }
    }
}
