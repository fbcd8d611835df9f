//! Command implementations for the IED CLI.
//!
//! Provides subcommands for serving the bundled dashboard and for inspecting
//! the enrollment dataset the dashboard is built from.

use clap::Subcommand;

pub mod export;
pub mod route;
pub mod serve;
pub mod summary;

/// Dataset location used when `--data` is not given.
pub const DEFAULT_DATASET: &str = "fixtures/iranian_students.csv";

#[derive(Subcommand)]
pub enum Command {
    /// Serve the bundled dashboard over HTTP
    Serve(serve::ServeConfig),

    /// Print enrollment totals for each education level
    Summary {
        /// Path to the enrollment CSV
        #[arg(short = 'd', long, env = "IED_DATA", default_value = DEFAULT_DATASET)]
        data: String,
    },

    /// Show which page a URL path resolves to
    Route {
        /// URL path, e.g. "/page-1"
        path: String,
    },

    /// Write the chart data for a page as JSON
    Export {
        /// Path to the enrollment CSV
        #[arg(short = 'd', long, env = "IED_DATA", default_value = DEFAULT_DATASET)]
        data: String,

        /// URL path of the chart page
        #[arg(short = 'p', long, default_value = "/")]
        path: String,

        /// Output file (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve(config) => serve::run_serve(&config).await,
        Command::Summary { data } => summary::run_summary(&data),
        Command::Route { path } => route::run_route(&path),
        Command::Export { data, path, output } => {
            export::run_export(&data, &path, output.as_deref())
        }
    }
}

/// Load a dataset file into a fresh database. A missing or malformed file is
/// an error naming the path.
pub fn open_dataset(path: &str) -> anyhow::Result<ied_db::Database> {
    let records = ied_core::enrollment::read_enrollment_csv(path)?;
    let db = ied_db::Database::new()?;
    db.load_records(&records)?;
    log::info!("Loaded {} years from {}", records.len(), path);
    Ok(db)
}
