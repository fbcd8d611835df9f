//! IED CLI - serve the education dashboard and inspect its dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ied-cli",
    version,
    about = "Iranian education dashboard toolkit"
)]
struct Cli {
    /// Verbose diagnostics (per-request logging when serving)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: ied_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    log::debug!("debug logging enabled");
    ied_cmd::run(cli.command).await
}
