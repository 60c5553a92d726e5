//! Command implementations for the launch records CLI.
//!
//! Provides subcommands for acquiring the launch dataset and printing
//! per-site success aggregates.

use clap::Subcommand;

pub mod fetch;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Ensure the launch dataset CSV exists locally (download if absent)
    Fetch {
        /// Local path for the dataset CSV
        #[arg(short = 'o', long, default_value = "spacex_launch_dash.csv")]
        output: String,
    },

    /// Print per-site launch success totals and rates
    Summary {
        /// Path to the dataset CSV (downloaded first if absent)
        #[arg(short = 'f', long, default_value = "spacex_launch_dash.csv")]
        csv: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output } => fetch::run_fetch(&output).await,
        Command::Summary { csv } => summary::run_summary(&csv).await,
    }
}
