//! Dataset acquisition command.

use std::path::Path;

use log::info;

use slr_records::dataset;

/// Ensure the dataset CSV exists at `output`, downloading it if absent,
/// and validate that it parses with the expected columns.
///
/// One-shot startup step: any fetch or parse failure is fatal, no retry.
pub async fn run_fetch(output: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let table = dataset::load_or_fetch(&client, Path::new(output)).await?;

    match table.payload_bounds() {
        Some((min, max)) => info!(
            "Dataset ready: {} launch records, payload mass {} - {} kg",
            table.len(),
            min,
            max
        ),
        None => info!("Dataset ready but empty: {}", output),
    }
    Ok(())
}
