//! Startup dataset acquisition (native only, behind the `api` feature).
//!
//! One-shot contract: if the fixed local file is missing, download it
//! from the fixed URL and persist the bytes verbatim, then parse. No
//! retry loop; a failed fetch or parse is fatal to the caller.

use std::path::Path;

use log::info;
use reqwest::Client;

use crate::error::LaunchDataError;
use crate::launch::LaunchTable;

/// Fixed local filename the dashboard dataset lives under.
pub const DATASET_FILENAME: &str = "spacex_launch_dash.csv";

/// Fixed download location for the dataset.
pub const DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Return the parsed launch table for `path`, fetching the file first if
/// it is absent.
pub async fn load_or_fetch(client: &Client, path: &Path) -> Result<LaunchTable, LaunchDataError> {
    if path.exists() {
        info!("Dataset already present at {}", path.display());
    } else {
        info!("Dataset missing, fetching {}", DATASET_URL);
        let response = client.get(DATASET_URL).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LaunchDataError::BadStatus(status));
        }
        let bytes = response.bytes().await?;
        std::fs::write(path, &bytes)?;
        info!("Wrote {} bytes to {}", bytes.len(), path.display());
    }

    let data = std::fs::read_to_string(path)?;
    LaunchTable::parse_csv(&data)
}
