//! Per-site success summary command.

use std::path::Path;

use log::info;

use slr_records::dataset;
use slr_records::figures::success_pie;
use slr_records::site::SiteSelection;

/// Load the launch table and print per-site success totals and rates.
///
/// Drives the same figure builders the dashboard uses, so the printed
/// numbers match the charts slice for slice.
pub async fn run_summary(csv: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let table = dataset::load_or_fetch(&client, Path::new(csv)).await?;
    info!("Loaded {} launch records from {}", table.len(), csv);

    println!("Total successful launches by site:");
    let all_sites = success_pie(&table, &SiteSelection::AllSites);
    for slice in &all_sites.slices {
        println!("  {:<14} {}", slice.label, slice.value);
    }

    println!("\nSuccess rate by site:");
    for site_name in table.site_names() {
        let fig = success_pie(&table, &SiteSelection::Site(site_name.clone()));
        // Slices are [failure, success]; the success rate is slice 1.
        let success_rate = fig.slices[1].value;
        println!("  {:<14} {:.1}%", site_name, success_rate * 100.0);
    }

    Ok(())
}
