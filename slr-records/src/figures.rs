//! Pure figure builders for the two dashboard charts.
//!
//! Each builder is a pure function of (table, control values): no side
//! effects, no caching, a fresh figure on every call. The structs all
//! derive `Serialize` so the Dioxus frontend can hand them to D3.js as
//! JSON, and `PartialEq` so identical inputs can be checked to produce
//! identical figures.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::launch::LaunchTable;
use crate::site::SiteSelection;

/// Fixed slice colors for the per-site success/failure pie.
pub const FAILURE_COLOR: &str = "red";
pub const SUCCESS_COLOR: &str = "green";

/// One slice of a pie figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Explicit slice color; `None` lets the renderer pick from its scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A renderable pie chart specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One point of the payload/outcome scatter figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// 0 = failure, 1 = success; rendered against categorical y ticks.
    pub outcome: u8,
    /// Color key: one color per distinct booster version category.
    pub booster_category: String,
}

/// A renderable scatter chart specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub x_axis_label: String,
    /// Tick labels for outcome 0 and 1, in that order.
    pub y_tick_labels: [&'static str; 2],
    pub points: Vec<ScatterPoint>,
}

/// Build the success pie figure for the given site selection.
///
/// For the all-sites sentinel: one slice per launch site, slice value =
/// count of successful launches at that site, sites in name order. For a
/// single site: a two-slice [failure rate, success rate] pie with fixed
/// red/green colors. An empty site subset yields two zero slices rather
/// than a NaN mean.
pub fn success_pie(table: &LaunchTable, site: &SiteSelection) -> PieFigure {
    match site {
        SiteSelection::AllSites => {
            let mut successes_by_site: BTreeMap<&str, f64> = BTreeMap::new();
            for record in table.records() {
                *successes_by_site
                    .entry(record.launch_site.as_str())
                    .or_insert(0.0) += f64::from(record.outcome);
            }
            let slices = successes_by_site
                .into_iter()
                .map(|(site_name, successes)| PieSlice {
                    label: site_name.to_string(),
                    value: successes,
                    color: None,
                })
                .collect();
            PieFigure {
                title: "Total Successful Launches by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site_name) => {
            let mut rows = 0usize;
            let mut successes = 0usize;
            for record in table.records() {
                if record.launch_site == *site_name {
                    rows += 1;
                    successes += usize::from(record.outcome == 1);
                }
            }
            let (success_rate, failure_rate) = if rows == 0 {
                (0.0, 0.0)
            } else {
                let rate = successes as f64 / rows as f64;
                (rate, 1.0 - rate)
            };
            PieFigure {
                title: format!("Success Rate at Launch Site: {}", site_name),
                slices: vec![
                    PieSlice {
                        label: "Failure".to_string(),
                        value: failure_rate,
                        color: Some(FAILURE_COLOR.to_string()),
                    },
                    PieSlice {
                        label: "Success".to_string(),
                        value: success_rate,
                        color: Some(SUCCESS_COLOR.to_string()),
                    },
                ],
            }
        }
    }
}

/// Build the payload/outcome scatter figure.
///
/// Restricts to the selected site (no restriction for the sentinel),
/// then to rows with payload mass inside the inclusive range. An empty
/// result set, including one from an inverted range, is a valid figure
/// with no points.
pub fn payload_scatter(
    table: &LaunchTable,
    site: &SiteSelection,
    payload_range: (f64, f64),
) -> ScatterFigure {
    let (low, high) = payload_range;
    let points = table
        .records()
        .iter()
        .filter(|r| site.matches(r))
        .filter(|r| r.payload_mass_kg >= low && r.payload_mass_kg <= high)
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
        })
        .collect();

    let title = match site {
        SiteSelection::AllSites => {
            "Success vs. Payload Mass by Booster Category for All Sites".to_string()
        }
        SiteSelection::Site(site_name) => format!(
            "Success vs. Payload Mass by Booster Category at Launch Site: {}",
            site_name
        ),
    };

    ScatterFigure {
        title,
        x_axis_label: "Payload Mass (kg)".to_string(),
        y_tick_labels: ["Failure", "Success"],
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::{LaunchRecord, LaunchTable, SAMPLE_CSV};
    use crate::site::SITE_OPTIONS;

    fn record(site: &str, payload: f64, booster: &str, outcome: u8) -> LaunchRecord {
        LaunchRecord {
            flight_number: 1,
            launch_site: site.to_string(),
            outcome,
            payload_mass_kg: payload,
            booster_version: format!("F9 {}", booster),
            booster_category: booster.to_string(),
        }
    }

    fn sample_table() -> LaunchTable {
        LaunchTable::parse_csv(SAMPLE_CSV).unwrap()
    }

    #[test]
    fn test_site_pie_rates_sum_to_one() {
        let table = sample_table();
        for (value, _) in SITE_OPTIONS.iter().skip(1) {
            let fig = success_pie(&table, &SiteSelection::from_value(value));
            let total: f64 = fig.slices.iter().map(|s| s.value).sum();
            assert!(
                (total - 1.0).abs() < 1e-9,
                "slices at {} sum to {}",
                value,
                total
            );
        }
    }

    #[test]
    fn test_all_sites_pie_sums_to_total_successes() {
        let table = sample_table();
        let fig = success_pie(&table, &SiteSelection::AllSites);
        let total: f64 = fig.slices.iter().map(|s| s.value).sum();
        let successes = table.records().iter().filter(|r| r.is_success()).count();
        assert_eq!(total, successes as f64);
        assert_eq!(fig.title, "Total Successful Launches by Site");
    }

    #[test]
    fn test_all_sites_pie_groups_by_site() {
        let table = LaunchTable::from_records(vec![
            record("A", 100.0, "FT", 1),
            record("A", 200.0, "FT", 1),
            record("B", 300.0, "v1.1", 1),
            record("B", 400.0, "v1.1", 0),
        ]);
        let fig = success_pie(&table, &SiteSelection::AllSites);
        assert_eq!(fig.slices.len(), 2);
        assert_eq!(fig.slices[0].label, "A");
        assert_eq!(fig.slices[0].value, 2.0);
        assert_eq!(fig.slices[1].label, "B");
        assert_eq!(fig.slices[1].value, 1.0);
    }

    #[test]
    fn test_single_row_site_pie() {
        let table = LaunchTable::from_records(vec![record("CCAFS LC-40", 500.0, "v1.0", 1)]);
        let fig = success_pie(&table, &SiteSelection::from_value("CCAFS LC-40"));
        assert_eq!(fig.title, "Success Rate at Launch Site: CCAFS LC-40");
        assert_eq!(fig.slices.len(), 2);
        assert_eq!(fig.slices[0].label, "Failure");
        assert_eq!(fig.slices[0].value, 0.0);
        assert_eq!(fig.slices[0].color.as_deref(), Some("red"));
        assert_eq!(fig.slices[1].label, "Success");
        assert_eq!(fig.slices[1].value, 1.0);
        assert_eq!(fig.slices[1].color.as_deref(), Some("green"));
    }

    #[test]
    fn test_site_pie_known_rate() {
        // VAFB SLC-4E in the sample: 4 launches, 2 successes.
        let table = sample_table();
        let fig = success_pie(&table, &SiteSelection::from_value("VAFB SLC-4E"));
        assert_eq!(fig.slices[0].value, 0.5);
        assert_eq!(fig.slices[1].value, 0.5);
    }

    #[test]
    fn test_empty_site_subset_yields_zero_slices() {
        let table = sample_table();
        let fig = success_pie(&table, &SiteSelection::from_value("NO SUCH SITE"));
        assert_eq!(fig.slices.len(), 2);
        assert_eq!(fig.slices[0].value, 0.0);
        assert_eq!(fig.slices[1].value, 0.0);
    }

    #[test]
    fn test_scatter_points_respect_payload_range() {
        let table = sample_table();
        let fig = payload_scatter(&table, &SiteSelection::AllSites, (1000.0, 4000.0));
        assert!(!fig.points.is_empty());
        for point in &fig.points {
            assert!(point.payload_mass_kg >= 1000.0);
            assert!(point.payload_mass_kg <= 4000.0);
        }
    }

    #[test]
    fn test_scatter_points_respect_site_scope() {
        let table = sample_table();
        let site = SiteSelection::from_value("KSC LC-39A");
        let fig = payload_scatter(&table, &site, (0.0, 10000.0));
        let expected = table
            .records()
            .iter()
            .filter(|r| r.launch_site == "KSC LC-39A")
            .count();
        assert_eq!(fig.points.len(), expected);
        assert_eq!(
            fig.title,
            "Success vs. Payload Mass by Booster Category at Launch Site: KSC LC-39A"
        );
    }

    #[test]
    fn test_scatter_window_excludes_out_of_range_rows() {
        let table = LaunchTable::from_records(vec![
            record("CCAFS LC-40", 100.0, "v1.0", 0),
            record("CCAFS LC-40", 9000.0, "v1.0", 0),
        ]);
        let fig = payload_scatter(&table, &SiteSelection::AllSites, (0.0, 5000.0));
        assert_eq!(fig.points.len(), 1);
        assert_eq!(fig.points[0].payload_mass_kg, 100.0);
        assert_eq!(
            fig.title,
            "Success vs. Payload Mass by Booster Category for All Sites"
        );
    }

    #[test]
    fn test_scatter_inverted_range_is_empty_not_an_error() {
        let table = sample_table();
        let fig = payload_scatter(&table, &SiteSelection::AllSites, (5000.0, 1000.0));
        assert!(fig.points.is_empty());
    }

    #[test]
    fn test_scatter_carries_booster_category_and_outcome() {
        let table = LaunchTable::from_records(vec![record("VAFB SLC-4E", 553.0, "FT", 1)]);
        let fig = payload_scatter(&table, &SiteSelection::AllSites, (0.0, 10000.0));
        assert_eq!(fig.points[0].booster_category, "FT");
        assert_eq!(fig.points[0].outcome, 1);
        assert_eq!(fig.y_tick_labels, ["Failure", "Success"]);
        assert_eq!(fig.x_axis_label, "Payload Mass (kg)");
    }

    #[test]
    fn test_builders_are_idempotent() {
        let table = sample_table();
        let site = SiteSelection::from_value("CCAFS LC-40");

        let pie_a = success_pie(&table, &site);
        let pie_b = success_pie(&table, &site);
        assert_eq!(pie_a, pie_b);

        let scatter_a = payload_scatter(&table, &site, (500.0, 7500.0));
        let scatter_b = payload_scatter(&table, &site, (500.0, 7500.0));
        assert_eq!(scatter_a, scatter_b);
    }

    #[test]
    fn test_figures_serialize_for_d3() {
        let table = sample_table();
        let pie = success_pie(&table, &SiteSelection::AllSites);
        let json = serde_json::to_string(&pie.slices).unwrap();
        // All-sites slices carry no explicit color.
        assert!(!json.contains("color"));

        let site_pie = success_pie(&table, &SiteSelection::from_value("KSC LC-39A"));
        let json = serde_json::to_string(&site_pie.slices).unwrap();
        assert!(json.contains("\"color\":\"green\""));
    }
}
