//! SpaceX Launch Records Dashboard
//!
//! One page, two linked D3.js charts:
//! - a success pie driven by the launch site dropdown
//! - a payload/outcome scatter driven by the dropdown plus a payload
//!   mass range control
//!
//! Data flow:
//! 1. `build.rs` stages `spacex_launch_dash.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse the CSV into the immutable launch table and seed
//!    the payload range from the data-derived (min, max).
//! 4. On control change: rebuild the affected figure from the table and
//!    re-render via D3.js. The table itself is never touched again.

use dioxus::prelude::*;
use slr_chart_ui::components::{
    ChartContainer, ErrorDisplay, LoadingSpinner, PayloadRangeSlider, SiteSelector,
};
use slr_chart_ui::js_bridge;
use slr_chart_ui::state::AppState;
use slr_records::figures::{payload_scatter, success_pie};
use slr_records::launch::LaunchTable;
use slr_records::site::SiteSelection;

// Embed the launch dataset CSV at compile time.
const LAUNCH_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

/// DOM ids for the two D3 chart container divs.
const PIE_CHART_ID: &str = "success-pie-chart";
const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("launch-records-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Parse CSV once on mount ───
    use_effect(move || {
        let table = match LaunchTable::parse_csv(LAUNCH_CSV) {
            Ok(table) => table,
            Err(e) => {
                log::error!("Failed to parse launch dataset: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to parse launch dataset: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        // Data-derived initial payload range; the slider track's fixed
        // 0-10000 extent stays as is.
        let Some((min_payload, max_payload)) = table.payload_bounds() else {
            state
                .error_msg
                .set(Some("No launch data available.".to_string()));
            state.loading.set(false);
            return;
        };

        state.payload_low.set(min_payload);
        state.payload_high.set(max_payload);
        state.table.set(table);
        state.loading.set(false);

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
    });

    // ─── Effect 2: Site dropdown -> success pie chart ───
    use_effect(move || {
        let loading = (state.loading)();
        let site_value = (state.selected_site)();

        if (state.error_msg)().is_some() {
            // Clear any chart left over from before the error
            js_bridge::destroy_chart(PIE_CHART_ID);
            return;
        }
        if loading {
            return;
        }

        // Clone the table out of the signal immediately so the read
        // borrow doesn't interfere with Dioxus signal tracking.
        let table: LaunchTable = state.table.read().clone();
        let site = SiteSelection::from_value(&site_value);
        let figure = success_pie(&table, &site);

        let data_json = serde_json::to_string(&figure.slices).unwrap_or_default();
        let config_json = serde_json::json!({ "title": figure.title }).to_string();
        js_bridge::render_pie_chart(PIE_CHART_ID, &data_json, &config_json);
    });

    // ─── Effect 3: Site dropdown + payload range -> scatter chart ───
    use_effect(move || {
        let loading = (state.loading)();
        let site_value = (state.selected_site)();
        let low = (state.payload_low)();
        let high = (state.payload_high)();

        if (state.error_msg)().is_some() {
            js_bridge::destroy_chart(SCATTER_CHART_ID);
            return;
        }
        if loading {
            return;
        }

        let table: LaunchTable = state.table.read().clone();
        let site = SiteSelection::from_value(&site_value);
        let figure = payload_scatter(&table, &site, (low, high));

        let data_json = serde_json::to_string(&figure.points).unwrap_or_default();
        let config_json = serde_json::json!({
            "title": figure.title,
            "xAxisLabel": figure.x_axis_label,
            "yTickLabels": figure.y_tick_labels,
        })
        .to_string();
        js_bridge::render_scatter_chart(SCATTER_CHART_ID, &data_json, &config_json);
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "text-align: center; color: #503D36; font-size: 40px;",
                "SpaceX Launch Records Dashboard"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                SiteSelector {}

                ChartContainer {
                    id: PIE_CHART_ID.to_string(),
                    loading: *state.loading.read(),
                }

                p {
                    style: "font-weight: bold; margin: 8px 0 0 0;",
                    "Payload range (Kg):"
                }
                PayloadRangeSlider {}

                ChartContainer {
                    id: SCATTER_CHART_ID.to_string(),
                    loading: *state.loading.read(),
                }
            }
        }
    }
}
