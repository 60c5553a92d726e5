//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use slr_records::launch::LaunchTable;
use slr_records::site::ALL_SITES_VALUE;

/// Fixed UI constants of the payload range control. Independent of the
/// data-derived initial selected range set at mount.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;
/// Labeled tick marks along the slider track.
pub const PAYLOAD_SLIDER_MARKS: [f64; 4] = [0.0, 2500.0, 7500.0, 10000.0];

/// Shared application state for the launch records dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The loaded launch table (empty until mount completes)
    pub table: Signal<LaunchTable>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected site dropdown value ("ALL" or a site name)
    pub selected_site: Signal<String>,
    /// Lower bound of the selected payload range (kg)
    pub payload_low: Signal<f64>,
    /// Upper bound of the selected payload range (kg)
    pub payload_high: Signal<f64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    ///
    /// The payload range starts at the slider's UI extent; the mount
    /// effect overwrites it with the data-derived (min, max).
    pub fn new() -> Self {
        Self {
            table: Signal::new(LaunchTable::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(ALL_SITES_VALUE.to_string()),
            payload_low: Signal::new(PAYLOAD_SLIDER_MIN),
            payload_high: Signal::new(PAYLOAD_SLIDER_MAX),
        }
    }
}
