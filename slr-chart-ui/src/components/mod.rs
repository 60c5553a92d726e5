//! Reusable Dioxus RSX components for the launch dashboard.

mod chart_container;
mod error_display;
mod loading_spinner;
mod payload_slider;
mod site_selector;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use payload_slider::PayloadRangeSlider;
pub use site_selector::SiteSelector;
