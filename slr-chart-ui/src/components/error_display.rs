//! Dashboard error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Banner shown in place of the charts when the launch dataset could not
/// be loaded. All dataset failures are fatal to the dashboard, so this
/// is the only error surface.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 10px 0; background: #FDECEA; color: #B71C1C; border-left: 4px solid #B71C1C; border-radius: 2px;",
            strong { "Dashboard error: " }
            "{props.message}"
        }
    }
}
