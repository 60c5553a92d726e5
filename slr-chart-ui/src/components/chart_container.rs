//! Container for the D3-rendered launch charts.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders the chart into
    pub id: String,
    /// Whether the launch table is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels; both dashboard charts render at 450
    #[props(default = 450)]
    pub min_height: u32,
}

/// A reserved region for one launch chart. The div keeps its height
/// before D3 draws into it so the layout does not jump when the pie or
/// scatter arrives.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; margin: 4px 0;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Rendering launch chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
