//! Payload range selector with lower and upper bound sliders.

use crate::state::{
    AppState, PAYLOAD_SLIDER_MARKS, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP,
};
use dioxus::prelude::*;

/// Payload range picker for filtering the scatter chart.
///
/// Two range inputs share the fixed 0-10000 kg track (step 1000) with
/// labeled marks at 0, 2500, 7500 and 10000. The selected values start
/// from the data-derived bounds, which the track constants are
/// deliberately independent of.
#[component]
pub fn PayloadRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let low = (state.payload_low)();
    let high = (state.payload_high)();

    // (label, percent position along the track) for the fixed marks
    let marks: Vec<(f64, f64)> = PAYLOAD_SLIDER_MARKS
        .iter()
        .map(|m| (*m, m / PAYLOAD_SLIDER_MAX * 100.0))
        .collect();

    let on_low_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            state.payload_low.set(value);
        }
    };

    let on_high_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            state.payload_high.set(value);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                label {
                    style: "font-weight: bold; flex: 1;",
                    "From: {low} kg"
                    input {
                        r#type: "range",
                        style: "width: 100%;",
                        min: "{PAYLOAD_SLIDER_MIN}",
                        max: "{PAYLOAD_SLIDER_MAX}",
                        step: "{PAYLOAD_SLIDER_STEP}",
                        value: "{low}",
                        oninput: on_low_change,
                    }
                }
                label {
                    style: "font-weight: bold; flex: 1;",
                    "To: {high} kg"
                    input {
                        r#type: "range",
                        style: "width: 100%;",
                        min: "{PAYLOAD_SLIDER_MIN}",
                        max: "{PAYLOAD_SLIDER_MAX}",
                        step: "{PAYLOAD_SLIDER_STEP}",
                        value: "{high}",
                        oninput: on_high_change,
                    }
                }
            }
            // Labeled tick marks along the shared track extent
            div {
                style: "position: relative; height: 16px; margin-top: 2px;",
                for (mark, pct) in marks.into_iter() {
                    span {
                        style: "position: absolute; left: {pct}%; transform: translateX(-50%); font-size: 11px; color: #666;",
                        "{mark}"
                    }
                }
            }
        }
    }
}
