//! Dropdown selector for choosing a launch site.

use crate::state::AppState;
use dioxus::prelude::*;
use slr_records::site::SITE_OPTIONS;

/// Launch site dropdown selector.
/// Offers the fixed option set ("All Sites" sentinel plus the four site
/// names) and updates selected_site on change.
#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_site)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_site.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "site-dropdown",
                style: "font-weight: bold; margin-right: 8px;",
                "Launch Site: "
            }
            select {
                id: "site-dropdown",
                style: "width: 50%; padding: 3px; font-size: 20px; text-align: left;",
                onchange: on_change,
                for (value, label) in SITE_OPTIONS.iter() {
                    option {
                        value: "{value}",
                        selected: *value == selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
