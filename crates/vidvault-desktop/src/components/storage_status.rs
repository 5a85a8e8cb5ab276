//! Storage usage line and progress bar.

use dioxus::prelude::*;
use vidvault_core::usage::StorageUsage;

use crate::state::AppState;

#[component]
pub fn StorageStatus(usage: StorageUsage) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let fill = if usage.is_near_limit() {
        colors.danger
    } else {
        colors.accent
    };
    let width = usage.bar_percentage();
    let label = usage.label();

    rsx! {
        div {
            class: "storage-status",
            style: "margin-top: 16px;",

            p { style: "margin: 0;", "{label}" }

            div {
                class: "storage-track",
                style: "width: 100%; height: 16px; margin-top: 8px; border-radius: 4px; background: {colors.track};",
                div {
                    class: "storage-fill",
                    style: "width: {width}%; height: 16px; border-radius: 4px; background: {fill};",
                }
            }
        }
    }
}
