//! Video card component

use dioxus::prelude::*;

use crate::state::AppState;

/// One stored video with Play and Delete actions.
#[component]
pub fn VideoCard(name: String, on_play: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let action_style = "border: none; background: none; padding: 0; cursor: pointer;";

    rsx! {
        div {
            class: "video-card",
            style: "
                padding: 16px;
                background: {colors.bg_card};
                border-radius: 4px;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
            ",

            p {
                class: "video-name",
                style: "margin: 0; font-size: 14px; font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{name}"
            }

            div {
                style: "display: flex; gap: 8px; margin-top: 8px;",
                button {
                    class: "play",
                    style: "{action_style} color: {colors.link};",
                    onclick: move |_| on_play.call(()),
                    "Play"
                }
                button {
                    class: "delete",
                    style: "{action_style} color: {colors.danger};",
                    onclick: move |_| on_delete.call(()),
                    "Delete"
                }
            }
        }
    }
}
