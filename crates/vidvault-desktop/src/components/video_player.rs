//! Playback overlay.

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn VideoPlayer(url: String, on_close: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "video-overlay",
            style: "
                position: fixed;
                inset: 0;
                z-index: 50;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
            ",

            div {
                class: "video-modal",
                style: "
                    width: 100%;
                    max-width: 480px;
                    max-height: 80vh;
                    padding: 16px;
                    background: {colors.bg_card};
                    border-radius: 8px;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.3);
                ",

                video {
                    controls: true,
                    autoplay: true,
                    style: "display: block; width: 100%; max-height: 60vh;",
                    source { src: "{url}", r#type: "video/mp4" }
                    "Your system does not support embedded video playback."
                }

                button {
                    style: "margin-top: 16px; padding: 8px 16px; border: none; border-radius: 4px; font-weight: bold; background: {colors.danger}; color: #ffffff; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
