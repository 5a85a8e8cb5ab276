//! File picker plus the Upload button.

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn UploadPanel(
    #[props(!optional)] selected_name: Option<String>,
    uploading: bool,
    on_pick: EventHandler<()>,
    on_upload: EventHandler<()>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let upload_bg = if uploading { colors.busy } else { colors.accent };
    let upload_label = if uploading { "Uploading..." } else { "Upload" };
    let selection_label = selected_name.unwrap_or_else(|| "No file chosen".to_string());

    rsx! {
        div {
            class: "upload-panel",
            style: "margin-top: 16px;",

            label {
                style: "display: block; font-size: 14px; color: {colors.text_secondary};",
                "Upload Video"
            }

            div {
                style: "display: flex; align-items: center; gap: 12px; margin-top: 8px;",

                button {
                    class: "pick-file",
                    disabled: uploading,
                    style: "padding: 6px 12px; border: 1px solid {colors.border}; border-radius: 4px; background: {colors.bg_card}; color: {colors.text_primary}; cursor: pointer;",
                    onclick: move |_| on_pick.call(()),
                    "Choose File"
                }

                span {
                    class: "selected-file",
                    style: "font-size: 14px; color: {colors.text_secondary};",
                    "{selection_label}"
                }

                button {
                    class: "upload",
                    disabled: uploading,
                    style: "margin-left: 16px; padding: 8px 16px; border: none; border-radius: 4px; font-weight: bold; background: {upload_bg}; color: {colors.accent_text}; cursor: pointer;",
                    onclick: move |_| on_upload.call(()),
                    "{upload_label}"
                }
            }
        }
    }
}
