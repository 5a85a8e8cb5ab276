//! Username/password card shared by the log-in and sign-up screens.

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn AuthForm(
    #[props(into)] title: String,
    #[props(into)] submit_label: String,
    username: String,
    password: String,
    busy: bool,
    #[props(!optional)] error: Option<String>,
    #[props(!optional, default)] success: Option<String>,
    #[props(into)] switch_prompt: String,
    #[props(into)] switch_label: String,
    on_username_input: EventHandler<String>,
    on_password_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_switch: EventHandler<()>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let input_style = format!(
        "width: 100%; box-sizing: border-box; padding: 8px 12px; margin-top: 4px;
         border: 1px solid {}; border-radius: 4px; background: {}; color: {};",
        colors.border, colors.bg_page, colors.text_primary
    );
    let submit_bg = if busy { colors.busy } else { colors.accent };

    rsx! {
        div {
            class: "auth-screen",
            style: "display: flex; align-items: center; justify-content: center; min-height: 100vh;",

            div {
                class: "auth-card",
                style: "
                    width: 100%;
                    max-width: 420px;
                    padding: 32px;
                    background: {colors.bg_card};
                    border-radius: 6px;
                    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.15);
                ",

                h2 {
                    style: "margin: 0; text-align: center; font-size: 24px;",
                    "{title}"
                }

                if let Some(message) = error {
                    div {
                        class: "auth-error",
                        style: "margin-top: 16px; padding: 12px; border-radius: 4px; background: {colors.error_bg}; color: {colors.danger};",
                        "{message}"
                    }
                }

                if let Some(message) = success {
                    div {
                        class: "auth-success",
                        style: "margin-top: 16px; padding: 12px; border-radius: 4px; background: {colors.success_bg}; color: {colors.success};",
                        "{message}"
                    }
                }

                form {
                    style: "margin-top: 24px;",
                    onsubmit: move |event: FormEvent| {
                        event.prevent_default();
                        on_submit.call(());
                    },

                    label {
                        r#for: "username",
                        style: "display: block; font-size: 14px; color: {colors.text_secondary};",
                        "Username"
                        input {
                            id: "username",
                            name: "username",
                            r#type: "text",
                            required: true,
                            disabled: busy,
                            value: "{username}",
                            style: "{input_style}",
                            oninput: move |event: FormEvent| on_username_input.call(event.value()),
                        }
                    }

                    label {
                        r#for: "password",
                        style: "display: block; margin-top: 16px; font-size: 14px; color: {colors.text_secondary};",
                        "Password"
                        input {
                            id: "password",
                            name: "password",
                            r#type: "password",
                            required: true,
                            disabled: busy,
                            value: "{password}",
                            style: "{input_style}",
                            oninput: move |event: FormEvent| on_password_input.call(event.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        disabled: busy,
                        style: "
                            width: 100%;
                            margin-top: 24px;
                            padding: 10px 16px;
                            border: none;
                            border-radius: 4px;
                            font-weight: bold;
                            background: {submit_bg};
                            color: {colors.accent_text};
                            cursor: pointer;
                        ",
                        "{submit_label}"
                    }
                }

                p {
                    style: "margin-top: 16px; text-align: center; font-size: 14px; color: {colors.text_secondary};",
                    "{switch_prompt} "
                    a {
                        href: "#",
                        style: "color: {colors.accent};",
                        onclick: move |event: MouseEvent| {
                            event.prevent_default();
                            on_switch.call(());
                        },
                        "{switch_label}"
                    }
                }
            }
        }
    }
}
