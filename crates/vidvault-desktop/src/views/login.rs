//! Login view

use dioxus::prelude::*;
use vidvault_core::auth::Credentials;
use vidvault_core::services::LOGIN_FAILED_MESSAGE;

use crate::components::AuthForm;
use crate::state::{AppState, AppView};

const SERVICES_UNAVAILABLE: &str = "Services are not configured; see the startup error above.";

#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| state.take_flash());
    let mut busy = use_signal(|| false);

    let submit = move |()| {
        if busy() {
            return;
        }
        error.set(None);
        success.set(None);

        let Some(services) = state.services.read().clone() else {
            error.set(Some(SERVICES_UNAVAILABLE.to_string()));
            return;
        };
        let credentials = Credentials::new(username().trim(), password());

        busy.set(true);
        spawn(async move {
            match services.account.log_in(&credentials).await {
                Ok(session) => {
                    success.set(Some("Login successful!".to_string()));
                    password.set(String::new());
                    state.session.set(Some(session));
                    state.navigate(AppView::Library);
                }
                Err(failure) => {
                    tracing::error!("Login failed: {}", failure);
                    error.set(Some(failure.user_message(LOGIN_FAILED_MESSAGE)));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        AuthForm {
            title: "Login",
            submit_label: "Login",
            username: username(),
            password: password(),
            busy: busy(),
            error: error(),
            success: success(),
            switch_prompt: "Don't have an account?",
            switch_label: "Sign Up",
            on_username_input: move |value| username.set(value),
            on_password_input: move |value| password.set(value),
            on_submit: submit,
            on_switch: move |()| state.navigate(AppView::SignUp),
        }
    }
}
