//! Sign-up view

use dioxus::prelude::*;
use vidvault_core::auth::Credentials;
use vidvault_core::services::{SIGNUP_FAILED_MESSAGE, SIGNUP_SUCCESS_MESSAGE};

use crate::components::AuthForm;
use crate::state::{AppState, AppView};

#[component]
pub fn SignUp() -> Element {
    let mut state = use_context::<AppState>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |()| {
        if busy() {
            return;
        }
        error.set(None);

        let Some(services) = state.services.read().clone() else {
            error.set(Some(
                "Services are not configured; see the startup error above.".to_string(),
            ));
            return;
        };
        let credentials = Credentials::new(username().trim(), password());

        busy.set(true);
        spawn(async move {
            match services.account.sign_up(&credentials).await {
                Ok(outcome) => {
                    if !outcome.namespace_provisioned {
                        tracing::warn!(
                            "Account {} has no storage namespace yet",
                            credentials.username
                        );
                    }
                    username.set(String::new());
                    password.set(String::new());
                    state.flash.set(Some(SIGNUP_SUCCESS_MESSAGE.to_string()));
                    state.navigate(AppView::Login);
                }
                Err(failure) => {
                    tracing::error!("Sign-up failed: {}", failure);
                    error.set(Some(failure.user_message(SIGNUP_FAILED_MESSAGE)));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        AuthForm {
            title: "Sign Up",
            submit_label: "Sign Up",
            username: username(),
            password: password(),
            busy: busy(),
            error: error(),
            switch_prompt: "Already have an account?",
            switch_label: "Log In",
            on_username_input: move |value| username.set(value),
            on_password_input: move |value| password.set(value),
            on_submit: submit,
            on_switch: move |()| state.navigate(AppView::Login),
        }
    }
}
