//! Main application component

use dioxus::prelude::*;
use vidvault_core::config::ClientConfig;
use vidvault_core::Session;

use crate::services::AppServices;
use crate::state::{AppState, AppView};
use crate::theme::ResolvedTheme;
use crate::views::{Library, Login, SignUp};

/// Build services and read the persisted session once.
fn bootstrap() -> (Option<AppServices>, Option<Session>, Option<String>) {
    let services = match ClientConfig::from_env().and_then(|config| AppServices::new(&config)) {
        Ok(services) => services,
        Err(error) => {
            tracing::error!("Failed to initialize services: {}", error);
            return (None, None, Some(error.to_string()));
        }
    };

    match services.account.sessions().restore() {
        Ok(session) => (Some(services), session, None),
        Err(error) => {
            tracing::error!("Failed to read persisted session: {}", error);
            (Some(services), None, Some(error.to_string()))
        }
    }
}

/// Root application component
#[component]
pub fn App() -> Element {
    let (initial_services, initial_session, initial_error) = use_hook(bootstrap);
    let initial_view = if initial_session.is_some() {
        AppView::Library
    } else {
        AppView::Login
    };

    let view = use_signal(|| initial_view);
    let session = use_signal(|| initial_session);
    let flash = use_signal(|| None::<String>);
    let services = use_signal(|| initial_services);
    let startup_error = use_signal(|| initial_error);
    let theme = use_signal(ResolvedTheme::from_system);

    let state = use_context_provider(|| AppState {
        view,
        session,
        flash,
        services,
        startup_error,
        theme,
    });

    let colors = theme().palette();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_page};
                color: {colors.text_primary};
            ",

            if let Some(error) = startup_error() {
                div {
                    class: "startup-error",
                    style: "padding: 12px 16px; background: {colors.error_bg}; color: {colors.danger};",
                    "{error}"
                }
            }

            match state.effective_view() {
                AppView::Login => rsx! { Login {} },
                AppView::SignUp => rsx! { SignUp {} },
                AppView::Library => rsx! { Library {} },
            }
        }
    }
}
