//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;
use vidvault_core::Session;

use crate::services::AppServices;
use crate::theme::ResolvedTheme;

/// Which screen is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Login,
    SignUp,
    Library,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Requested screen; the library needs a session to be shown
    pub view: Signal<AppView>,
    /// Signed-in session, if any
    pub session: Signal<Option<Session>>,
    /// One-shot message to show on the next auth screen
    pub flash: Signal<Option<String>>,
    /// Service wiring, absent when configuration failed
    pub services: Signal<Option<AppServices>>,
    /// Configuration or keyring error raised during startup
    pub startup_error: Signal<Option<String>>,
    /// Resolved light/dark theme
    pub theme: Signal<ResolvedTheme>,
}

impl AppState {
    /// Screen to render, after applying the session guard.
    #[must_use]
    pub fn effective_view(&self) -> AppView {
        resolve_view((self.view)(), (self.session)().is_some())
    }

    /// Move to `view`.
    pub fn navigate(&mut self, view: AppView) {
        tracing::debug!("Navigating to {:?}", view);
        self.view.set(view);
    }

    /// Take the pending flash message, if any.
    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.write().take()
    }
}

/// Orders listing snapshots that may finish out of order.
///
/// Each listing operation takes a ticket when it starts; a snapshot is only
/// shown if no later-started operation has been shown already.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnapshotOrder {
    issued: u64,
    applied: u64,
}

impl SnapshotOrder {
    pub const fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Record `ticket` as shown unless something newer already is.
    pub const fn accept(&mut self, ticket: u64) -> bool {
        if ticket > self.applied {
            self.applied = ticket;
            true
        } else {
            false
        }
    }
}

/// The library view is only reachable with a session.
pub const fn resolve_view(requested: AppView, signed_in: bool) -> AppView {
    match (requested, signed_in) {
        (AppView::Library, false) => AppView::Login,
        (view, _) => view,
    }
}
