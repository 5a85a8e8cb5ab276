//! Application services
//!
//! Concrete service wiring for the desktop app: keyring-backed session
//! storage, native notices, and the core services over real HTTP clients.

mod notice;
mod session_store;

use std::sync::Arc;

use vidvault_core::auth::AuthClient;
use vidvault_core::config::ClientConfig;
use vidvault_core::services::{AccountService, LibraryService};
use vidvault_core::session::SessionManager;
use vidvault_core::storage::StorageClient;

pub use notice::{show_notice, NoticeLevel};
pub use session_store::KeyringSessionStore;

pub type DesktopAccountService = AccountService<AuthClient, StorageClient, KeyringSessionStore>;
pub type DesktopLibraryService = LibraryService<StorageClient>;

/// Services shared by every screen.
#[derive(Clone)]
pub struct AppServices {
    pub account: Arc<DesktopAccountService>,
    pub library: Arc<DesktopLibraryService>,
}

impl AppServices {
    pub fn new(config: &ClientConfig) -> vidvault_core::Result<Self> {
        let auth = AuthClient::new(&config.auth_base_url)?;
        let storage = StorageClient::new(&config.storage_base_url)?;
        let sessions = SessionManager::new(KeyringSessionStore::default());

        Ok(Self {
            account: Arc::new(AccountService::new(auth, storage.clone(), sessions)),
            library: Arc::new(LibraryService::new(storage, config.quota_mb)),
        })
    }
}
