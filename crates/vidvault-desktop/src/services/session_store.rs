//! Desktop session persistence using the OS keyring.

use keyring::Entry;
use vidvault_core::session::SessionPersistence;
use vidvault_core::{Error, Result};

const KEYRING_SERVICE_NAME: &str = "vidvault";
const KEYRING_TOKEN_USERNAME: &str = "session_token";

/// Token store backed by the OS keyring (`keyring` crate).
#[derive(Debug, Clone)]
pub struct KeyringSessionStore {
    service_name: String,
    username: String,
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_TOKEN_USERNAME.to_string(),
        }
    }
}

impl KeyringSessionStore {
    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }
}

impl SessionPersistence for KeyringSessionStore {
    fn load_token(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }

    fn save_token(&self, token: &str) -> Result<()> {
        self.entry()?
            .set_password(token)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }

    fn clear_token(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }
}
