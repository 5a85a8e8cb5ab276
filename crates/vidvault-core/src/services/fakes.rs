//! In-memory auth and storage backends that record what was asked of them.

use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::json;

use crate::auth::{AuthBackend, Credentials, RegisteredUser};
use crate::models::Video;
use crate::session::tests::token_with_claims;
use crate::session::{Identity, SessionToken};
use crate::storage::StorageBackend;
use crate::{Error, Result};

pub const SIGNED_URL: &str = "https://upload.example.com/signed?sig=abc";

fn unavailable() -> Error {
    Error::Api {
        status: 503,
        message: Some("unavailable".to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageCall {
    List {
        user_id: String,
    },
    RequestUploadUrl {
        file_name: String,
        user_id: String,
        username: String,
    },
    Put {
        url: String,
        size_bytes: usize,
    },
    Delete {
        file_name: String,
        user_id: String,
    },
    Provision {
        user_id: String,
        username: String,
    },
}

#[derive(Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
struct StorageState {
    videos: Vec<Video>,
    calls: Vec<StorageCall>,
    pending_name: Option<String>,
    fail_list: bool,
    fail_upload_url: bool,
    fail_put: bool,
    fail_delete: bool,
    fail_provision: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FakeStorage {
    state: Arc<Mutex<StorageState>>,
}

impl FakeStorage {
    pub fn with_videos(videos: Vec<Video>) -> Self {
        let storage = Self::default();
        storage.state().videos = videos;
        storage
    }

    pub fn failing_list(self) -> Self {
        self.state().fail_list = true;
        self
    }

    pub fn failing_upload_url(self) -> Self {
        self.state().fail_upload_url = true;
        self
    }

    pub fn failing_put(self) -> Self {
        self.state().fail_put = true;
        self
    }

    pub fn failing_delete(self) -> Self {
        self.state().fail_delete = true;
        self
    }

    pub fn failing_provision(self) -> Self {
        self.state().fail_provision = true;
        self
    }

    pub fn calls(&self) -> Vec<StorageCall> {
        self.state().calls.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|call| matches!(call, StorageCall::List { .. }))
            .count()
    }

    fn state(&self) -> MutexGuard<'_, StorageState> {
        self.state.lock().unwrap()
    }
}

impl StorageBackend for FakeStorage {
    async fn list_videos(&self, identity: &Identity) -> Result<Vec<Video>> {
        let mut state = self.state();
        state.calls.push(StorageCall::List {
            user_id: identity.subject.clone(),
        });
        if state.fail_list {
            return Err(unavailable());
        }
        Ok(state.videos.clone())
    }

    async fn request_upload_url(&self, file_name: &str, identity: &Identity) -> Result<String> {
        let mut state = self.state();
        state.calls.push(StorageCall::RequestUploadUrl {
            file_name: file_name.to_string(),
            user_id: identity.subject.clone(),
            username: identity.username.clone(),
        });
        if state.fail_upload_url {
            return Err(unavailable());
        }
        state.pending_name = Some(file_name.to_string());
        Ok(SIGNED_URL.to_string())
    }

    async fn upload_to_signed_url(&self, signed_url: &str, bytes: Vec<u8>) -> Result<()> {
        let mut state = self.state();
        state.calls.push(StorageCall::Put {
            url: signed_url.to_string(),
            size_bytes: bytes.len(),
        });
        if state.fail_put {
            return Err(unavailable());
        }
        let name = state.pending_name.take().unwrap_or_default();
        state.videos.push(Video {
            id: name.clone(),
            url: format!("https://storage.example.com/b/vault/o/{name}?alt=media"),
            size_bytes: bytes.len() as u64,
        });
        Ok(())
    }

    async fn delete_video(&self, file_name: &str, identity: &Identity) -> Result<()> {
        let mut state = self.state();
        state.calls.push(StorageCall::Delete {
            file_name: file_name.to_string(),
            user_id: identity.subject.clone(),
        });
        if state.fail_delete {
            return Err(unavailable());
        }
        state
            .videos
            .retain(|video| video.object_name().as_deref() != Some(file_name));
        Ok(())
    }

    async fn provision_namespace(&self, user_id: &str, username: &str) -> Result<()> {
        let mut state = self.state();
        state.calls.push(StorageCall::Provision {
            user_id: user_id.to_string(),
            username: username.to_string(),
        });
        if state.fail_provision {
            return Err(unavailable());
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum AuthMode {
    SignIn { subject: String, username: String },
    Register { id: Option<String> },
    Reject { status: u16, message: Option<String> },
}

#[derive(Debug, Clone)]
pub struct FakeAuth {
    mode: AuthMode,
    calls: Arc<Mutex<usize>>,
}

impl FakeAuth {
    fn with_mode(mode: AuthMode) -> Self {
        Self {
            mode,
            calls: Arc::default(),
        }
    }

    pub fn signing_in_as(subject: &str, username: &str) -> Self {
        Self::with_mode(AuthMode::SignIn {
            subject: subject.to_string(),
            username: username.to_string(),
        })
    }

    pub fn registering(id: &str) -> Self {
        Self::with_mode(AuthMode::Register {
            id: Some(id.to_string()),
        })
    }

    pub fn registering_without_id() -> Self {
        Self::with_mode(AuthMode::Register { id: None })
    }

    pub fn rejecting(status: u16, message: Option<&str>) -> Self {
        Self::with_mode(AuthMode::Reject {
            status,
            message: message.map(ToString::to_string),
        })
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn record(&self) {
        *self.calls.lock().unwrap() += 1;
    }

    fn rejection(&self) -> Error {
        match &self.mode {
            AuthMode::Reject { status, message } => Error::Api {
                status: *status,
                message: message.clone(),
            },
            _ => Error::Api {
                status: 400,
                message: None,
            },
        }
    }
}

impl AuthBackend for FakeAuth {
    async fn sign_in(&self, _credentials: &Credentials) -> Result<SessionToken> {
        self.record();
        match &self.mode {
            AuthMode::SignIn { subject, username } => SessionToken::new(token_with_claims(
                &json!({ "sub": subject, "username": username }),
            )),
            _ => Err(self.rejection()),
        }
    }

    async fn sign_up(&self, _credentials: &Credentials) -> Result<RegisteredUser> {
        self.record();
        match &self.mode {
            AuthMode::Register { id } => Ok(RegisteredUser { id: id.clone() }),
            _ => Err(self.rejection()),
        }
    }
}
