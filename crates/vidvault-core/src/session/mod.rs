//! Session token, decoded identity, and token persistence.
//!
//! The token is issued by the auth service and treated as opaque except for
//! its claim set, which is decoded locally (no signature check) to learn who
//! is signed in. Verification is the services' job.

use std::fmt;
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::Value;

use crate::util::json_id_string;
use crate::{Error, Result};

/// Bearer token returned by a successful sign-in.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into().trim().to_string();
        if raw.is_empty() {
            return Err(Error::InvalidToken("token is empty".to_string()));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SessionToken([REDACTED])")
    }
}

/// Who the current token says we are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    /// `sub` claim; the storage service calls it `user_id`.
    pub subject: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
struct TokenClaims {
    sub: Option<Value>,
    username: Option<String>,
}

/// Decode the claim set of a JWT-shaped token without verifying it.
pub fn decode_identity(token: &SessionToken) -> Result<Identity> {
    let mut segments = token.as_str().split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_header), Some(payload)) if !payload.is_empty() => payload,
        _ => {
            return Err(Error::InvalidToken(
                "expected header.payload.signature".to_string(),
            ))
        }
    };

    // Tolerate standard-alphabet and padded encodings.
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|ch| match ch {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|error| Error::InvalidToken(format!("payload is not base64url: {error}")))?;
    let claims: TokenClaims = serde_json::from_slice(&bytes)
        .map_err(|error| Error::InvalidToken(format!("payload is not a claim set: {error}")))?;

    let subject = claims
        .sub
        .as_ref()
        .and_then(json_id_string)
        .ok_or_else(|| Error::InvalidToken("claim set has no `sub`".to_string()))?;

    Ok(Identity {
        subject,
        username: claims.username.unwrap_or_default(),
    })
}

/// A signed-in user: the token plus the identity decoded from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: SessionToken,
    identity: Identity,
}

impl Session {
    pub fn from_token(token: SessionToken) -> Result<Self> {
        let identity = decode_identity(&token)?;
        Ok(Self { token, identity })
    }

    pub const fn token(&self) -> &SessionToken {
        &self.token
    }

    pub const fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Where the token lives between app launches. One token, one fixed key.
pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load_token(&self) -> Result<Option<String>>;
    fn save_token(&self, token: &str) -> Result<()>;
    fn clear_token(&self) -> Result<()>;
}

/// In-process token store.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.token
            .lock()
            .map_err(|_| Error::SecureStorage("session store lock poisoned".to_string()))
    }
}

impl SessionPersistence for MemorySessionStore {
    fn load_token(&self) -> Result<Option<String>> {
        Ok(self.slot()?.clone())
    }

    fn save_token(&self, token: &str) -> Result<()> {
        *self.slot()? = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        *self.slot()? = None;
        Ok(())
    }
}

/// Owns the session lifecycle: restored at startup, established at login,
/// cleared at logout.
#[derive(Debug, Clone)]
pub struct SessionManager<P: SessionPersistence> {
    store: P,
}

impl<P: SessionPersistence> SessionManager<P> {
    pub const fn new(store: P) -> Self {
        Self { store }
    }

    /// Read the persisted token once.
    ///
    /// No token means no identity. A token that no longer decodes is removed
    /// so the next launch starts clean.
    pub fn restore(&self) -> Result<Option<Session>> {
        let Some(raw) = self.store.load_token()? else {
            tracing::debug!("No persisted session token");
            return Ok(None);
        };

        match SessionToken::new(raw).and_then(Session::from_token) {
            Ok(session) => {
                tracing::info!("Restored session for user {}", session.identity().subject);
                Ok(Some(session))
            }
            Err(error) => {
                tracing::warn!("Discarding persisted session token: {}", error);
                self.store.clear_token()?;
                Ok(None)
            }
        }
    }

    /// Decode `token`, then persist it. An undecodable token is never stored.
    pub fn establish(&self, token: SessionToken) -> Result<Session> {
        let session = Session::from_token(token)?;
        self.store.save_token(session.token().as_str())?;
        Ok(session)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear_token()
    }
}
