//! Auth service client.

use std::fmt;
use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::normalize_base_url;
use crate::http::check_status;
use crate::session::SessionToken;
use crate::util::json_id_string;
use crate::{Error, Result};

/// Username and password as typed into the auth forms.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reject blank fields before anything goes over the wire.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::InvalidInput("Username is required.".to_string()));
        }
        if self.password.trim().is_empty() {
            return Err(Error::InvalidInput("Password is required.".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Account created by a successful sign-up.
///
/// The service does not always echo the new id back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub id: Option<String>,
}

/// Operations the app needs from the auth service.
pub trait AuthBackend: Clone + Send + Sync + 'static {
    fn sign_in(&self, credentials: &Credentials)
        -> impl Future<Output = Result<SessionToken>> + Send;

    fn sign_up(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<RegisteredUser>> + Send;
}

/// HTTP client for `/auth/signIn` and `/auth/signUp`.
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    client: Client,
}

impl AuthClient {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref(), "auth base URL")?,
            client: Client::builder().build()?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SignUpResponse {
    id: Option<Value>,
}

/// Id from a sign-up body; the status alone decides success.
fn registered_id(body: &str) -> Option<String> {
    serde_json::from_str::<SignUpResponse>(body)
        .ok()
        .and_then(|payload| payload.id)
        .as_ref()
        .and_then(json_id_string)
}

impl AuthBackend for AuthClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionToken> {
        tracing::debug!("Signing in as {}", credentials.username);
        let response = self
            .client
            .post(format!("{}/auth/signIn", self.base_url))
            .json(credentials)
            .send()
            .await?;
        let response = check_status(response, "sign-in").await?;
        let payload = response.json::<SignInResponse>().await?;
        let token = payload
            .access_token
            .ok_or(Error::MissingField("access_token"))?;
        SessionToken::new(token)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<RegisteredUser> {
        tracing::debug!("Registering {}", credentials.username);
        let response = self
            .client
            .post(format!("{}/auth/signUp", self.base_url))
            .json(credentials)
            .send()
            .await?;
        let response = check_status(response, "sign-up").await?;
        let body = response.text().await?;
        Ok(RegisteredUser {
            id: registered_id(&body),
        })
    }
}
