//! Log in, sign up, and log out.

use crate::auth::{AuthBackend, Credentials};
use crate::session::{Session, SessionManager, SessionPersistence};
use crate::storage::StorageBackend;
use crate::Result;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const SIGNUP_FAILED_MESSAGE: &str = "Sign-up failed. Please try again.";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Sign-up successful! Please sign in.";

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub user_id: Option<String>,
    /// `false` when the storage namespace could not be created or the
    /// service returned no id. The account exists either way.
    pub namespace_provisioned: bool,
}

#[derive(Debug, Clone)]
pub struct AccountService<A, S, P>
where
    A: AuthBackend,
    S: StorageBackend,
    P: SessionPersistence,
{
    auth: A,
    storage: S,
    sessions: SessionManager<P>,
}

impl<A, S, P> AccountService<A, S, P>
where
    A: AuthBackend,
    S: StorageBackend,
    P: SessionPersistence,
{
    pub const fn new(auth: A, storage: S, sessions: SessionManager<P>) -> Self {
        Self {
            auth,
            storage,
            sessions,
        }
    }

    pub const fn sessions(&self) -> &SessionManager<P> {
        &self.sessions
    }

    /// Sign in and persist the returned token.
    pub async fn log_in(&self, credentials: &Credentials) -> Result<Session> {
        credentials.validate()?;
        let token = self.auth.sign_in(credentials).await?;
        let session = self.sessions.establish(token)?;
        tracing::info!("Signed in as {}", session.identity().username);
        Ok(session)
    }

    /// Register, then try to create the user's storage namespace.
    ///
    /// Only the registration decides success. Provisioning failures are
    /// logged and reported through [`SignUpOutcome::namespace_provisioned`].
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome> {
        credentials.validate()?;
        let user = self.auth.sign_up(credentials).await?;

        let Some(user_id) = user.id else {
            tracing::warn!(
                "Registered {} but the service returned no id; skipping storage namespace",
                credentials.username
            );
            return Ok(SignUpOutcome {
                user_id: None,
                namespace_provisioned: false,
            });
        };
        tracing::info!("Registered user {}", user_id);

        let namespace_provisioned = match self
            .storage
            .provision_namespace(&user_id, &credentials.username)
            .await
        {
            Ok(()) => {
                tracing::info!("Provisioned storage namespace for {}", user_id);
                true
            }
            Err(error) => {
                tracing::error!(
                    "Failed to provision storage namespace for {}: {}",
                    user_id,
                    error
                );
                false
            }
        };

        Ok(SignUpOutcome {
            user_id: Some(user_id),
            namespace_provisioned,
        })
    }

    pub fn log_out(&self) -> Result<()> {
        self.sessions.clear()?;
        tracing::info!("Signed out");
        Ok(())
    }
}
