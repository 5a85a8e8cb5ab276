//! Application services
//!
//! Orchestration over the auth and storage backends. These own the ordering
//! rules (signed URL before bytes, one refresh after each mutation) so the UI
//! only has to render results.

mod account;
mod library;

pub use account::{
    AccountService, SignUpOutcome, LOGIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE,
    SIGNUP_SUCCESS_MESSAGE,
};
pub use library::{LibraryService, LibrarySnapshot, MutationOutcome};

#[cfg(test)]
pub(crate) mod fakes;
