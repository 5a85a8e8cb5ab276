//! vidvault-core - Core library for VidVault
//!
//! This crate contains the session model, the video listing adapter, the
//! storage quota rules, and the HTTP clients for the auth and storage
//! services. It has no UI dependencies; the desktop app drives it.

pub mod auth;
pub mod config;
pub mod error;
mod http;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;
#[cfg(test)]
mod test_server;
pub mod usage;
pub mod util;

pub use error::{Error, Result};
pub use models::Video;
pub use session::{Identity, Session, SessionToken};
