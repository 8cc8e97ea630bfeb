//! # evonto
//!
//! Target-independent core of the Evonto event client.
//!
//! This crate owns the session lifecycle and the REST contract shared by the
//! browser `client` and the native `cli`. It never touches a concrete HTTP
//! stack or storage medium directly: both sit behind traits
//! ([`http::Transport`], [`storage::Storage`]) so the same interceptor and
//! session logic runs in WASM, in a terminal, and under test.

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod guard;
pub mod http;
pub mod invitations;
pub mod nav;
pub mod rsvp;
pub mod session;
pub mod storage;
pub mod types;

#[cfg(test)]
mod test_support;

pub use api::{ApiClient, TokenCheck};
pub use config::{ApiConfig, ProfileCapture};
pub use error::ApiError;
pub use session::{Session, SessionStore, UserProfile};
