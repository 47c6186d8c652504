//! fundi-core - Core types for the fundi marketplace client.
//!
//! This crate holds everything the HTTP client and the CLI share: the
//! session model (tokens, identity, durable store trait), the backend wire
//! payloads, and the error taxonomy. It performs no network I/O.

pub mod error;
pub mod models;
pub mod session;
pub mod types;

pub use error::{ApiError, AuthError, Error, InvalidInputError, TransportError};
pub use session::{
    AccessToken, Credentials, Identity, MemoryStore, RefreshToken, Session, SessionStore,
};
pub use types::{BaseUrl, Role};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
