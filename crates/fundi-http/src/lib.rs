//! fundi-http - Authenticated HTTP client for the fundi marketplace backend.
//!
//! Every backend call flows through one [`ApiClient`], which attaches the
//! stored credential and runs the bounded refresh-and-retry protocol on
//! authorization failure. Views (the CLI, or any other front end) never
//! handle auth failure themselves; they check [`Error::is_logged_out`] and
//! send the user back to login.
//!
//! [`Error::is_logged_out`]: fundi_core::Error::is_logged_out
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use fundi_core::{BaseUrl, Credentials, MemoryStore};
//! use fundi_http::ApiClient;
//!
//! # async fn example() -> fundi_core::Result<()> {
//! let base = BaseUrl::new("http://localhost:8000/api")?;
//! let client = ApiClient::new(base, Arc::new(MemoryStore::new()));
//!
//! client.login(&Credentials::new("amina@example.com", "pw")).await?;
//! for category in client.categories().await? {
//!     println!("{}: {}", category.id, category.name);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod transport;

pub use api::{RegistrationOutcome, VerificationReport};
pub use client::ApiClient;
