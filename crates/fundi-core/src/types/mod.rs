//! Validated value types shared across the fundi crates.

mod base_url;
mod role;

pub use base_url::BaseUrl;
pub use role::Role;
