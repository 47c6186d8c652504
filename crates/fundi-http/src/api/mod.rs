//! Endpoint methods, one module per backend area.
//!
//! Each module adds an `impl ApiClient` block with the calls that area
//! offers, keeping request/response DTOs beside the calls that use them.

mod assignments;
mod auth;
mod categories;
mod contractors;
mod requests;
mod reviews;
mod wallet;

pub use auth::RegistrationOutcome;
pub use contractors::VerificationReport;

use serde::Deserialize;

/// List bodies arrive either as a bare JSON array or wrapped under
/// `results` by the paginated backend variant. All list endpoints
/// normalize through this type so the shape tolerance lives in exactly
/// one place.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListEnvelope<T> {
    Wrapped { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Wrapped { results } => results,
            ListEnvelope::Plain(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_array_normalizes() {
        let env: ListEnvelope<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(env.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn wrapped_results_normalize() {
        let env: ListEnvelope<u32> =
            serde_json::from_str(r#"{"count": 3, "next": null, "results": [1, 2, 3]}"#).unwrap();
        assert_eq!(env.into_items(), vec![1, 2, 3]);
    }
}
