//! Backend base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated backend base URL.
///
/// Only `http` and `https` schemes are accepted. Endpoint paths are joined
/// with [`BaseUrl::endpoint`], which preserves the backend's trailing-slash
/// convention.
///
/// # Example
///
/// ```
/// use fundi_core::BaseUrl;
///
/// let base = BaseUrl::new("https://api.fundi.example/api").unwrap();
/// assert_eq!(
///     base.endpoint("/wallet/balance/"),
///     "https://api.fundi.example/api/wallet/balance/"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or uses a scheme other
    /// than `http` or `https`.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(InvalidInputError::BaseUrl {
                    value: s.to_string(),
                    reason: format!("unsupported scheme '{}'", other),
                }
                .into());
            }
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::BaseUrl {
                value: s.to_string(),
                reason: "missing host".to_string(),
            }
            .into());
        }

        Ok(Self(url))
    }

    /// Returns the full URL for an endpoint path.
    ///
    /// The path is expected to start with `/`; the backend's trailing
    /// slashes are kept as given.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}{}", base, path)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BaseUrl {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<BaseUrl> for String {
    fn from(url: BaseUrl) -> Self {
        url.0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https() {
        let base = BaseUrl::new("https://api.fundi.example/api").unwrap();
        assert_eq!(base.host(), Some("api.fundi.example"));
    }

    #[test]
    fn accepts_http_for_local_development() {
        assert!(BaseUrl::new("http://localhost:8000/api").is_ok());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(BaseUrl::new("ftp://api.fundi.example").is_err());
        assert!(BaseUrl::new("file:///tmp/api").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(BaseUrl::new("not a url").is_err());
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let base = BaseUrl::new("http://localhost:8000/api/").unwrap();
        assert_eq!(
            base.endpoint("/categories/"),
            "http://localhost:8000/api/categories/"
        );
    }

    #[test]
    fn endpoint_with_bare_host() {
        let base = BaseUrl::new("http://localhost:8000").unwrap();
        assert_eq!(
            base.endpoint("/auth/login/"),
            "http://localhost:8000/auth/login/"
        );
    }
}
