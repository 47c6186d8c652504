//! Raw HTTP plumbing.
//!
//! The transport knows how to build and send a single HTTP request and how
//! to read a response body; it knows nothing about sessions or retries.
//! That protocol lives in [`crate::client::ApiClient`].

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use fundi_core::error::{ApiError, Error, InvalidInputError, TransportError};
use fundi_core::{AccessToken, BaseUrl};

/// HTTP transport for backend requests.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base: BaseUrl,
}

impl Transport {
    /// Create a new transport for the given backend base URL.
    pub(crate) fn new(base: BaseUrl) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fundi/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { http, base }
    }

    /// Returns the base URL this transport is configured for.
    pub(crate) fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Send a request with an optional JSON body and optional bearer token.
    pub(crate) async fn send_json<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&AccessToken>,
    ) -> Result<reqwest::Response, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base.endpoint(path);
        debug!(%method, path, authenticated = token.is_some(), "backend request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, bearer(token)?);
        }

        let response = request.send().await.map_err(transport_error)?;
        trace!(status = %response.status(), "backend response");
        Ok(response)
    }

    /// Send a multipart POST with an optional bearer token.
    pub(crate) async fn send_multipart(
        &self,
        path: &str,
        form: multipart::Form,
        token: Option<&AccessToken>,
    ) -> Result<reqwest::Response, Error> {
        let url = self.base.endpoint(path);
        debug!(path, authenticated = token.is_some(), "backend multipart request");

        let mut request = self.http.post(&url).multipart(form);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, bearer(token)?);
        }

        let response = request.send().await.map_err(transport_error)?;
        trace!(status = %response.status(), "backend response");
        Ok(response)
    }
}

/// Build the authorization header value for a token.
fn bearer(token: &AccessToken) -> Result<HeaderValue, Error> {
    let value = format!("Bearer {}", token.as_str());
    let mut value = HeaderValue::from_str(&value).map_err(|_| InvalidInputError::Token)?;
    value.set_sensitive(true);
    Ok(value)
}

/// Map a reqwest failure (no response received) onto the transport taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}

/// Parse a 2xx response body as JSON.
pub(crate) async fn read_json<R: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<R, Error> {
    response.json::<R>().await.map_err(transport_error)
}

/// The optional fields backends put in error bodies.
#[derive(Debug, serde::Deserialize, Default)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
    error: Option<String>,
    code: Option<String>,
}

/// Parse a non-2xx response into an [`ApiError`].
///
/// A missing or non-JSON body falls back to a generic message for the
/// status class; the caller never sees an empty message.
pub(crate) async fn parse_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.json::<ErrorBody>().await.unwrap_or_default();

    let detail = body.detail.or(body.message).or(body.error);
    ApiError::new(status, body.code, detail)
}
