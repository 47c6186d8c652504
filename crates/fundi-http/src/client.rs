//! The authenticated API client.
//!
//! Every backend call goes through [`ApiClient::dispatch`], which owns the
//! credential-attachment and recovery protocol: read the session store at
//! dispatch, attach the bearer token, and on a 401 run at most one
//! refresh-and-retry cycle before clearing the store and reporting the
//! logged-out state. Individual endpoint methods never handle auth
//! failures themselves.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use fundi_core::error::{AuthError, Error};
use fundi_core::{AccessToken, BaseUrl, RefreshToken, Result, SessionStore};

use crate::transport::{Transport, parse_error, read_json};

const REFRESH_PATH: &str = "/auth/token/refresh/";

/// Single choke point for all backend calls.
///
/// The session store is injected so embedders and tests can substitute
/// their own persistence; the client itself never navigates or prompts,
/// it only reports the terminal logged-out state through
/// [`Error::is_logged_out`].
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use fundi_core::{BaseUrl, Credentials, MemoryStore};
/// use fundi_http::ApiClient;
///
/// # async fn example() -> fundi_core::Result<()> {
/// let base = BaseUrl::new("https://api.fundi.example/api")?;
/// let client = ApiClient::new(base, Arc::new(MemoryStore::new()));
///
/// let user = client.login(&Credentials::new("amina@example.com", "pw")).await?;
/// let balance = client.wallet_balance().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    transport: Transport,
    store: Arc<dyn SessionStore>,
}

/// Outcome of examining one response inside the retry protocol.
enum Flow {
    /// The logical request is finished with this successful response.
    Complete(reqwest::Response),
    /// The credential was refreshed; re-issue the original request once.
    RetryAfterRefresh,
}

impl ApiClient {
    /// Create a client for the given backend with an injected session store.
    pub fn new(base: BaseUrl, store: Arc<dyn SessionStore>) -> Self {
        Self {
            transport: Transport::new(base),
            store,
        }
    }

    /// Returns the backend base URL.
    pub fn base(&self) -> &BaseUrl {
        self.transport.base()
    }

    /// Returns the injected session store.
    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Run one logical request through the recovery protocol.
    ///
    /// The store is re-read at every dispatch, so a request racing with a
    /// concurrent refresh picks up whatever credential is current when it
    /// is (re-)sent.
    #[instrument(skip(self, body), fields(base = %self.transport.base()))]
    pub(crate) async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let mut refreshed = false;
        loop {
            let token = self.current_token().await?;
            let response = self
                .transport
                .send_json(method.clone(), path, body, token.as_ref())
                .await?;

            match self.advance(response, refreshed).await? {
                Flow::Complete(response) => return Ok(response),
                Flow::RetryAfterRefresh => refreshed = true,
            }
        }
    }

    /// Decide what one response means for the logical request.
    async fn advance(&self, response: reqwest::Response, refreshed: bool) -> Result<Flow> {
        let status = response.status();
        if status != StatusCode::UNAUTHORIZED {
            if status.is_success() {
                return Ok(Flow::Complete(response));
            }
            return Err(Error::Api(parse_error(response).await));
        }

        let denied = parse_error(response).await;

        // One refresh per logical request; a second 401 is terminal.
        let refresh = if refreshed {
            None
        } else {
            self.store
                .load()
                .await?
                .and_then(|session| session.refresh_token().cloned())
        };

        let Some(refresh) = refresh else {
            self.store.clear().await?;
            return Err(Error::Auth(AuthError::LoggedOut { source: denied }));
        };

        match self.refresh_credential(&refresh).await {
            Ok(()) => Ok(Flow::RetryAfterRefresh),
            Err(err) => {
                warn!(error = %err, "credential refresh failed, clearing session");
                self.store.clear().await?;
                Err(Error::Auth(AuthError::RefreshFailed(Box::new(err))))
            }
        }
    }

    /// Mint a new access token and persist it.
    ///
    /// Only the credential is replaced; the refresh token and the identity
    /// stay as they were.
    async fn refresh_credential(&self, refresh: &RefreshToken) -> Result<()> {
        #[derive(Serialize)]
        struct RefreshRequest<'a> {
            refresh: &'a str,
        }

        #[derive(Deserialize)]
        struct RefreshResponse {
            access: String,
        }

        debug!("refreshing access credential");

        let request = RefreshRequest {
            refresh: refresh.as_str(),
        };
        let response = self
            .transport
            .send_json(Method::POST, REFRESH_PATH, Some(&request), None)
            .await?;
        let body: RefreshResponse = expect_success(response).await?;

        // The session can disappear under us if a logout raced the refresh;
        // the retry will then go out unauthenticated and fail terminally.
        if let Some(session) = self.store.load().await? {
            self.store
                .save(&session.with_access(AccessToken::new(body.access)))
                .await?;
        }
        Ok(())
    }

    async fn current_token(&self) -> Result<Option<AccessToken>> {
        Ok(self
            .store
            .load()
            .await?
            .map(|session| session.access_token().clone()))
    }

    // ------------------------------------------------------------------
    // Request helpers used by the endpoint modules
    // ------------------------------------------------------------------

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self.dispatch::<()>(Method::GET, path, None).await?;
        read_json(response).await
    }

    pub(crate) async fn post<B, R>(&self, path: &str, body: Option<&B>) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.dispatch(Method::POST, path, body).await?;
        read_json(response).await
    }

    pub(crate) async fn post_unit<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(Method::POST, path, body).await?;
        Ok(())
    }

    pub(crate) async fn patch_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(Method::PATCH, path, Some(body)).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // One-shot paths for session-establishing endpoints
    // ------------------------------------------------------------------

    /// POST outside the recovery protocol.
    ///
    /// Login, registration, and password reset use this: a 401 from them
    /// means bad credentials and must surface as an ordinary [`ApiError`],
    /// not tear down an unrelated stored session.
    ///
    /// [`ApiError`]: fundi_core::ApiError
    pub(crate) async fn public_post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .transport
            .send_json(Method::POST, path, Some(body), None)
            .await?;
        expect_success(response).await
    }

    pub(crate) async fn public_post_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .transport
            .send_json(Method::POST, path, Some(body), None)
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Api(parse_error(response).await))
        }
    }

    pub(crate) async fn public_post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<R> {
        let response = self.transport.send_multipart(path, form, None).await?;
        expect_success(response).await
    }
}

/// Parse a one-shot response: JSON body on 2xx, [`ApiError`] otherwise.
///
/// [`ApiError`]: fundi_core::ApiError
async fn expect_success<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();
    if status.is_success() {
        read_json(response).await
    } else {
        Err(Error::Api(parse_error(response).await))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", self.transport.base())
            .finish_non_exhaustive()
    }
}
