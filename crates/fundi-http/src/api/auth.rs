//! Authentication and registration endpoints.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use fundi_core::error::InvalidInputError;
use fundi_core::models::{Document, NewClient, NewContractor, User};
use fundi_core::{AccessToken, Credentials, RefreshToken, Result, Session};

use crate::client::ApiClient;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access: String,
    refresh: Option<String>,
    user: User,
}

#[derive(Serialize)]
struct PasswordResetRequest<'a> {
    email: &'a str,
}

/// What a registration call produced.
///
/// Some backend versions return a token pair with the created account and
/// some require a separate login; the session is saved only in the former
/// case.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RegistrationOutcome {
    /// The backend logged the new account in directly.
    SignedIn {
        access: String,
        refresh: Option<String>,
        user: User,
    },
    /// Account created; the caller must log in.
    Created(User),
}

impl RegistrationOutcome {
    /// The created account, whichever shape arrived.
    pub fn user(&self) -> &User {
        match self {
            RegistrationOutcome::SignedIn { user, .. } => user,
            RegistrationOutcome::Created(user) => user,
        }
    }
}

impl ApiClient {
    /// Authenticate and store the resulting session.
    ///
    /// The session is a full replacement: credential, refresh credential,
    /// and identity are written together. The identity's role comes from
    /// the server response, never from anything held client-side.
    #[instrument(skip(self, credentials), fields(email = credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        let response: LoginResponse = self.public_post("/auth/login/", &request).await?;

        self.save_session(&response.access, response.refresh.as_deref(), &response.user)
            .await?;

        info!(role = %response.user.role(), "logged in");
        Ok(response.user)
    }

    /// Log out locally and best-effort on the backend.
    ///
    /// The local session is cleared even when the backend call fails;
    /// logout must not be blockable by a broken network.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        if let Err(err) = self.post_unit::<()>("/auth/logout/", None).await {
            // An already-dead session has the same end state.
            if !err.is_logged_out() {
                warn!(error = %err, "backend logout failed, clearing local session anyway");
            }
        }
        self.session_store().clear().await
    }

    /// Register a client account.
    pub async fn register_client(&self, new: &NewClient) -> Result<RegistrationOutcome> {
        let outcome: RegistrationOutcome = self.public_post("/auth/register/client/", new).await?;
        self.adopt_registration(&outcome).await?;
        Ok(outcome)
    }

    /// Register a contractor account with its verification documents.
    #[instrument(skip(self, new), fields(email = %new.email))]
    pub async fn register_contractor(&self, new: &NewContractor) -> Result<RegistrationOutcome> {
        let outcome: RegistrationOutcome = self
            .public_post_multipart("/auth/register/contractor/", contractor_form(new)?)
            .await?;
        self.adopt_registration(&outcome).await?;
        Ok(outcome)
    }

    /// Request a password-reset email.
    pub async fn password_reset(&self, email: &str) -> Result<()> {
        self.public_post_unit("/auth/password-reset/", &PasswordResetRequest { email })
            .await
    }

    async fn adopt_registration(&self, outcome: &RegistrationOutcome) -> Result<()> {
        if let RegistrationOutcome::SignedIn {
            access,
            refresh,
            user,
        } = outcome
        {
            self.save_session(access, refresh.as_deref(), user).await?;
        }
        Ok(())
    }

    async fn save_session(&self, access: &str, refresh: Option<&str>, user: &User) -> Result<()> {
        let session = Session::new(
            AccessToken::new(access),
            refresh.map(RefreshToken::new),
            user.identity(),
        );
        self.session_store().save(&session).await
    }
}

fn contractor_form(new: &NewContractor) -> Result<Form> {
    let mut form = Form::new()
        .text("email", new.email.clone())
        .text("password", new.password.clone())
        .text("full_name", new.full_name.clone())
        .text("phone", new.phone.clone())
        .text("business_name", new.business_name.clone())
        .text("bio", new.bio.clone())
        .text("years_of_experience", new.years_of_experience.to_string())
        .text("hourly_rate", new.hourly_rate.to_string())
        .text("location", new.location.clone())
        .part("id_document", document_part(&new.id_document)?)
        .part("kra_pin_document", document_part(&new.kra_pin_document)?);

    if let Some(permit) = &new.work_permit_document {
        form = form.part("work_permit_document", document_part(permit)?);
    }

    Ok(form)
}

fn document_part(doc: &Document) -> Result<Part> {
    Part::bytes(doc.bytes.clone())
        .file_name(doc.file_name.clone())
        .mime_str(&doc.content_type)
        .map_err(|_| {
            InvalidInputError::ContentType {
                value: doc.content_type.clone(),
            }
            .into()
        })
}
