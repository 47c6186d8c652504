//! Registration payloads.

use serde::Serialize;
use std::fmt;

/// Payload for registering a client account.
#[derive(Clone, Serialize)]
pub struct NewClient {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

// Hide the password in Debug output
impl fmt::Debug for NewClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewClient")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// A verification document uploaded at contractor registration.
///
/// Bytes are held in memory so the payload is independent of the
/// filesystem by the time it reaches the HTTP layer.
#[derive(Clone)]
pub struct Document {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Payload for registering a contractor account.
///
/// Sent as a multipart form because of the document attachments.
#[derive(Clone)]
pub struct NewContractor {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub business_name: String,
    pub bio: String,
    pub years_of_experience: u32,
    pub hourly_rate: f64,
    pub location: String,
    pub id_document: Document,
    pub kra_pin_document: Document,
    pub work_permit_document: Option<Document>,
}

// Hide the password in Debug output
impl fmt::Debug for NewContractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewContractor")
            .field("email", &self.email)
            .field("business_name", &self.business_name)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
