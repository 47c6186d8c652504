//! Contractor profile endpoints.

use serde::{Deserialize, Serialize};

use fundi_core::Result;
use fundi_core::models::{ContractorProfile, VerificationStatus};

use super::ListEnvelope;
use crate::client::ApiClient;

#[derive(Serialize)]
struct AvailabilityRequest {
    is_available: bool,
}

/// The backend's report on a contractor's document verification.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationReport {
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub verification_notes: Option<String>,
}

impl ApiClient {
    /// List contractors available for browsing.
    pub async fn contractors(&self) -> Result<Vec<ContractorProfile>> {
        let env: ListEnvelope<ContractorProfile> = self.get("/contractors/").await?;
        Ok(env.into_items())
    }

    /// Fetch one contractor profile by id.
    pub async fn contractor(&self, id: u64) -> Result<ContractorProfile> {
        self.get(&format!("/contractors/{}/", id)).await
    }

    /// Fetch the caller's own contractor profile.
    pub async fn my_contractor_profile(&self) -> Result<ContractorProfile> {
        self.get("/contractors/me/").await
    }

    /// Toggle the caller's availability for new assignments.
    pub async fn update_availability(&self, is_available: bool) -> Result<()> {
        self.patch_unit(
            "/contractors/update_availability/",
            &AvailabilityRequest { is_available },
        )
        .await
    }

    /// Fetch the caller's verification status.
    pub async fn verification_status(&self) -> Result<VerificationReport> {
        self.get("/contractors/verification_status/").await
    }
}
