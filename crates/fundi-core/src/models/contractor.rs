//! Contractor profile payloads.

use serde::{Deserialize, Serialize};

use super::User;

/// Outcome of the backend's document verification for a contractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
    UnderReview,
}

/// A skill tag on a contractor profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u64,
    pub name: String,
}

/// A contractor's public profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractorProfile {
    #[serde(flatten)]
    pub user: User,
    pub business_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub years_of_experience: u32,
    pub hourly_rate: f64,
    #[serde(default)]
    pub is_verified: bool,
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_jobs_completed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}
