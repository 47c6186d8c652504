//! Review payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client's review of completed work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    /// Service request id.
    pub service_request: u64,
    /// Contractor id.
    pub contractor: u64,
    /// Client id.
    pub client: u64,
    pub rating: u8,
    pub professionalism_rating: u8,
    pub quality_rating: u8,
    pub timeliness_rating: u8,
    pub communication_rating: u8,
    #[serde(default)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a review.
#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub service_request: u64,
    pub contractor: u64,
    pub rating: u8,
    pub professionalism_rating: u8,
    pub quality_rating: u8,
    pub timeliness_rating: u8,
    pub communication_rating: u8,
    pub comment: String,
}
