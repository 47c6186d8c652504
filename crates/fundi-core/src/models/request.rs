//! Service request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ServiceCategory;

/// How urgently the client needs the work done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Backend-owned lifecycle of a service request.
///
/// The client only displays these; transitions happen server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    PendingDeposit,
    PendingAssignment,
    Assigned,
    InProgress,
    PendingCompletion,
    Completed,
    Cancelled,
}

/// A client's request for work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: u64,
    /// Id of the client that posted the request.
    pub client: u64,
    pub category: ServiceCategory,
    pub title: String,
    pub description: String,
    pub location: String,
    pub budget: f64,
    #[serde(default)]
    pub estimated_duration: String,
    pub urgency: Urgency,
    pub status: RequestStatus,
    pub deposit_amount: f64,
    pub deposit_paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for posting a new service request.
#[derive(Debug, Clone, Serialize)]
pub struct NewServiceRequest {
    /// Category id.
    pub category: u64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub budget: f64,
    pub estimated_duration: String,
    pub urgency: Urgency,
}
