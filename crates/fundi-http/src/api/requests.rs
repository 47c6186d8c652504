//! Service request endpoints.

use tracing::instrument;

use fundi_core::Result;
use fundi_core::models::{NewServiceRequest, ServiceRequest};

use super::ListEnvelope;
use crate::client::ApiClient;

impl ApiClient {
    /// Post a new service request.
    #[instrument(skip(self, new), fields(title = %new.title))]
    pub async fn create_service_request(&self, new: &NewServiceRequest) -> Result<ServiceRequest> {
        self.post("/service-requests/", Some(new)).await
    }

    /// List the caller's service requests.
    pub async fn service_requests(&self) -> Result<Vec<ServiceRequest>> {
        let env: ListEnvelope<ServiceRequest> = self.get("/service-requests/").await?;
        Ok(env.into_items())
    }

    /// Fetch one service request by id.
    pub async fn service_request(&self, id: u64) -> Result<ServiceRequest> {
        self.get(&format!("/service-requests/{}/", id)).await
    }

    /// Confirm the escrow deposit payment for a request.
    pub async fn confirm_payment(&self, id: u64) -> Result<ServiceRequest> {
        self.post::<(), _>(&format!("/service-requests/{}/confirm-payment/", id), None)
            .await
    }

    /// Confirm the work is complete, releasing the escrow.
    pub async fn confirm_completion(&self, id: u64) -> Result<ServiceRequest> {
        self.post::<(), _>(&format!("/service-requests/{}/confirm-completion/", id), None)
            .await
    }

    /// Cancel a service request.
    pub async fn cancel_service_request(&self, id: u64) -> Result<()> {
        self.post_unit::<()>(&format!("/service-requests/{}/cancel/", id), None)
            .await
    }
}
