//! Service category endpoints. Public: no credential required.

use fundi_core::Result;
use fundi_core::models::ServiceCategory;

use super::ListEnvelope;
use crate::client::ApiClient;

impl ApiClient {
    /// List all service categories.
    pub async fn categories(&self) -> Result<Vec<ServiceCategory>> {
        let env: ListEnvelope<ServiceCategory> = self.get("/categories/").await?;
        Ok(env.into_items())
    }

    /// Fetch one category by id.
    pub async fn category(&self, id: u64) -> Result<ServiceCategory> {
        self.get(&format!("/categories/{}/", id)).await
    }
}
