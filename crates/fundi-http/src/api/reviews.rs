//! Review endpoints.

use fundi_core::Result;
use fundi_core::models::{NewReview, Review};

use super::ListEnvelope;
use crate::client::ApiClient;

impl ApiClient {
    /// Submit a review for completed work.
    pub async fn create_review(&self, new: &NewReview) -> Result<Review> {
        self.post("/reviews/", Some(new)).await
    }

    /// List the caller's reviews.
    pub async fn reviews(&self) -> Result<Vec<Review>> {
        let env: ListEnvelope<Review> = self.get("/reviews/").await?;
        Ok(env.into_items())
    }

    /// List reviews left for a contractor.
    pub async fn contractor_reviews(&self, contractor_id: u64) -> Result<Vec<Review>> {
        let env: ListEnvelope<Review> = self
            .get(&format!("/reviews/contractor/{}/", contractor_id))
            .await?;
        Ok(env.into_items())
    }
}
