//! Assignment endpoints for the contractor side.

use serde::Serialize;
use tracing::instrument;

use fundi_core::Result;
use fundi_core::models::Assignment;

use super::ListEnvelope;
use crate::client::ApiClient;

#[derive(Serialize)]
struct AssignmentRef {
    assignment_id: u64,
}

#[derive(Serialize)]
struct CompleteRequest<'a> {
    assignment_id: u64,
    completion_notes: &'a str,
}

impl ApiClient {
    /// List assignments awaiting the contractor's response.
    pub async fn pending_assignments(&self) -> Result<Vec<Assignment>> {
        let env: ListEnvelope<Assignment> = self.get("/assignments/pending/").await?;
        Ok(env.into_items())
    }

    /// Accept an assignment.
    #[instrument(skip(self))]
    pub async fn accept_assignment(&self, assignment_id: u64) -> Result<Assignment> {
        self.post("/assignments/accept/", Some(&AssignmentRef { assignment_id }))
            .await
    }

    /// Decline an assignment.
    #[instrument(skip(self))]
    pub async fn decline_assignment(&self, assignment_id: u64) -> Result<()> {
        self.post_unit("/assignments/decline/", Some(&AssignmentRef { assignment_id }))
            .await
    }

    /// Mark an accepted assignment as started.
    pub async fn start_assignment(&self, assignment_id: u64) -> Result<Assignment> {
        self.post::<(), _>(&format!("/assignments/{}/start/", assignment_id), None)
            .await
    }

    /// Mark an assignment as complete with closing notes.
    pub async fn complete_assignment(
        &self,
        assignment_id: u64,
        completion_notes: &str,
    ) -> Result<Assignment> {
        self.post(
            "/assignments/complete/",
            Some(&CompleteRequest {
                assignment_id,
                completion_notes,
            }),
        )
        .await
    }
}
