//! # Feedback Client
//!
//! Guest reviews on top of the Feedback actor. Any authenticated guest may
//! submit; the public list is open; removal is admin only.

use crate::feedback_actor::FeedbackError;
use crate::model::{Caller, Feedback, FeedbackCreate, FeedbackId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Feedback actor.
#[derive(Clone)]
pub struct FeedbackClient {
    inner: ResourceClient<Feedback>,
}

impl FeedbackClient {
    pub fn new(inner: ResourceClient<Feedback>) -> Self {
        Self { inner }
    }

    /// Submits a review under the caller's account. The rating is validated
    /// by the actor; anything outside 1 to 5 fails with
    /// [`FeedbackError::InvalidRating`].
    #[instrument(skip(self, message))]
    pub async fn submit(
        &self,
        caller: &Caller,
        guest_name: String,
        rating: u8,
        message: String,
    ) -> Result<FeedbackId, FeedbackError> {
        debug!("Submitting feedback");
        let params = FeedbackCreate {
            owner: caller.email.clone(),
            guest_name,
            rating,
            message,
        };
        self.inner
            .create(params)
            .await
            .map_err(FeedbackError::from_framework)
    }

    /// Removes a review. Admin only.
    #[instrument(skip(self))]
    pub async fn remove(&self, caller: &Caller, id: FeedbackId) -> Result<(), FeedbackError> {
        if !caller.is_admin() {
            return Err(FeedbackError::NotAuthorized(caller.email.to_string()));
        }
        debug!("Removing feedback");
        self.inner
            .delete(id)
            .await
            .map_err(FeedbackError::from_framework)
    }
}

#[async_trait]
impl ActorClient<Feedback> for FeedbackClient {
    type Error = FeedbackError;

    fn inner(&self) -> &ResourceClient<Feedback> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        FeedbackError::from_framework(e)
    }
}
