//! [`ActorEntity`] implementation for [`Feedback`].

use crate::feedback_actor::FeedbackError;
use crate::model::{Feedback, FeedbackCreate, FeedbackId, Rating};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

/// Feedback has no custom actions.
#[derive(Debug)]
pub enum FeedbackAction {}

#[async_trait]
impl ActorEntity for Feedback {
    type Id = FeedbackId;
    type Create = FeedbackCreate;
    // Reviews are immutable once submitted.
    type Update = ();
    type Action = FeedbackAction;
    type ActionResult = ();
    type Context = ();
    type Error = FeedbackError;

    fn id(&self) -> &FeedbackId {
        &self.id
    }

    fn from_create_params(id: FeedbackId, params: FeedbackCreate) -> Result<Self, Self::Error> {
        let rating =
            Rating::new(params.rating).ok_or(FeedbackError::InvalidRating(params.rating))?;

        Ok(Self {
            id,
            owner: params.owner,
            guest_name: params.guest_name,
            rating,
            message: params.message,
            submitted_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: FeedbackAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
