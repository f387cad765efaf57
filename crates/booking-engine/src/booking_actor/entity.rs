//! [`ActorEntity`] implementation for [`Booking`].

use crate::booking_actor::{BookingAction, BookingContext, BookingError};
use crate::model::{Booking, BookingCreate, BookingId, BookingStatus};
use crate::pricing;
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Booking {
    type Id = BookingId;
    type Create = BookingCreate;
    // Bookings are immutable after creation; status moves only through actions.
    type Update = ();
    type Action = BookingAction;
    type ActionResult = BookingStatus;
    type Context = BookingContext;
    type Error = BookingError;

    fn id(&self) -> &BookingId {
        &self.id
    }

    /// Validates and prices the request, then freezes the record. Rejection
    /// order: payment proof, stay type, date range.
    fn from_create_params(id: BookingId, params: BookingCreate) -> Result<Self, Self::Error> {
        if params.payment_proof.is_empty() {
            return Err(BookingError::MissingPaymentProof);
        }

        let expected = params.room.category.stay_type();
        if params.stay_type != expected {
            return Err(BookingError::StayTypeMismatch {
                expected,
                requested: params.stay_type,
            });
        }

        let total = pricing::compute_total(
            params.room.category,
            params.room.price,
            params.check_in,
            params.check_out,
        )?;

        Ok(Self {
            id,
            owner: params.owner,
            guest_name: params.guest_name,
            contact: params.contact,
            room: params.room,
            stay_type: params.stay_type,
            check_in: params.check_in,
            check_out: params.check_out,
            total,
            payment: params.payment,
            payment_proof: params.payment_proof,
            extra_note: params.extra_note,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &BookingContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Runs the status state machine. On success the owner is notified on a
    /// detached task; delivery failures are logged and never unwind the
    /// transition.
    async fn handle_action(
        &mut self,
        action: BookingAction,
        ctx: &BookingContext,
    ) -> Result<BookingStatus, Self::Error> {
        let target = match action {
            BookingAction::Approve => BookingStatus::Approved,
            BookingAction::Decline => BookingStatus::Declined,
        };

        if !self.status.can_transition_to(target) {
            return Err(BookingError::InvalidTransition { from: self.status });
        }
        self.status = target;

        let notifier = ctx.notifier.clone();
        let booking = self.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(&booking.owner, &booking, target).await {
                tracing::warn!(booking_id = %booking.id, error = %e, "Status notification failed");
            }
        });

        Ok(target)
    }
}
