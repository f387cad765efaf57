//! # Booking Client
//!
//! The guest- and admin-facing surface of the reservation lifecycle. Wraps
//! the Booking actor and handles what the actor cannot see: resolving the
//! room snapshot from the live catalog, authorization, and the owner-scoped
//! and admin-scoped views.

use crate::booking_actor::{BookingAction, BookingError};
use crate::clients::RoomClient;
use crate::model::{
    BlobRef, Booking, BookingCreate, BookingId, BookingStatus, Caller, EmailAddress,
    PaymentDetails, RoomId, StayType,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// A guest's booking submission, before the room snapshot is resolved.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub room_id: RoomId,
    pub stay_type: StayType,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    /// Name the stay is registered under; may differ from the account's
    /// display name when booking for someone else.
    pub guest_name: String,
    pub contact: Option<String>,
    pub payment: PaymentDetails,
    pub payment_proof: BlobRef,
    pub extra_note: Option<String>,
}

/// Client for interacting with the Booking actor.
#[derive(Clone)]
pub struct BookingClient {
    inner: ResourceClient<Booking>,
    rooms: RoomClient,
}

impl BookingClient {
    pub fn new(inner: ResourceClient<Booking>, rooms: RoomClient) -> Self {
        Self { inner, rooms }
    }

    /// Submits a booking for the authenticated caller.
    ///
    /// Resolves the room from the live catalog and freezes its snapshot into
    /// the record; an unknown or deleted room fails with
    /// [`BookingError::RoomUnavailable`] before anything reaches the booking
    /// actor. Validation and pricing happen inside the actor on admission.
    #[instrument(skip(self, request), fields(room_id = %request.room_id))]
    pub async fn create_booking(
        &self,
        caller: &Caller,
        request: BookingRequest,
    ) -> Result<BookingId, BookingError> {
        debug!("Resolving room for booking");
        let room = self
            .rooms
            .get(request.room_id)
            .await
            .map_err(|e| BookingError::ActorCommunication(e.to_string()))?
            .ok_or_else(|| BookingError::RoomUnavailable(request.room_id.to_string()))?;

        let params = BookingCreate {
            owner: caller.email.clone(),
            guest_name: request.guest_name,
            contact: request.contact,
            room: room.snapshot(),
            stay_type: request.stay_type,
            check_in: request.check_in,
            check_out: request.check_out,
            payment: request.payment,
            payment_proof: request.payment_proof,
            extra_note: request.extra_note,
        };

        self.inner
            .create(params)
            .await
            .map_err(BookingError::from_framework)
    }

    /// Fetches one booking, visible to its owner and to admins.
    #[instrument(skip(self))]
    pub async fn get_booking(
        &self,
        caller: &Caller,
        id: BookingId,
    ) -> Result<Booking, BookingError> {
        let booking = self
            .get(id)
            .await?
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

        if !caller.may_act_for(&booking.owner) {
            return Err(BookingError::NotAuthorized(caller.email.to_string()));
        }
        Ok(booking)
    }

    /// Every booking in the system, in submission order. Admin only.
    #[instrument(skip(self))]
    pub async fn list_all(&self, caller: &Caller) -> Result<Vec<Booking>, BookingError> {
        ensure_admin(caller)?;
        self.list().await
    }

    /// The bookings owned by `owner`, newest first. Owners see their own;
    /// admins see anyone's.
    #[instrument(skip(self))]
    pub async fn list_by_owner(
        &self,
        caller: &Caller,
        owner: &EmailAddress,
    ) -> Result<Vec<Booking>, BookingError> {
        if !caller.may_act_for(owner) {
            return Err(BookingError::NotAuthorized(caller.email.to_string()));
        }
        let mut bookings = self.list().await?;
        bookings.retain(|b| b.owner == *owner);
        sort_newest_first(&mut bookings);
        Ok(bookings)
    }

    /// Approves a pending booking. Admin only; the owner is notified.
    #[instrument(skip(self))]
    pub async fn approve(
        &self,
        caller: &Caller,
        id: BookingId,
    ) -> Result<BookingStatus, BookingError> {
        ensure_admin(caller)?;
        debug!("Approving booking");
        self.inner
            .perform_action(id, BookingAction::Approve)
            .await
            .map_err(BookingError::from_framework)
    }

    /// Declines a pending booking. Admin only; the owner is notified.
    #[instrument(skip(self))]
    pub async fn decline(
        &self,
        caller: &Caller,
        id: BookingId,
    ) -> Result<BookingStatus, BookingError> {
        ensure_admin(caller)?;
        debug!("Declining booking");
        self.inner
            .perform_action(id, BookingAction::Decline)
            .await
            .map_err(BookingError::from_framework)
    }

    /// Removes a booking record. Admin only. The id is retired for good; a
    /// later restore of the same record is rejected as a duplicate.
    #[instrument(skip(self))]
    pub async fn remove(&self, caller: &Caller, id: BookingId) -> Result<(), BookingError> {
        ensure_admin(caller)?;
        debug!("Removing booking");
        self.inner
            .delete(id)
            .await
            .map_err(BookingError::from_framework)
    }
}

fn ensure_admin(caller: &Caller) -> Result<(), BookingError> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(BookingError::NotAuthorized(caller.email.to_string()))
    }
}

fn sort_newest_first(bookings: &mut [Booking]) {
    // Ties on the timestamp fall back to the id, which is strictly increasing
    // in submission order.
    bookings.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
}

#[async_trait]
impl ActorClient<Booking> for BookingClient {
    type Error = BookingError;

    fn inner(&self) -> &ResourceClient<Booking> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        BookingError::from_framework(e)
    }
}
