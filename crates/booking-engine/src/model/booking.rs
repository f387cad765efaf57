//! The booking record and its status state machine.

use crate::model::{BlobRef, EmailAddress, RoomSnapshot, StayType};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Bookings. Rendered in the reference format guests
/// see on their status dashboard (`BKR0001`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookingId(pub u32);

impl From<u32> for BookingId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BKR{:04}", self.0)
    }
}

/// Approval status of a booking.
///
/// `Pending` is the only initial and only non-terminal state. The two legal
/// transitions, both admin-triggered, are `Pending -> Approved` and
/// `Pending -> Declined`; there is no cancellation and no re-opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Declined,
}

impl BookingStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Approved | BookingStatus::Declined)
    }

    /// Whether the lifecycle permits moving from `self` to `next`.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        self == BookingStatus::Pending && next.is_terminal()
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Declined => "declined",
        };
        write!(f, "{label}")
    }
}

/// Payment-sender details from the out-of-band wallet transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub sender_name: String,
    pub sender_number: String,
}

/// A guest's priced, stateful reservation.
///
/// Everything except `status` is immutable after creation: the room data is a
/// snapshot decoupled from the live catalog, and `total` is derived exactly
/// once by pricing at submission time - a booking's price is locked when it is
/// placed, whatever happens to the room afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub owner: EmailAddress,
    pub guest_name: String,
    pub contact: Option<String>,
    pub room: RoomSnapshot,
    pub stay_type: StayType,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    /// Locked-in total in whole currency units.
    pub total: u64,
    pub payment: PaymentDetails,
    pub payment_proof: BlobRef,
    pub extra_note: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a booking. The room snapshot is captured by the
/// booking client from the live catalog before this reaches the actor.
#[derive(Debug, Clone)]
pub struct BookingCreate {
    pub owner: EmailAddress,
    pub guest_name: String,
    pub contact: Option<String>,
    pub room: RoomSnapshot,
    pub stay_type: StayType,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub payment: PaymentDetails,
    pub payment_proof: BlobRef,
    pub extra_note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::BookingStatus::{Approved, Declined, Pending};

    #[test]
    fn only_pending_can_move() {
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Declined));

        for terminal in [Approved, Declined] {
            assert!(!terminal.can_transition_to(Approved));
            assert!(!terminal.can_transition_to(Declined));
            assert!(!terminal.can_transition_to(Pending));
        }
    }

    #[test]
    fn pending_cannot_reenter_pending() {
        assert!(!Pending.can_transition_to(Pending));
    }
}
