//! Booking status notifications.

use crate::adapters::AdapterError;
use crate::model::{Booking, BookingId, BookingStatus, EmailAddress};
use async_trait::async_trait;
use std::sync::Mutex;

/// Delivers booking status changes to the owner (mail, SMS, webhook...).
///
/// Called from a detached task after a transition commits. Implementations
/// must tolerate being the last to hear about a booking: a failed delivery is
/// logged by the caller and never retried by the engine.
#[async_trait]
pub trait NotificationAdapter: Send + Sync {
    async fn notify(
        &self,
        owner: &EmailAddress,
        booking: &Booking,
        status: BookingStatus,
    ) -> Result<(), AdapterError>;
}

/// Notifier that only writes a structured log line. The default for embedders
/// that have no delivery channel wired up yet.
#[derive(Debug, Default)]
pub struct LoggingNotifier;

#[async_trait]
impl NotificationAdapter for LoggingNotifier {
    async fn notify(
        &self,
        owner: &EmailAddress,
        booking: &Booking,
        status: BookingStatus,
    ) -> Result<(), AdapterError> {
        tracing::info!(
            owner = %owner,
            booking_id = %booking.id,
            %status,
            "Booking status notification"
        );
        Ok(())
    }
}

/// Test notifier that records every delivery.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(EmailAddress, BookingId, BookingStatus)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliveries seen so far, in order.
    pub fn sent(&self) -> Vec<(EmailAddress, BookingId, BookingStatus)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationAdapter for RecordingNotifier {
    async fn notify(
        &self,
        owner: &EmailAddress,
        booking: &Booking,
        status: BookingStatus,
    ) -> Result<(), AdapterError> {
        self.sent
            .lock()
            .unwrap()
            .push((owner.clone(), booking.id, status));
        Ok(())
    }
}
