//! The runtime orchestrator for the resort booking engine.

use crate::account_actor::{self, AccountError};
use crate::adapters::{
    AdapterError, Collection, CredentialVerifier, DirectVerifier, LoggingNotifier,
    NotificationAdapter, PersistenceAdapter,
};
use crate::booking_actor::{self, BookingContext, BookingError};
use crate::clients::{AccountClient, BookingClient, FeedbackClient, GalleryClient, RoomClient};
use crate::feedback_actor::{self, FeedbackError};
use crate::gallery_actor::{self, GalleryError};
use crate::room_actor::{self, RoomError};
use resource_actor::ActorClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors surfaced by system-level operations (wiring, snapshot, restore,
/// shutdown).
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Room(#[from] RoomError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error(transparent)]
    Gallery(#[from] GalleryError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Actor task failed: {0}")]
    Shutdown(String),
}

/// The main runtime orchestrator.
///
/// Spawns one actor task per collection, wires the cross-actor dependencies
/// (the booking client resolves rooms; the booking actor notifies owners) and
/// exposes the five domain clients. Dropping the system without calling
/// [`shutdown`](Self::shutdown) aborts the actors with the runtime; shutdown
/// drains them cleanly instead.
pub struct ResortSystem {
    pub accounts: AccountClient,
    pub rooms: RoomClient,
    pub bookings: BookingClient,
    pub feedback: FeedbackClient,
    pub gallery: GalleryClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ResortSystem {
    /// Creates and starts the full system with the given adapters.
    pub fn new(
        notifier: Arc<dyn NotificationAdapter>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        let (account_actor, account_client) = account_actor::new();
        let account_handle = tokio::spawn(account_actor.run(()));
        let accounts = AccountClient::new(account_client, verifier);

        let (room_actor, room_client) = room_actor::new();
        let room_handle = tokio::spawn(room_actor.run(()));
        let rooms = RoomClient::new(room_client);

        let (booking_actor, booking_client) = booking_actor::new();
        let booking_handle = tokio::spawn(booking_actor.run(BookingContext { notifier }));
        let bookings = BookingClient::new(booking_client, rooms.clone());

        let (feedback_actor, feedback_client) = feedback_actor::new();
        let feedback_handle = tokio::spawn(feedback_actor.run(()));
        let feedback = FeedbackClient::new(feedback_client);

        let (gallery_actor, gallery_client) = gallery_actor::new();
        let gallery_handle = tokio::spawn(gallery_actor.run(()));
        let gallery = GalleryClient::new(gallery_client);

        info!("Resort system started");

        Self {
            accounts,
            rooms,
            bookings,
            feedback,
            gallery,
            handles: vec![
                account_handle,
                room_handle,
                booking_handle,
                feedback_handle,
                gallery_handle,
            ],
        }
    }

    /// Starts the system with a logging notifier and plain credential
    /// comparison. Handy for demos and tests.
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(LoggingNotifier), Arc::new(DirectVerifier))
    }

    /// Writes every collection to the persistence adapter as JSON.
    pub async fn snapshot(&self, store: &dyn PersistenceAdapter) -> Result<(), SystemError> {
        save(store, Collection::Accounts, self.accounts.list().await?).await?;
        save(store, Collection::Rooms, self.rooms.list().await?).await?;
        save(store, Collection::Bookings, self.bookings.list().await?).await?;
        save(store, Collection::Feedback, self.feedback.list().await?).await?;
        save(store, Collection::GalleryConfig, self.gallery.list().await?).await?;
        info!("Snapshot written");
        Ok(())
    }

    /// Re-admits every persisted record under its original id.
    ///
    /// Intended for a freshly started system. Records whose id was already
    /// issued are rejected by the actors as duplicates, so restoring on top
    /// of live state fails loudly instead of silently merging.
    pub async fn restore(&self, store: &dyn PersistenceAdapter) -> Result<(), SystemError> {
        for account in load(store, Collection::Accounts).await? {
            self.accounts.restore(account).await?;
        }
        for room in load(store, Collection::Rooms).await? {
            self.rooms.restore(room).await?;
        }
        for booking in load(store, Collection::Bookings).await? {
            self.bookings.restore(booking).await?;
        }
        for entry in load(store, Collection::Feedback).await? {
            self.feedback.restore(entry).await?;
        }
        for image in load(store, Collection::GalleryConfig).await? {
            self.gallery.restore(image).await?;
        }
        info!("State restored");
        Ok(())
    }

    /// Gracefully shuts down: drops the clients so each actor drains its
    /// queue and exits, then waits for every task.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down resort system");

        drop(self.accounts);
        drop(self.rooms);
        drop(self.bookings);
        drop(self.feedback);
        drop(self.gallery);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {e:?}");
                return Err(SystemError::Shutdown(format!("{e:?}")));
            }
        }

        info!("Resort system shutdown complete");
        Ok(())
    }
}

async fn save<T: Serialize>(
    store: &dyn PersistenceAdapter,
    collection: Collection,
    records: Vec<T>,
) -> Result<(), SystemError> {
    let values = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    store.save(collection, values).await?;
    Ok(())
}

async fn load<T: DeserializeOwned>(
    store: &dyn PersistenceAdapter,
    collection: Collection,
) -> Result<Vec<T>, SystemError> {
    store
        .load(collection)
        .await?
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(SystemError::from))
        .collect()
}
