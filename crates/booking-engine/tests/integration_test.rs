//! Whole-system integration tests: accounts, catalog, feedback, gallery and
//! the snapshot/restore cycle.

use booking_engine::account_actor::AccountError;
use booking_engine::adapters::{
    BlobUploadAdapter, MemoryBlobStore, MemoryPersistence, RecordingNotifier,
};
use booking_engine::booking_actor::BookingError;
use booking_engine::clients::{BookingRequest, RegistrationRequest};
use booking_engine::feedback_actor::FeedbackError;
use booking_engine::gallery_actor::GalleryError;
use booking_engine::lifecycle::ResortSystem;
use booking_engine::model::{
    AccountUpdate, BlobRef, BookingStatus, Caller, Credential, EmailAddress, GalleryImageCreate,
    PaymentDetails, Role, RoomCategory, RoomCreate, RoomId, StayType,
};
use chrono::{NaiveDate, NaiveDateTime};
use resource_actor::ActorClient;
use std::collections::BTreeSet;
use std::sync::Arc;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn admin() -> Caller {
    Caller {
        email: EmailAddress::new("admin@resort.example"),
        role: Role::Admin,
    }
}

fn registration(email: &str) -> RegistrationRequest {
    RegistrationRequest {
        email: email.to_string(),
        display_name: "Juan dela Cruz".to_string(),
        credential: Credential::new("guest-secret"),
        phone: Some("09170000000".to_string()),
    }
}

fn standard_room() -> RoomCreate {
    RoomCreate {
        name: "Sea View Standard".to_string(),
        base_price: 3_500,
        category: RoomCategory::StandardOvernight,
        description: "Standard room facing the sea".to_string(),
        amenities: BTreeSet::from(["aircon".to_string(), "wifi".to_string()]),
        image: None,
    }
}

fn booking_request(room_id: RoomId) -> BookingRequest {
    BookingRequest {
        room_id,
        stay_type: StayType::Overnight,
        check_in: at(10, 14),
        check_out: at(11, 12),
        guest_name: "Juan dela Cruz".to_string(),
        contact: None,
        payment: PaymentDetails {
            sender_name: "Juan dela Cruz".to_string(),
            sender_number: "09170000000".to_string(),
        },
        payment_proof: BlobRef::new("mem://1/receipt.jpg"),
        extra_note: Some("Late arrival".to_string()),
    }
}

#[tokio::test]
async fn registration_is_unique_per_email_case_insensitively() {
    let system = ResortSystem::with_defaults();

    system
        .accounts
        .register(registration("juan@example.com"))
        .await
        .unwrap();

    let duplicate = system
        .accounts
        .register(registration("  JUAN@Example.COM "))
        .await;
    assert_eq!(
        duplicate,
        Err(AccountError::EmailAlreadyRegistered(
            "juan@example.com".to_string()
        ))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_registrations_admit_exactly_one() {
    let system = ResortSystem::with_defaults();

    let mut handles = vec![];
    for _ in 0..8 {
        let accounts = system.accounts.clone();
        handles.push(tokio::spawn(async move {
            accounts.register(registration("maria@example.com")).await
        }));
    }

    let mut admitted = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => admitted += 1,
            Err(AccountError::EmailAlreadyRegistered(_)) => rejected += 1,
            Err(e) => panic!("Unexpected error: {e}"),
        }
    }
    assert_eq!(admitted, 1);
    assert_eq!(rejected, 7);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn authentication_does_not_leak_which_part_failed() {
    let system = ResortSystem::with_defaults();

    system
        .accounts
        .register(registration("juan@example.com"))
        .await
        .unwrap();

    let wrong_credential = system
        .accounts
        .authenticate("juan@example.com", &Credential::new("not-the-secret"))
        .await;
    let unknown_email = system
        .accounts
        .authenticate("nobody@example.com", &Credential::new("guest-secret"))
        .await;

    assert_eq!(wrong_credential, Err(AccountError::InvalidCredentials));
    assert_eq!(unknown_email, Err(AccountError::InvalidCredentials));

    // Case-insensitive match on the address, exact match on the credential.
    let caller = system
        .accounts
        .authenticate("JUAN@example.com", &Credential::new("guest-secret"))
        .await
        .unwrap();
    assert_eq!(caller.role, Role::Guest);
    assert_eq!(caller.email, EmailAddress::new("juan@example.com"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn profile_updates_apply_to_own_account_only() {
    let system = ResortSystem::with_defaults();

    system
        .accounts
        .register(registration("juan@example.com"))
        .await
        .unwrap();
    let caller = system
        .accounts
        .authenticate("juan@example.com", &Credential::new("guest-secret"))
        .await
        .unwrap();

    let updated = system
        .accounts
        .update_profile(
            &caller,
            AccountUpdate {
                display_name: Some("Juan D.".to_string()),
                phone: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.display_name, "Juan D.");
    assert_eq!(updated.phone, Some("09170000000".to_string()));

    let profile = system.accounts.profile(&caller).await.unwrap();
    assert_eq!(profile.display_name, "Juan D.");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn feedback_ratings_are_validated_and_removal_is_gated() {
    let system = ResortSystem::with_defaults();

    system
        .accounts
        .register(registration("juan@example.com"))
        .await
        .unwrap();
    let guest = system
        .accounts
        .authenticate("juan@example.com", &Credential::new("guest-secret"))
        .await
        .unwrap();

    for invalid in [0u8, 6] {
        let result = system
            .feedback
            .submit(&guest, "Juan".to_string(), invalid, "!".to_string())
            .await;
        assert_eq!(result, Err(FeedbackError::InvalidRating(invalid)));
    }

    let id = system
        .feedback
        .submit(&guest, "Juan".to_string(), 5, "Wonderful stay".to_string())
        .await
        .unwrap();

    let published = system.feedback.list().await.unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].rating.stars(), 5);
    assert_eq!(published[0].owner, guest.email);

    let denied = system.feedback.remove(&guest, id).await;
    assert!(matches!(denied, Err(FeedbackError::NotAuthorized(_))));

    system.feedback.remove(&admin(), id).await.unwrap();
    assert!(system.feedback.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn gallery_curation_is_admin_only() {
    let system = ResortSystem::with_defaults();
    let blobs = MemoryBlobStore::new();

    system
        .accounts
        .register(registration("juan@example.com"))
        .await
        .unwrap();
    let guest = system
        .accounts
        .authenticate("juan@example.com", &Credential::new("guest-secret"))
        .await
        .unwrap();

    let image = blobs.upload(b"jpeg bytes", "beachfront.jpg").await.unwrap();
    let params = GalleryImageCreate {
        image: image.clone(),
        caption: "Beachfront at sunset".to_string(),
    };

    let denied = system.gallery.add_image(&guest, params.clone()).await;
    assert!(matches!(denied, Err(GalleryError::NotAuthorized(_))));

    let id = system.gallery.add_image(&admin(), params).await.unwrap();
    let listed = system.gallery.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].image, image);
    assert_eq!(blobs.fetch(&image).unwrap(), b"jpeg bytes");

    let denied = system.gallery.remove_image(&guest, id).await;
    assert!(matches!(denied, Err(GalleryError::NotAuthorized(_))));
    system.gallery.remove_image(&admin(), id).await.unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn snapshot_and_restore_round_trip() {
    let store = MemoryPersistence::new();
    let notifier = Arc::new(RecordingNotifier::new());

    // First life: build up state, snapshot, shut down.
    let (booking_id, guest_email) = {
        let system = ResortSystem::with_defaults();

        system
            .accounts
            .register(registration("juan@example.com"))
            .await
            .unwrap();
        let guest = system
            .accounts
            .authenticate("juan@example.com", &Credential::new("guest-secret"))
            .await
            .unwrap();
        let room_id = system.rooms.add_room(&admin(), standard_room()).await.unwrap();
        let booking_id = system
            .bookings
            .create_booking(&guest, booking_request(room_id))
            .await
            .unwrap();
        system
            .feedback
            .submit(&guest, "Juan".to_string(), 4, "Great pool".to_string())
            .await
            .unwrap();

        system.snapshot(&store).await.unwrap();
        system.shutdown().await.unwrap();
        (booking_id, guest.email)
    };

    // Second life: restore and carry on.
    let system = ResortSystem::new(
        notifier.clone(),
        Arc::new(booking_engine::adapters::DirectVerifier),
    );
    system.restore(&store).await.unwrap();

    // Credentials survive the round trip.
    let guest = system
        .accounts
        .authenticate("juan@example.com", &Credential::new("guest-secret"))
        .await
        .unwrap();
    assert_eq!(guest.email, guest_email);

    let booking = system.bookings.get_booking(&guest, booking_id).await.unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.total, 3_500);
    assert_eq!(booking.extra_note, Some("Late arrival".to_string()));
    assert_eq!(system.feedback.list().await.unwrap().len(), 1);

    // The restored booking continues its lifecycle.
    let status = system.bookings.approve(&admin(), booking_id).await.unwrap();
    assert_eq!(status, BookingStatus::Approved);

    // Restoring again on top of live state collides on every id.
    let again = system.restore(&store).await;
    assert!(again.is_err());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn removed_booking_ids_are_never_reissued() {
    let system = ResortSystem::with_defaults();

    system
        .accounts
        .register(registration("juan@example.com"))
        .await
        .unwrap();
    let guest = system
        .accounts
        .authenticate("juan@example.com", &Credential::new("guest-secret"))
        .await
        .unwrap();
    let room_id = system.rooms.add_room(&admin(), standard_room()).await.unwrap();

    let first = system
        .bookings
        .create_booking(&guest, booking_request(room_id))
        .await
        .unwrap();
    system.bookings.remove(&admin(), first).await.unwrap();

    let second = system
        .bookings
        .create_booking(&guest, booking_request(room_id))
        .await
        .unwrap();
    assert_ne!(first, second, "A retired id must never come back");

    // The removed record is gone, not just hidden.
    let gone = system.bookings.get_booking(&guest, first).await;
    assert!(matches!(gone, Err(BookingError::NotFound(_))));

    system.shutdown().await.unwrap();
}
