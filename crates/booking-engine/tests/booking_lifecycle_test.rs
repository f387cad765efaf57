//! End-to-end tests for the reservation lifecycle: submission, pricing,
//! approval and decline, and the notifications that follow.

use booking_engine::adapters::{DirectVerifier, RecordingNotifier};
use booking_engine::booking_actor::BookingError;
use booking_engine::clients::{BookingRequest, RegistrationRequest};
use booking_engine::lifecycle::ResortSystem;
use booking_engine::model::{
    BlobRef, BookingId, BookingStatus, Caller, Credential, EmailAddress, PaymentDetails, Role,
    RoomCategory, RoomCreate, RoomId, StayType,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

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

fn room(category: RoomCategory, base_price: u64) -> RoomCreate {
    RoomCreate {
        name: "Test Unit".to_string(),
        base_price,
        category,
        description: "A unit for testing".to_string(),
        amenities: BTreeSet::new(),
        image: None,
    }
}

fn request(room_id: RoomId, stay_type: StayType) -> BookingRequest {
    BookingRequest {
        room_id,
        stay_type,
        check_in: at(10, 14),
        check_out: at(11, 12),
        guest_name: "Juan dela Cruz".to_string(),
        contact: Some("09170000000".to_string()),
        payment: PaymentDetails {
            sender_name: "Juan dela Cruz".to_string(),
            sender_number: "09170000000".to_string(),
        },
        payment_proof: BlobRef::new("mem://1/receipt.jpg"),
        extra_note: None,
    }
}

async fn registered_guest(system: &ResortSystem, email: &str) -> Caller {
    system
        .accounts
        .register(RegistrationRequest {
            email: email.to_string(),
            display_name: "Juan dela Cruz".to_string(),
            credential: Credential::new("guest-secret"),
            phone: None,
        })
        .await
        .expect("Failed to register guest");

    system
        .accounts
        .authenticate(email, &Credential::new("guest-secret"))
        .await
        .expect("Failed to authenticate guest")
}

/// Polls the recording notifier until `n` deliveries arrive; the booking
/// actor sends them from a detached task.
async fn wait_for_notifications(
    notifier: &RecordingNotifier,
    n: usize,
) -> Vec<(EmailAddress, BookingId, BookingStatus)> {
    for _ in 0..100 {
        let sent = notifier.sent();
        if sent.len() >= n {
            return sent;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    notifier.sent()
}

#[tokio::test]
async fn full_booking_lifecycle_with_approval() {
    let notifier = Arc::new(RecordingNotifier::new());
    let system = ResortSystem::new(notifier.clone(), Arc::new(DirectVerifier));

    let guest = registered_guest(&system, "juan@example.com").await;
    let room_id = system
        .rooms
        .add_room(&admin(), room(RoomCategory::StandardOvernight, 3_500))
        .await
        .unwrap();

    // 22 hours is under the one-night minimum, so it bills as one night.
    let booking_id = system
        .bookings
        .create_booking(&guest, request(room_id, StayType::Overnight))
        .await
        .unwrap();

    let booking = system.bookings.get_booking(&guest, booking_id).await.unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.total, 3_500);
    assert_eq!(booking.owner, guest.email);
    assert_eq!(booking.room.name, "Test Unit");

    let mine = system
        .bookings
        .list_by_owner(&guest, &guest.email)
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);

    let status = system.bookings.approve(&admin(), booking_id).await.unwrap();
    assert_eq!(status, BookingStatus::Approved);

    let sent = wait_for_notifications(&notifier, 1).await;
    assert_eq!(sent, vec![(guest.email.clone(), booking_id, BookingStatus::Approved)]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn declined_booking_is_terminal() {
    let notifier = Arc::new(RecordingNotifier::new());
    let system = ResortSystem::new(notifier.clone(), Arc::new(DirectVerifier));

    let guest = registered_guest(&system, "maria@example.com").await;
    let room_id = system
        .rooms
        .add_room(&admin(), room(RoomCategory::VillaOvernight, 4_000))
        .await
        .unwrap();

    let booking_id = system
        .bookings
        .create_booking(&guest, request(room_id, StayType::Overnight))
        .await
        .unwrap();

    let status = system.bookings.decline(&admin(), booking_id).await.unwrap();
    assert_eq!(status, BookingStatus::Declined);

    // No transition out of a terminal state, in either direction.
    let approve = system.bookings.approve(&admin(), booking_id).await;
    assert_eq!(
        approve,
        Err(BookingError::InvalidTransition {
            from: BookingStatus::Declined
        })
    );
    let decline = system.bookings.decline(&admin(), booking_id).await;
    assert_eq!(
        decline,
        Err(BookingError::InvalidTransition {
            from: BookingStatus::Declined
        })
    );

    let sent = wait_for_notifications(&notifier, 1).await;
    assert_eq!(sent.len(), 1, "Only the successful transition notifies");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_settlement_commits_exactly_once() {
    let notifier = Arc::new(RecordingNotifier::new());
    let system = ResortSystem::new(notifier.clone(), Arc::new(DirectVerifier));

    let guest = registered_guest(&system, "juan@example.com").await;
    let room_id = system
        .rooms
        .add_room(&admin(), room(RoomCategory::StandardOvernight, 3_500))
        .await
        .unwrap();
    let booking_id = system
        .bookings
        .create_booking(&guest, request(room_id, StayType::Overnight))
        .await
        .unwrap();

    let approve = {
        let bookings = system.bookings.clone();
        tokio::spawn(async move { bookings.approve(&admin(), booking_id).await })
    };
    let decline = {
        let bookings = system.bookings.clone();
        tokio::spawn(async move { bookings.decline(&admin(), booking_id).await })
    };

    let results = [approve.await.unwrap(), decline.await.unwrap()];
    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1, "Exactly one of two racing settlements commits");

    let losses = results
        .iter()
        .filter(|r| matches!(r, Err(BookingError::InvalidTransition { .. })))
        .count();
    assert_eq!(losses, 1);

    // The booking ends in whichever terminal state won, and only one
    // notification went out.
    let booking = system.bookings.get_booking(&guest, booking_id).await.unwrap();
    assert!(booking.status.is_terminal());
    let sent = wait_for_notifications(&notifier, 1).await;
    assert_eq!(sent.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn cottage_daytour_bills_flat_rate() {
    let system = ResortSystem::with_defaults();

    let guest = registered_guest(&system, "juan@example.com").await;
    let room_id = system
        .rooms
        .add_room(&admin(), room(RoomCategory::DaytourCottage, 1_200))
        .await
        .unwrap();

    let mut req = request(room_id, StayType::Daytour);
    req.check_in = at(10, 8);
    req.check_out = at(10, 17);
    let booking_id = system.bookings.create_booking(&guest, req).await.unwrap();

    let booking = system.bookings.get_booking(&guest, booking_id).await.unwrap();
    assert_eq!(booking.total, 1_200);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn overnight_partial_nights_round_up() {
    let system = ResortSystem::with_defaults();

    let guest = registered_guest(&system, "juan@example.com").await;
    let room_id = system
        .rooms
        .add_room(&admin(), room(RoomCategory::VillaOvernight, 4_000))
        .await
        .unwrap();

    // 70 hours rounds up to 3 nights.
    let mut req = request(room_id, StayType::Overnight);
    req.check_in = at(10, 14);
    req.check_out = at(13, 12);
    let booking_id = system.bookings.create_booking(&guest, req).await.unwrap();

    let booking = system.bookings.get_booking(&guest, booking_id).await.unwrap();
    assert_eq!(booking.total, 12_000);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn invalid_submissions_are_rejected() {
    let system = ResortSystem::with_defaults();

    let guest = registered_guest(&system, "juan@example.com").await;
    let room_id = system
        .rooms
        .add_room(&admin(), room(RoomCategory::StandardOvernight, 3_500))
        .await
        .unwrap();

    // Missing payment proof.
    let mut no_proof = request(room_id, StayType::Overnight);
    no_proof.payment_proof = BlobRef::new("   ");
    let result = system.bookings.create_booking(&guest, no_proof).await;
    assert_eq!(result, Err(BookingError::MissingPaymentProof));

    // Daytour request against an overnight room.
    let mismatched = request(room_id, StayType::Daytour);
    let result = system.bookings.create_booking(&guest, mismatched).await;
    assert_eq!(
        result,
        Err(BookingError::StayTypeMismatch {
            expected: StayType::Overnight,
            requested: StayType::Daytour,
        })
    );

    // Check-out before check-in.
    let mut backwards = request(room_id, StayType::Overnight);
    backwards.check_in = at(11, 12);
    backwards.check_out = at(10, 14);
    let result = system.bookings.create_booking(&guest, backwards).await;
    assert_eq!(result, Err(BookingError::InvalidDateRange));

    // Nothing reached the store.
    let all = system.bookings.list_all(&admin()).await.unwrap();
    assert!(all.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn booking_keeps_room_snapshot_after_catalog_changes() {
    let system = ResortSystem::with_defaults();

    let guest = registered_guest(&system, "juan@example.com").await;
    let room_id = system
        .rooms
        .add_room(&admin(), room(RoomCategory::StandardOvernight, 3_500))
        .await
        .unwrap();
    let booking_id = system
        .bookings
        .create_booking(&guest, request(room_id, StayType::Overnight))
        .await
        .unwrap();

    system.rooms.remove_room(&admin(), room_id).await.unwrap();

    // The booking still renders from its snapshot.
    let booking = system.bookings.get_booking(&guest, booking_id).await.unwrap();
    assert_eq!(booking.room.name, "Test Unit");
    assert_eq!(booking.room.price, 3_500);

    // But new bookings against the removed room fail.
    let result = system
        .bookings
        .create_booking(&guest, request(room_id, StayType::Overnight))
        .await;
    assert!(matches!(result, Err(BookingError::RoomUnavailable(_))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn guests_cannot_see_or_settle_others_bookings() {
    let system = ResortSystem::with_defaults();

    let juan = registered_guest(&system, "juan@example.com").await;
    let maria = registered_guest(&system, "maria@example.com").await;
    let room_id = system
        .rooms
        .add_room(&admin(), room(RoomCategory::StandardOvernight, 3_500))
        .await
        .unwrap();
    let booking_id = system
        .bookings
        .create_booking(&juan, request(room_id, StayType::Overnight))
        .await
        .unwrap();

    let peek = system.bookings.get_booking(&maria, booking_id).await;
    assert!(matches!(peek, Err(BookingError::NotAuthorized(_))));

    let list = system.bookings.list_by_owner(&maria, &juan.email).await;
    assert!(matches!(list, Err(BookingError::NotAuthorized(_))));

    let settle = system.bookings.approve(&juan, booking_id).await;
    assert!(matches!(settle, Err(BookingError::NotAuthorized(_))));

    let all = system.bookings.list_all(&juan).await;
    assert!(matches!(all, Err(BookingError::NotAuthorized(_))));

    // An admin sees everything.
    let all = system.bookings.list_all(&admin()).await.unwrap();
    assert_eq!(all.len(), 1);

    system.shutdown().await.unwrap();
}
