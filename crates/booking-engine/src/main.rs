//! Demo walkthrough of the booking engine: seeds an admin and a room,
//! registers a guest, places a booking and settles it.
//!
//! Run with `RUST_LOG=info cargo run -p booking-engine` to watch the flow.

use booking_engine::clients::{BookingRequest, RegistrationRequest};
use booking_engine::lifecycle::{setup_tracing, ResortSystem, SystemError};
use booking_engine::model::{
    BlobRef, Credential, PaymentDetails, RoomCategory, RoomCreate, StayType,
};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    setup_tracing();

    info!("Starting resort booking system");
    let system = ResortSystem::with_defaults();

    system
        .accounts
        .seed_admin(RegistrationRequest {
            email: "admin@resort.example".to_string(),
            display_name: "Front Desk".to_string(),
            credential: Credential::new("change-me"),
            phone: None,
        })
        .await?;
    let admin = system
        .accounts
        .authenticate("admin@resort.example", &Credential::new("change-me"))
        .await?;

    let room_id = system
        .rooms
        .add_room(
            &admin,
            RoomCreate {
                name: "Sea View Standard".to_string(),
                base_price: 3_500,
                category: RoomCategory::StandardOvernight,
                description: "Standard room facing the sea".to_string(),
                amenities: BTreeSet::from(["aircon".to_string(), "wifi".to_string()]),
                image: None,
            },
        )
        .await?;
    info!(%room_id, "Room added to catalog");

    system
        .accounts
        .register(RegistrationRequest {
            email: "juan@example.com".to_string(),
            display_name: "Juan dela Cruz".to_string(),
            credential: Credential::new("guest-secret"),
            phone: Some("09170000000".to_string()),
        })
        .await?;
    let guest = system
        .accounts
        .authenticate("juan@example.com", &Credential::new("guest-secret"))
        .await?;

    let check_in = NaiveDate::from_ymd_opt(2025, 3, 10)
        .expect("valid date")
        .and_hms_opt(14, 0, 0)
        .expect("valid time");
    let check_out = NaiveDate::from_ymd_opt(2025, 3, 12)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time");

    let booking_id = system
        .bookings
        .create_booking(
            &guest,
            BookingRequest {
                room_id,
                stay_type: StayType::Overnight,
                check_in,
                check_out,
                guest_name: "Juan dela Cruz".to_string(),
                contact: Some("09170000000".to_string()),
                payment: PaymentDetails {
                    sender_name: "Juan dela Cruz".to_string(),
                    sender_number: "09170000000".to_string(),
                },
                payment_proof: BlobRef::new("mem://1/receipt.jpg"),
                extra_note: None,
            },
        )
        .await?;

    let booking = system.bookings.get_booking(&guest, booking_id).await?;
    info!(%booking_id, total = booking.total, "Booking submitted");

    let status = system.bookings.approve(&admin, booking_id).await?;
    info!(%booking_id, %status, "Booking settled");

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
