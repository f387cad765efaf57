//! Rooms, cottages and the snapshot a booking keeps of them.

use crate::model::BlobRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Type-safe identifier for Rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl From<u32> for RoomId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RM{}", self.0)
    }
}

/// How a unit is let out, which drives its billing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomCategory {
    /// A standard room billed per night.
    StandardOvernight,
    /// A villa billed per night.
    VillaOvernight,
    /// A cottage let for day tours at a flat rate.
    DaytourCottage,
}

impl RoomCategory {
    /// The stay type a booking for this category must carry.
    pub fn stay_type(self) -> StayType {
        match self {
            RoomCategory::StandardOvernight | RoomCategory::VillaOvernight => StayType::Overnight,
            RoomCategory::DaytourCottage => StayType::Daytour,
        }
    }
}

/// Whether a booking is billed as an overnight stay or a flat daytour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StayType {
    Overnight,
    Daytour,
}

/// A bookable unit in the live catalog. Admin-managed; read-only to guests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Base price in whole currency units (per night, or flat for daytour).
    pub base_price: u64,
    pub category: RoomCategory,
    pub description: String,
    pub amenities: BTreeSet<String>,
    pub image: Option<BlobRef>,
}

impl Room {
    /// Captures the denormalised copy a booking keeps. Deleting or editing the
    /// room later never reaches back into existing bookings.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            name: self.name.clone(),
            price: self.base_price,
            category: self.category,
        }
    }
}

/// The room data frozen into a booking at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub name: String,
    pub price: u64,
    pub category: RoomCategory,
}

/// Payload for adding a room to the catalog.
#[derive(Debug, Clone)]
pub struct RoomCreate {
    pub name: String,
    pub base_price: u64,
    pub category: RoomCategory,
    pub description: String,
    pub amenities: BTreeSet<String>,
    pub image: Option<BlobRef>,
}

/// Payload for editing a room. The category is fixed at creation: changing it
/// would silently switch the billing rule under guests comparing prices.
#[derive(Debug, Clone, Default)]
pub struct RoomUpdate {
    pub name: Option<String>,
    pub base_price: Option<u64>,
    pub description: Option<String>,
    pub amenities: Option<BTreeSet<String>>,
    pub image: Option<BlobRef>,
}
