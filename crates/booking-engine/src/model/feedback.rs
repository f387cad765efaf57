//! Guest feedback entries.

use crate::model::EmailAddress;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Feedback entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeedbackId(pub u32);

impl From<u32> for FeedbackId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for FeedbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FB{}", self.0)
    }
}

/// A star rating, valid only in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Returns `None` for anything outside `1..=5`.
    pub fn new(stars: u8) -> Option<Self> {
        (1..=5).contains(&stars).then_some(Self(stars))
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// A published guest review. Immutable once submitted; admins may remove it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub owner: EmailAddress,
    pub guest_name: String,
    pub rating: Rating,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Payload for submitting feedback. The raw rating is validated by the actor.
#[derive(Debug, Clone)]
pub struct FeedbackCreate {
    pub owner: EmailAddress,
    pub guest_name: String,
    pub rating: u8,
    pub message: String,
}
