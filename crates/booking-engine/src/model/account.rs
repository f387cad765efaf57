//! Accounts, identity and authorization primitives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub u32);

impl From<u32> for AccountId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A case-insensitive e-mail identifier.
///
/// Normalised (trimmed, lowercased) on construction, so equality and hashing
/// already implement the "differs only in letter case is the same address"
/// rule. The raw casing the guest typed is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque secret held against an account.
///
/// The engine never interprets the value: it is issued by the embedder's
/// credential scheme and compared only through a
/// [`CredentialVerifier`](crate::adapters::CredentialVerifier). `Debug` and
/// `Display` redact it so it cannot leak into logs or error messages.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exposes the opaque value to a verifier implementation.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(<redacted>)")
    }
}

impl Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<redacted>")
    }
}

/// The two account roles. Admins are provisioned out-of-band and gate every
/// destructive or cross-owner operation; guests only act on their own records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Admin,
}

/// The authenticated identity a client method authorises against.
///
/// Produced by [`AccountClient::authenticate`](crate::clients::AccountClient::authenticate);
/// the presentation layer holds it for the session and passes it to every
/// gated operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub email: EmailAddress,
    pub role: Role,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// True when this caller may act on records owned by `owner`: the owner
    /// themselves, or any admin.
    pub fn may_act_for(&self, owner: &EmailAddress) -> bool {
        self.is_admin() || self.email == *owner
    }
}

/// A registered account (guest or admin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub email: EmailAddress,
    pub display_name: String,
    pub credential: Credential,
    pub role: Role,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn caller(&self) -> Caller {
        Caller {
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Payload for creating a new account. `register` always submits `Role::Guest`;
/// admin seeding is the only path that sets `Role::Admin`.
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub email: String,
    pub display_name: String,
    pub credential: Credential,
    pub phone: Option<String>,
    pub role: Role,
}

/// Payload for updating an account's profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub display_name: Option<String>,
    pub phone: Option<String>,
}
