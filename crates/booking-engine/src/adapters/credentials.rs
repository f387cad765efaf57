//! Credential comparison.

use crate::model::Credential;

/// Decides whether a presented credential matches the stored one.
///
/// The engine treats credentials as opaque, so hashing schemes live entirely
/// in the implementation; authentication only ever goes through `verify`.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, presented: &Credential, stored: &Credential) -> bool;
}

/// Plain equality on the opaque values. Suitable when the embedder stores
/// already-derived values (or for tests); never feed it raw passwords in
/// production.
#[derive(Debug, Default)]
pub struct DirectVerifier;

impl CredentialVerifier for DirectVerifier {
    fn verify(&self, presented: &Credential, stored: &Credential) -> bool {
        presented == stored
    }
}
