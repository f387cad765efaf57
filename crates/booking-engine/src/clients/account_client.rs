//! # Account Client
//!
//! Registration, authentication and profile management on top of the Account
//! actor.

use crate::account_actor::AccountError;
use crate::adapters::CredentialVerifier;
use crate::model::{
    Account, AccountCreate, AccountId, AccountUpdate, Caller, Credential, EmailAddress, Role,
};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Payload for registering an account. Roles are assigned by the engine, so
/// the request carries none: [`AccountClient::register`] always produces a
/// guest, and admins only come from [`AccountClient::seed_admin`].
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub email: String,
    pub display_name: String,
    pub credential: Credential,
    pub phone: Option<String>,
}

/// Client for interacting with the Account actor.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { inner, verifier }
    }

    /// Registers a guest account. Fails with
    /// [`AccountError::EmailAlreadyRegistered`] if the address (compared
    /// case-insensitively) is taken.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegistrationRequest) -> Result<AccountId, AccountError> {
        debug!("Registering account");
        self.create(request, Role::Guest).await
    }

    /// Provisions an admin account. This is a bootstrap path for the embedder,
    /// not a runtime operation: there is deliberately no way to reach
    /// `Role::Admin` through `register`.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn seed_admin(&self, request: RegistrationRequest) -> Result<AccountId, AccountError> {
        debug!("Seeding admin account");
        self.create(request, Role::Admin).await
    }

    async fn create(
        &self,
        request: RegistrationRequest,
        role: Role,
    ) -> Result<AccountId, AccountError> {
        let params = AccountCreate {
            email: request.email,
            display_name: request.display_name,
            credential: request.credential,
            phone: request.phone,
            role,
        };
        self.inner
            .create(params)
            .await
            .map_err(AccountError::from_framework)
    }

    /// Verifies a credential against the stored account and returns the
    /// [`Caller`] every gated operation takes. Unknown address and wrong
    /// credential collapse into the same [`AccountError::InvalidCredentials`].
    #[instrument(skip(self, credential))]
    pub async fn authenticate(
        &self,
        email: &str,
        credential: &Credential,
    ) -> Result<Caller, AccountError> {
        debug!("Authenticating");
        let account = self
            .find_by_email(&EmailAddress::new(email))
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if self.verifier.verify(credential, &account.credential) {
            Ok(account.caller())
        } else {
            Err(AccountError::InvalidCredentials)
        }
    }

    /// Updates the caller's own profile fields (display name, phone).
    #[instrument(skip(self, update))]
    pub async fn update_profile(
        &self,
        caller: &Caller,
        update: AccountUpdate,
    ) -> Result<Account, AccountError> {
        debug!("Updating profile");
        let account = self
            .find_by_email(&caller.email)
            .await?
            .ok_or_else(|| AccountError::NotFound(caller.email.to_string()))?;

        self.inner
            .update(account.id, update)
            .await
            .map_err(AccountError::from_framework)
    }

    /// Fetches the account behind the caller's session.
    pub async fn profile(&self, caller: &Caller) -> Result<Account, AccountError> {
        self.find_by_email(&caller.email)
            .await?
            .ok_or_else(|| AccountError::NotFound(caller.email.to_string()))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError> {
        let accounts = self.list().await?;
        Ok(accounts.into_iter().find(|a| a.email == *email))
    }
}

#[async_trait]
impl ActorClient<Account> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        AccountError::from_framework(e)
    }
}
