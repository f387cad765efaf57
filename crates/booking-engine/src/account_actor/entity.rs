//! [`ActorEntity`] implementation for [`Account`].

use crate::account_actor::AccountError;
use crate::model::{Account, AccountCreate, AccountId, AccountUpdate, EmailAddress};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

/// Accounts have no custom actions.
#[derive(Debug)]
pub enum AccountAction {}

#[async_trait]
impl ActorEntity for Account {
    type Id = AccountId;
    type Create = AccountCreate;
    type Update = AccountUpdate;
    type Action = AccountAction;
    type ActionResult = ();
    type Context = ();
    type Error = AccountError;

    fn id(&self) -> &AccountId {
        &self.id
    }

    fn from_create_params(id: AccountId, params: AccountCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            email: EmailAddress::new(&params.email),
            display_name: params.display_name,
            credential: params.credential,
            role: params.role,
            phone: params.phone,
            created_at: Utc::now(),
        })
    }

    /// One account per normalised e-mail address, across the whole store.
    fn on_admit(&self, peers: &[Self]) -> Result<(), Self::Error> {
        if peers.iter().any(|other| other.email == self.email) {
            return Err(AccountError::EmailAlreadyRegistered(
                self.email.as_str().to_string(),
            ));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: AccountUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(display_name) = update.display_name {
            self.display_name = display_name;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: AccountAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
