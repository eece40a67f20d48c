use crate::contacts::{ContactError, ContactsRepo};
use async_trait::async_trait;
use entities::contacts::{Contact, ContactId};
use std::sync::Arc;

#[async_trait]
pub trait GetContactInteractor: Send + Sync {
    async fn get(&self, id: &str) -> Result<Contact, ContactError>;
}

pub struct GetContactImpl {
    repo: Arc<dyn ContactsRepo>,
}

impl GetContactImpl {
    pub fn new(repo: Arc<dyn ContactsRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl GetContactInteractor for GetContactImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn get(&self, id: &str) -> Result<Contact, ContactError> {
        let id = ContactId::parse(id)?;
        let contact = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or(ContactError::NotFound)?;

        tracing::info!(contact_id = %contact.id, "Contact found");
        Ok(contact)
    }
}
