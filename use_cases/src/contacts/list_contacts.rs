use crate::actor::{Actor, Permission};
use crate::contacts::{ContactError, ContactsRepo};
use async_trait::async_trait;
use entities::contacts::Contact;
use std::sync::Arc;

#[async_trait]
pub trait ListContactsInteractor: Send + Sync {
    async fn list(&self, actor: &dyn Actor) -> Result<Vec<Contact>, ContactError>;
}

pub struct ListContactsImpl {
    repo: Arc<dyn ContactsRepo>,
}

impl ListContactsImpl {
    pub fn new(repo: Arc<dyn ContactsRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ListContactsInteractor for ListContactsImpl {
    #[tracing::instrument(err, skip(self, actor), fields(subject = %actor.subject()), level = "info")]
    async fn list(&self, actor: &dyn Actor) -> Result<Vec<Contact>, ContactError> {
        actor
            .check_for_permission(Permission::ReadContacts)
            .map_err(|_| ContactError::Forbidden)?;

        Ok(self.repo.find_all().await?)
    }
}
