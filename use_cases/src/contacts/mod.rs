pub mod delete_contact;
pub mod document;
pub mod download_contact;
pub mod get_contact;
pub mod list_contacts;
pub mod submit_contact;

use crate::contacts::document::RenderedDocument;
use async_trait::async_trait;
use entities::contacts::{Contact, ContactId, InvalidContactId, NewContact};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Invalid contact ID format")]
    InvalidId,
    #[error("Contact not found")]
    NotFound,
    #[error("Access denied")]
    Forbidden,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<InvalidContactId> for ContactError {
    fn from(_: InvalidContactId) -> Self {
        ContactError::InvalidId
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactsRepo: Send + Sync {
    /// Inserts the contact and assigns its identifier.
    async fn create(&self, contact: NewContact) -> anyhow::Result<Contact>;

    /// Every contact, in whatever order the store returns them.
    async fn find_all(&self) -> anyhow::Result<Vec<Contact>>;

    async fn find_by_id(&self, id: &ContactId) -> anyhow::Result<Option<Contact>>;

    async fn delete_by_id(&self, id: &ContactId) -> anyhow::Result<()>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render(&self, contact: &Contact) -> anyhow::Result<RenderedDocument>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, contact: &Contact, document: &RenderedDocument) -> anyhow::Result<()>;
}

/// Name under which a contact's document is handed out.
pub fn document_file_name(contact: &Contact) -> String {
    format!("{}_contact.pdf", contact.name)
}
