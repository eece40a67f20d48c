use crate::contacts::{ContactError, ContactsRepo};
use async_trait::async_trait;
use entities::contacts::ContactId;
use std::sync::Arc;

#[async_trait]
pub trait DeleteContactInteractor: Send + Sync {
    async fn delete(&self, id: &str) -> Result<(), ContactError>;
}

pub struct DeleteContactImpl {
    repo: Arc<dyn ContactsRepo>,
}

impl DeleteContactImpl {
    pub fn new(repo: Arc<dyn ContactsRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl DeleteContactInteractor for DeleteContactImpl {
    /// Lookup and delete are two separate store calls, not one atomic operation.
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn delete(&self, id: &str) -> Result<(), ContactError> {
        let id = ContactId::parse(id)?;
        if self.repo.find_by_id(&id).await?.is_none() {
            return Err(ContactError::NotFound);
        }

        self.repo.delete_by_id(&id).await?;
        Ok(())
    }
}
