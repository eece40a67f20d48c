use crate::contacts::document::RenderedDocument;
use crate::contacts::{document_file_name, ContactError, ContactsRepo, DocumentRenderer};
use anyhow::anyhow;
use async_trait::async_trait;
use entities::contacts::ContactId;
use std::sync::Arc;

/// A freshly rendered document together with the name it is downloaded under.
#[derive(Debug)]
pub struct DownloadableDocument {
    pub file_name: String,
    pub document: RenderedDocument,
}

#[async_trait]
pub trait DownloadContactInteractor: Send + Sync {
    async fn download(&self, id: &str) -> Result<DownloadableDocument, ContactError>;
}

pub struct DownloadContactImpl {
    repo: Arc<dyn ContactsRepo>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl DownloadContactImpl {
    pub fn new(repo: Arc<dyn ContactsRepo>, renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self { repo, renderer }
    }
}

#[async_trait]
impl DownloadContactInteractor for DownloadContactImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn download(&self, id: &str) -> Result<DownloadableDocument, ContactError> {
        // A malformed id fails like a lookup error (500), never as a 404.
        let id = ContactId::parse(id)
            .map_err(|_| anyhow!("Cast to ContactId failed for value \"{id}\""))?;
        let contact = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or(ContactError::NotFound)?;

        let document = self.renderer.render(&contact).await?;

        Ok(DownloadableDocument {
            file_name: document_file_name(&contact),
            document,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DownloadContactImpl, DownloadContactInteractor};
    use crate::contacts::fixtures::{contact, rendered_document, transient_file, MISSING_ID};
    use crate::contacts::{ContactError, MockContactsRepo, MockDocumentRenderer};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_that_missing_contact_is_not_rendered() {
        let mut repo = MockContactsRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let mut renderer = MockDocumentRenderer::new();
        renderer.expect_render().times(0);
        let interactor = DownloadContactImpl::new(Arc::new(repo), Arc::new(renderer));

        let result = interactor.download(MISSING_ID).await;

        assert!(matches!(result, Err(ContactError::NotFound)));
    }

    #[tokio::test]
    async fn test_that_malformed_id_fails_without_a_lookup() {
        let mut repo = MockContactsRepo::new();
        repo.expect_find_by_id().times(0);
        let interactor =
            DownloadContactImpl::new(Arc::new(repo), Arc::new(MockDocumentRenderer::new()));

        let result = interactor.download("not-a-valid-id").await;

        match result {
            Err(ContactError::Internal(err)) => assert_eq!(
                err.to_string(),
                "Cast to ContactId failed for value \"not-a-valid-id\""
            ),
            other => panic!("expected an internal error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_that_document_is_named_after_the_contact() {
        let stored = contact();
        let id = stored.id.to_string();
        let mut repo = MockContactsRepo::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        let path = transient_file();
        let document_path = path.clone();
        let mut renderer = MockDocumentRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(move |_| Ok(rendered_document(&document_path)));
        let interactor = DownloadContactImpl::new(Arc::new(repo), Arc::new(renderer));

        let downloadable = interactor.download(&id).await.unwrap();

        assert_eq!(downloadable.file_name, "Ada_contact.pdf");
        assert_eq!(downloadable.document.path(), path.as_path());
        assert!(path.exists());
        drop(downloadable);
        assert!(!path.exists());
    }
}
