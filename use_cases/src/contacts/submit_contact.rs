use crate::contacts::{ContactError, ContactsRepo, DocumentRenderer, Notifier};
use anyhow::anyhow;
use async_trait::async_trait;
use entities::contacts::{Contact, NewContact};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[async_trait]
pub trait SubmitContactInteractor: Send + Sync {
    async fn submit(&self, submission: Value) -> Result<Contact, ContactError>;
}

pub struct SubmitContactImpl {
    repo: Arc<dyn ContactsRepo>,
    renderer: Arc<dyn DocumentRenderer>,
    notifier: Arc<dyn Notifier>,
}

impl SubmitContactImpl {
    pub fn new(
        repo: Arc<dyn ContactsRepo>,
        renderer: Arc<dyn DocumentRenderer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repo,
            renderer,
            notifier,
        }
    }
}

#[async_trait]
impl SubmitContactInteractor for SubmitContactImpl {
    /// Persists first. A failure to render or deliver the email is reported, but the
    /// stored contact is kept.
    #[tracing::instrument(err, skip(self, submission), level = "info")]
    async fn submit(&self, submission: Value) -> Result<Contact, ContactError> {
        let new_contact = NewContact::try_from(submission)
            .map_err(|err| anyhow!("Contact validation failed: {err}"))?;

        let contact = self.repo.create(new_contact).await?;
        info!(contact_id = %contact.id, "Contact saved");

        let document = self.renderer.render(&contact).await?;
        info!(path = %document.path().display(), "Contact document generated");

        self.notifier.send(&contact, &document).await?;
        info!(contact_id = %contact.id, "Contact email sent");

        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::{SubmitContactImpl, SubmitContactInteractor};
    use crate::contacts::fixtures::{rendered_document, transient_file};
    use crate::contacts::{ContactError, MockContactsRepo, MockDocumentRenderer, MockNotifier};
    use anyhow::anyhow;
    use entities::contacts::Contact;
    use serde_json::json;
    use std::sync::Arc;

    fn repo_that_saves() -> MockContactsRepo {
        let mut repo = MockContactsRepo::new();
        repo.expect_create().times(1).returning(|new_contact| {
            Ok(Contact::new(
                entities::contacts::ContactId::generate(),
                new_contact,
                chrono::Utc::now(),
            ))
        });
        repo
    }

    fn submission() -> serde_json::Value {
        json!({"name": "Ada", "email": "ada@example.com", "message": "hi"})
    }

    #[tokio::test]
    async fn test_that_contact_is_saved_rendered_and_sent() {
        let path = transient_file();
        let document_path = path.clone();
        let mut renderer = MockDocumentRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(move |_| Ok(rendered_document(&document_path)));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send()
            .withf(|contact, document| contact.name == "Ada" && document.path().exists())
            .times(1)
            .returning(|_, _| Ok(()));

        let interactor = SubmitContactImpl::new(
            Arc::new(repo_that_saves()),
            Arc::new(renderer),
            Arc::new(notifier),
        );

        let contact = interactor.submit(submission()).await.unwrap();

        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.email(), Some("ada@example.com"));
        assert_eq!(contact.message(), Some("hi"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_that_failed_email_keeps_the_contact_and_removes_the_document() {
        let path = transient_file();
        let document_path = path.clone();
        let mut renderer = MockDocumentRenderer::new();
        renderer
            .expect_render()
            .returning(move |_| Ok(rendered_document(&document_path)));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send()
            .times(1)
            .returning(|_, _| Err(anyhow!("SMTP relay refused the message")));

        let interactor = SubmitContactImpl::new(
            Arc::new(repo_that_saves()),
            Arc::new(renderer),
            Arc::new(notifier),
        );

        let result = interactor.submit(submission()).await;

        assert!(matches!(result, Err(ContactError::Internal(_))));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_that_failed_render_keeps_the_contact_and_skips_the_email() {
        let mut renderer = MockDocumentRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_| Err(anyhow!("Failed to write document")));
        let mut notifier = MockNotifier::new();
        notifier.expect_send().times(0);

        let interactor = SubmitContactImpl::new(
            Arc::new(repo_that_saves()),
            Arc::new(renderer),
            Arc::new(notifier),
        );

        let result = interactor.submit(submission()).await;

        assert!(matches!(result, Err(ContactError::Internal(_))));
    }

    #[tokio::test]
    async fn test_that_invalid_submission_is_not_saved() {
        let mut repo = MockContactsRepo::new();
        repo.expect_create().times(0);
        let mut renderer = MockDocumentRenderer::new();
        renderer.expect_render().times(0);

        let interactor = SubmitContactImpl::new(
            Arc::new(repo),
            Arc::new(renderer),
            Arc::new(MockNotifier::new()),
        );

        let result = interactor
            .submit(json!({"email": "ada@example.com"}))
            .await;

        assert!(matches!(result, Err(ContactError::Internal(_))));
    }

    #[tokio::test]
    async fn test_that_store_failure_stops_the_pipeline() {
        let mut repo = MockContactsRepo::new();
        repo.expect_create()
            .returning(|_| Err(anyhow!("Failed to insert contact")));
        let mut renderer = MockDocumentRenderer::new();
        renderer.expect_render().times(0);

        let interactor = SubmitContactImpl::new(
            Arc::new(repo),
            Arc::new(renderer),
            Arc::new(MockNotifier::new()),
        );

        let err = interactor.submit(submission()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to insert contact");
    }
}
