mod layout;

use anyhow::Context;
use async_trait::async_trait;
use entities::contacts::Contact;
use serde::Deserialize;
use std::path::PathBuf;
use use_cases::contacts::document::RenderedDocument;
use use_cases::contacts::DocumentRenderer;
use uuid::Uuid;

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentSettings {
    /// Where transient PDFs are written while a request uses them.
    pub directory: PathBuf,
}

pub struct PdfRenderer {
    directory: PathBuf,
}

impl PdfRenderer {
    pub async fn new(settings: &DocumentSettings) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&settings.directory)
            .await
            .with_context(|| {
                format!(
                    "Failed to create document directory {}",
                    settings.directory.display()
                )
            })?;
        Ok(Self {
            directory: settings.directory.clone(),
        })
    }
}

#[async_trait]
impl DocumentRenderer for PdfRenderer {
    #[tracing::instrument(err, skip(self, contact), fields(contact_id = %contact.id), level = "info")]
    async fn render(&self, contact: &Contact) -> anyhow::Result<RenderedDocument> {
        let owned = contact.clone();
        let bytes = tokio::task::spawn_blocking(move || layout::render(&owned))
            .await
            .context("PDF rendering task failed")??;

        // Every render gets its own file so concurrent requests never share one.
        let path = self
            .directory
            .join(format!("contact_{}_{}.pdf", contact.id, Uuid::new_v4()));
        let document = RenderedDocument::new(path);
        tokio::fs::write(document.path(), bytes)
            .await
            .with_context(|| format!("Failed to write {}", document.path().display()))?;

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentSettings, PdfRenderer};
    use chrono::Utc;
    use entities::contacts::{Contact, ContactId, NewContact};
    use serde_json::json;
    use use_cases::contacts::DocumentRenderer;

    fn contact() -> Contact {
        let new_contact = NewContact::try_from(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "I would like to know more about the analytical engine."
        }))
        .unwrap();
        Contact::new(ContactId::generate(), new_contact, Utc::now())
    }

    async fn renderer() -> PdfRenderer {
        let directory = std::env::temp_dir().join(format!("renderer-{}", uuid::Uuid::new_v4()));
        PdfRenderer::new(&DocumentSettings { directory })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_that_a_pdf_is_written_and_removed_after_use() {
        let renderer = renderer().await;

        let document = renderer.render(&contact()).await.unwrap();
        let path = document.path().to_path_buf();
        let bytes = document.read().await.unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        drop(document);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_that_each_render_gets_a_fresh_file() {
        let renderer = renderer().await;
        let contact = contact();

        let first = renderer.render(&contact).await.unwrap();
        let second = renderer.render(&contact).await.unwrap();

        assert_ne!(first.path(), second.path());
        assert!(first.path().starts_with(&renderer.directory));
    }
}
