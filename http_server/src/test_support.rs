use crate::authentication::{AuthSettings, Claims};
use anyhow::bail;
use async_trait::async_trait;
use chrono::Utc;
use entities::contacts::{Contact, ContactId, NewContact};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::Secret;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use use_cases::contacts::document::RenderedDocument;
use use_cases::contacts::{ContactsRepo, DocumentRenderer, Notifier};
use uuid::Uuid;

const SECRET: &str = "test-secret";
const ISSUER: &str = "https://contacts.test/";
const AUDIENCE: &str = "contacts-api";

pub(crate) fn auth_settings() -> AuthSettings {
    AuthSettings {
        secret: Secret::new(SECRET.to_owned()),
        issuer: ISSUER.to_owned(),
        audience: AUDIENCE.to_owned(),
    }
}

pub(crate) fn claims_with(permissions: &[&str]) -> Claims {
    let now = Utc::now().timestamp() as usize;
    Claims {
        aud: AUDIENCE.to_owned(),
        exp: now + 3_600,
        iat: now,
        iss: ISSUER.to_owned(),
        sub: "auth0|ada".to_owned(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

pub(crate) fn signed_token(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub(crate) fn token_with(permissions: &[&str]) -> String {
    signed_token(&claims_with(permissions), SECRET)
}

pub(crate) fn token_with_claims(edit: impl FnOnce(&mut Claims)) -> String {
    let mut claims = claims_with(&["read:contacts"]);
    edit(&mut claims);
    signed_token(&claims, SECRET)
}

/// Store kept in memory; clones share state so tests can inspect it after handing it to the app.
#[derive(Clone, Default)]
pub(crate) struct InMemoryContacts {
    contacts: Arc<Mutex<Vec<Contact>>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryContacts {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContactsRepo for InMemoryContacts {
    async fn create(&self, contact: NewContact) -> anyhow::Result<Contact> {
        self.touch();
        let contact = Contact::new(ContactId::generate(), contact, Utc::now());
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Contact>> {
        self.touch();
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &ContactId) -> anyhow::Result<Option<Contact>> {
        self.touch();
        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().find(|contact| &contact.id == id).cloned())
    }

    async fn delete_by_id(&self, id: &ContactId) -> anyhow::Result<()> {
        self.touch();
        self.contacts.lock().unwrap().retain(|contact| &contact.id != id);
        Ok(())
    }
}

/// Writes a small fake PDF into a directory owned by the test.
#[derive(Clone)]
pub(crate) struct FakeRenderer {
    directory: PathBuf,
    fail: bool,
}

impl FakeRenderer {
    pub(crate) fn new() -> Self {
        let directory = std::env::temp_dir().join(format!("contact-documents-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&directory).unwrap();
        Self {
            directory,
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub(crate) fn files(&self) -> usize {
        std::fs::read_dir(&self.directory).unwrap().count()
    }
}

#[async_trait]
impl DocumentRenderer for FakeRenderer {
    async fn render(&self, contact: &Contact) -> anyhow::Result<RenderedDocument> {
        if self.fail {
            bail!("renderer crashed");
        }
        let document = RenderedDocument::new(self.directory.join(format!("{}.pdf", Uuid::new_v4())));
        tokio::fs::write(document.path(), format!("%PDF-1.3 {}", contact.name)).await?;
        Ok(document)
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeNotifier {
    fail: bool,
    sent: Arc<AtomicUsize>,
}

impl FakeNotifier {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn sent(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn send(&self, _contact: &Contact, document: &RenderedDocument) -> anyhow::Result<()> {
        if self.fail {
            bail!("SMTP connection refused");
        }
        document.read().await?;
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Initialises the routes over the given store, renderer and notifier.
macro_rules! test_app {
    ($repo:expr, $renderer:expr, $notifier:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(
                    crate::use_case_app_container::UseCaseAppContainer::new(
                        use_cases::AppImpl::new(
                            $repo,
                            std::sync::Arc::new($renderer),
                            std::sync::Arc::new($notifier),
                        ),
                    ),
                ))
                .app_data(actix_web::web::Data::new(
                    crate::test_support::auth_settings(),
                ))
                .configure(crate::routes::config),
        )
        .await
    };
}

pub(crate) use test_app;
