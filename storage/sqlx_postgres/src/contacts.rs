use crate::repository::Repository;
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::contacts::{Contact, ContactId, NewContact};
use serde_json::{Map, Value};
use sqlx::types::Json;
use use_cases::contacts::ContactsRepo;

#[derive(sqlx::FromRow)]
struct DbContact {
    id: String,
    name: String,
    details: Json<Map<String, Value>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<DbContact> for Contact {
    type Error = anyhow::Error;

    fn try_from(row: DbContact) -> Result<Self, Self::Error> {
        let id = ContactId::parse(&row.id)
            .with_context(|| format!("Stored contact has a malformed id {}", row.id))?;
        Ok(Contact {
            id,
            name: row.name,
            details: row.details.0,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ContactsRepo for Repository {
    #[tracing::instrument(err, skip(self, contact), level = "info")]
    async fn create(&self, contact: NewContact) -> anyhow::Result<Contact> {
        let id = ContactId::generate();
        let row = sqlx::query_as::<_, DbContact>(
            r#"
        INSERT INTO public.contact (id, name, details)
        VALUES ($1, $2, $3)
        RETURNING id, name, details, created_at
        "#,
        )
        .bind(id.as_ref())
        .bind(contact.name.as_ref())
        .bind(Json(&contact.details))
        .fetch_one(self.pool())
        .await
        .context("Failed to insert contact")?;

        row.try_into()
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn find_all(&self) -> anyhow::Result<Vec<Contact>> {
        let rows = sqlx::query_as::<_, DbContact>(
            r#"
        SELECT id, name, details, created_at FROM public.contact
        "#,
        )
        .fetch_all(self.pool())
        .await
        .context("Failed to fetch contacts")?;

        rows.into_iter().map(Contact::try_from).collect()
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn find_by_id(&self, id: &ContactId) -> anyhow::Result<Option<Contact>> {
        let row = sqlx::query_as::<_, DbContact>(
            r#"
        SELECT id, name, details, created_at FROM public.contact WHERE id = $1
        "#,
        )
        .bind(id.as_ref())
        .fetch_optional(self.pool())
        .await
        .with_context(|| format!("Failed to fetch contact {id}"))?;

        row.map(Contact::try_from).transpose()
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn delete_by_id(&self, id: &ContactId) -> anyhow::Result<()> {
        sqlx::query(
            r#"
        DELETE FROM public.contact WHERE id = $1
        "#,
        )
        .bind(id.as_ref())
        .execute(self.pool())
        .await
        .with_context(|| format!("Failed to delete contact {id}"))
        .map(|_| ())
    }
}
