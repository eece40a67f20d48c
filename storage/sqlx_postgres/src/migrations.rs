use crate::repository::Repository;
use anyhow::Context;

impl Repository {
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!()
            .run(self.pool())
            .await
            .context("Failed to run migration")
    }
}
