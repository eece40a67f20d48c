use crate::configuration::DbSettings;
use anyhow::Context;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;

/// Handle to the contact store. Cloning shares the same connection pool.
#[derive(Clone)]
pub struct Repository {
    pg_pool: Arc<PgPool>,
}

impl Repository {
    pub fn pool(&self) -> &PgPool {
        self.pg_pool.as_ref()
    }

    pub async fn new(settings: &DbSettings) -> anyhow::Result<Self> {
        let pg_pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(settings.with_db())
            .await
            .context("Failed to connect to DB")
            .map(Arc::new)?;

        Ok(Self { pg_pool })
    }

    pub async fn close(&self) {
        self.pg_pool.close().await
    }

    #[cfg(any(test, feature = "testing"))]
    pub async fn new_test_repo() -> Self {
        use crate::configuration::Settings;
        use shared_kernel::configuration::config_from;
        use sqlx::Executor;
        use sqlx::{Connection, PgConnection};
        use std::path::Path;
        use uuid::Uuid;

        let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configuration/test.yaml");
        let settings = config_from::<Settings>(&file).expect("Failed to read test settings");
        let (connection_options, _) = settings.database.without_db();

        let mut connection = PgConnection::connect_with(&connection_options)
            .await
            .expect("Failed to connect to Postgres");

        let db_name = Uuid::new_v4();
        connection
            .execute(&*format!(r#"CREATE DATABASE "{}";"#, db_name))
            .await
            .expect("Failed to create database.");

        let connection_with_db_name = connection_options.database(&db_name.to_string());

        let connection_pool = PgPool::connect_with(connection_with_db_name)
            .await
            .expect("Failed to connect to Postgres.");

        let test_repo = Self {
            pg_pool: Arc::new(connection_pool),
        };
        test_repo
            .migrate()
            .await
            .expect("Failed to migrate the database");

        test_repo
    }
}
