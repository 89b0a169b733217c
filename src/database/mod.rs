//! The storage collaborator: a thin document-style facade over Postgres.
//! Handlers receive a `DbState` through `AppState` instead of reaching for a global handle.

use std::time::Duration;

use chrono::Utc;
use sqlx::{postgres::PgPoolOptions, Connection, PgConnection, PgPool, Row};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{AppConfig, DbConfig};
use crate::web::data::ValidSubscriber;

/// The single collection this service writes to.
pub const SUBSCRIBERS_COLLECTION: &str = "subscribers";

/// How many collection names the diagnostics probe may report.
const COLLECTION_LIST_LIMIT: i64 = 10;

// ###################################
// ->   STRUCTS
// ###################################

/// The storage handle as seen by the handlers.
/// Mirrors the three conditions the diagnostics probe distinguishes.
#[derive(Clone, Debug)]
pub enum DbState {
    /// No storage configured at all.
    Missing,
    /// Storage configured but unreachable at startup.
    Uninitialized,
    Ready(DbManager),
}

#[derive(Clone, Debug)]
pub struct DbManager {
    db: PgPool,
    name: String,
}

// ###################################
// ->   IMPLs
// ###################################

impl DbState {
    /// Builds the state from config without ever failing:
    /// a missing `[db_config]` section degrades to `Missing`,
    /// a failed connection to `Uninitialized`.
    pub async fn init(config: &AppConfig) -> Self {
        let Some(db_config) = &config.db_config else {
            warn!("{:<12} - No database configured", "init_db");
            return DbState::Missing;
        };

        match DbManager::init(db_config).await {
            Ok(dm) => DbState::Ready(dm),
            Err(er) => {
                warn!("{:<12} - Database unreachable: {er}", "init_db");
                DbState::Uninitialized
            }
        }
    }

    /// The manager, if storage is usable. The error text is what subscribers
    /// of the `/api/subscribe` endpoint see in the `detail` field.
    pub fn manager(&self) -> Result<&DbManager> {
        match self {
            DbState::Ready(dm) => Ok(dm),
            DbState::Missing => Err(Error::NotConfigured),
            DbState::Uninitialized => Err(Error::NotInitialized),
        }
    }
}

impl DbManager {
    pub async fn init(db_config: &DbConfig) -> Result<Self> {
        info!(
            "{:<12} - Initializing the DB pool for '{}'",
            "init_db", db_config.db_name
        );
        // NOTE: Tests sometimes fail if there is more than 1 max connection. This fixes it.
        let max_cons = if cfg!(test) { 1 } else { 5 };

        let db_pool = PgPoolOptions::new()
            .max_connections(max_cons)
            .acquire_timeout(Duration::from_millis(500))
            .connect_with(db_config.connection_options())
            .await
            .map_err(|er| Error::FailToCreatePool(er.to_string()))?;

        Ok(Self {
            db: db_pool,
            name: db_config.db_name.clone(),
        })
    }

    /// A manager over a lazy pool: connections are only attempted on first use,
    /// so init never fails but any query might.
    pub fn init_lazy(db_config: &DbConfig) -> Self {
        let db_pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_millis(500))
            .connect_lazy_with(db_config.connection_options());

        Self {
            db: db_pool,
            name: db_config.db_name.clone(),
        }
    }

    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// The storage-side name of the database this manager talks to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts one subscriber document and returns the storage-assigned id.
    pub async fn create_subscriber(&self, subscriber: &ValidSubscriber) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let query = format!(
            r#"
            INSERT INTO {SUBSCRIBERS_COLLECTION} (id, email, favorite_team, source, subscribed_at)
            VALUES ($1, $2, $3, $4, $5)
        "#
        );

        sqlx::query(&query)
            .bind(id)
            .bind(subscriber.email.as_ref())
            .bind(&subscriber.favorite_team)
            .bind(&subscriber.source)
            .bind(Utc::now())
            .execute(&self.db)
            .await?;

        Ok(id)
    }

    /// Lists up to 10 collection (table) names for the diagnostics probe.
    /// Only names are exposed, never any stored values.
    pub async fn list_collection_names(&self) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r#"
            SELECT table_name FROM information_schema.tables
            WHERE table_schema = 'public'
            ORDER BY table_name
            LIMIT $1
        "#,
        )
        .bind(COLLECTION_LIST_LIMIT)
        .fetch_all(&self.db)
        .await?;

        rows.iter()
            .map(|row| row.try_get("table_name").map_err(Into::into))
            .collect()
    }

    /// Creates and migrates a throwaway database for integration tests.
    pub async fn configure_for_test(db_config: &DbConfig) -> Result<()> {
        let mut connection =
            PgConnection::connect_with(&db_config.connection_options_without_db()).await?;

        let sql = format!(r#"CREATE DATABASE "{}";"#, db_config.db_name);
        sqlx::query(&sql).execute(&mut connection).await?;

        // Create pool only used to migrate the DB
        let db_pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_millis(1000))
            .connect_with(db_config.connection_options())
            .await
            .map_err(|er| Error::FailToCreatePool(er.to_string()))?;
        sqlx::migrate!("./migrations").run(&db_pool).await?;

        Ok(())
    }
}

// ###################################
// ->   ERROR
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create db pool: {0}")]
    FailToCreatePool(String),
    #[error("database module not found")]
    NotConfigured,
    #[error("database available but not initialized")]
    NotInitialized,
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("sqlx migration error: {0}")]
    SqlxMigrate(#[from] sqlx::migrate::MigrateError),
}
