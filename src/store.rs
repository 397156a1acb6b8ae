//! Store gateway: one connection per request, plus bootstrap DDL.

use crate::config::DbConfig;
use crate::error::AppError;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgConnection};

/// Opens a PostgreSQL connection scoped to one request. The connection is
/// closed when it goes out of scope, on every exit path. No pooling.
#[derive(Clone)]
pub struct Store {
    options: PgConnectOptions,
}

impl Store {
    pub fn new(config: &DbConfig) -> Self {
        Store {
            options: config.connect_options(),
        }
    }

    /// Connectivity failures surface as a generic internal error; the
    /// connection string (credentials included) stays out of the response.
    pub async fn connect(&self) -> Result<PgConnection, AppError> {
        self.options.connect().await.map_err(|e| {
            tracing::error!(error = %e, "database connection failed");
            AppError::Internal("database unavailable".into())
        })
    }
}

/// Idempotent table DDL, run once at startup. Not a migration tool: existing
/// tables are left untouched.
const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS customer (
        customer_id BIGSERIAL PRIMARY KEY,
        store_id BIGINT NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT,
        address_id BIGINT NOT NULL,
        active BOOLEAN NOT NULL DEFAULT TRUE,
        create_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        last_update TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS rental (
        rental_id BIGSERIAL PRIMARY KEY,
        rental_date TIMESTAMPTZ NOT NULL,
        inventory_id BIGINT NOT NULL,
        customer_id BIGINT NOT NULL REFERENCES customer (customer_id),
        return_date TIMESTAMPTZ,
        staff_id BIGINT NOT NULL,
        last_update TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS app_user (
        user_id BIGSERIAL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )
    "#,
];

pub async fn ensure_tables(store: &Store) -> Result<(), AppError> {
    let mut conn = store.connect().await?;
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(&mut conn).await?;
    }
    Ok(())
}
