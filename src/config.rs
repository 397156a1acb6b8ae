//! Environment-derived configuration, built once at startup.

use sqlx::postgres::PgConnectOptions;

/// Connection parameters for the backing store.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Token signing parameters.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub token_expire_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db: DbConfig,
    pub auth: AuthConfig,
    /// Port the HTTP listener binds to.
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let db = DbConfig {
            host: get("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: get("DB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5432),
            user: get("DB_USER").unwrap_or_else(|| "postgres".into()),
            password: get("DB_PASSWORD").unwrap_or_default(),
            database: get("DB_NAME").unwrap_or_else(|| "sakila".into()),
        };
        let auth = AuthConfig {
            secret: get("AUTH_SECRET").unwrap_or_else(|| "insecure-dev-secret".into()),
            token_expire_minutes: get("AUTH_TOKEN_EXPIRE_MINUTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        };
        AppConfig {
            db,
            auth,
            port: get("PORT").and_then(|v| v.parse().ok()).unwrap_or(8000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_env_is_empty() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.db.database, "sakila");
        assert_eq!(config.auth.token_expire_minutes, 30);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn values_come_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "5433"),
            ("DB_USER", "api"),
            ("DB_PASSWORD", "hunter2"),
            ("DB_NAME", "rentals"),
            ("AUTH_SECRET", "s3cret"),
            ("AUTH_TOKEN_EXPIRE_MINUTES", "15"),
            ("PORT", "9090"),
        ]
        .into_iter()
        .collect();
        let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.db.host, "db.internal");
        assert_eq!(config.db.port, 5433);
        assert_eq!(config.db.user, "api");
        assert_eq!(config.db.password, "hunter2");
        assert_eq!(config.db.database, "rentals");
        assert_eq!(config.auth.secret, "s3cret");
        assert_eq!(config.auth.token_expire_minutes, 15);
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn unparsable_numbers_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(|k| match k {
            "DB_PORT" => Some("not-a-port".into()),
            "AUTH_TOKEN_EXPIRE_MINUTES" => Some("soon".into()),
            _ => None,
        });
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.auth.token_expire_minutes, 30);
    }
}
