//! Auth user persistence. Only the password hash is ever stored.

use crate::error::AppError;
use crate::model::User;
use sqlx::PgConnection;

const COLUMNS: &str = "user_id, username, email, password_hash";

pub struct UserService;

impl UserService {
    /// Insert a user with an already-hashed password. Username and email are
    /// unique in the store; a duplicate registration maps to 400, never an
    /// overwrite.
    pub async fn create(
        conn: &mut PgConnection,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO app_user (username, email, password_hash) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        tracing::debug!(username, "insert user");
        let result = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .fetch_optional(conn)
            .await;
        match result {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::Internal("failed to read back created user".into())),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(
                AppError::BadRequest("username or email already registered".into()),
            ),
            Err(e) => Err(AppError::Db(e)),
        }
    }

    pub async fn find_by_username(
        conn: &mut PgConnection,
        username: &str,
    ) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM app_user WHERE username = $1");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(conn)
            .await?;
        Ok(row)
    }
}
