//! Customer persistence: create, list, get, partial update, delete.

use super::integrity_to_bad_request;
use crate::error::AppError;
use crate::model::{Customer, CustomerCreate, CustomerUpdate};
use crate::sql::Patch;
use sqlx::PgConnection;

const COLUMNS: &str = "customer_id, store_id, first_name, last_name, email, \
                       address_id, active, create_date, last_update";

pub struct CustomerService;

impl CustomerService {
    /// Insert and return the created row. The store stamps `create_date` and
    /// `last_update`; an integrity violation maps to 400.
    pub async fn create(
        conn: &mut PgConnection,
        req: &CustomerCreate,
    ) -> Result<Customer, AppError> {
        let sql = format!(
            "INSERT INTO customer (store_id, first_name, last_name, email, address_id, active) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, "insert customer");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(req.store_id)
            .bind(&req.first_name)
            .bind(&req.last_name)
            .bind(req.email.as_deref())
            .bind(req.address_id)
            .bind(req.active)
            .fetch_optional(conn)
            .await
            .map_err(integrity_to_bad_request)?;
        // RETURNING always yields the row; missing it is a driver fault
        row.ok_or_else(|| AppError::Internal("failed to read back created customer".into()))
    }

    /// Page of customers ordered by ascending id.
    pub async fn list(
        conn: &mut PgConnection,
        limit: i64,
        skip: i64,
    ) -> Result<Vec<Customer>, AppError> {
        let sql =
            format!("SELECT {COLUMNS} FROM customer ORDER BY customer_id LIMIT $1 OFFSET $2");
        tracing::debug!(sql = %sql, limit, skip, "list customers");
        let rows = sqlx::query_as::<_, Customer>(&sql)
            .bind(limit)
            .bind(skip)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    pub async fn get(conn: &mut PgConnection, id: i64) -> Result<Option<Customer>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM customer WHERE customer_id = $1");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(row)
    }

    /// Partial update: 404 if the customer does not exist, 400 if the request
    /// carries no fields; stamps `last_update` and returns the full record.
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        req: &CustomerUpdate,
    ) -> Result<Customer, AppError> {
        if Self::get(&mut *conn, id).await?.is_none() {
            return Err(AppError::NotFound(format!("customer {id} not found")));
        }

        let mut patch = Patch::new("customer", "customer_id");
        if let Some(v) = req.store_id {
            patch.set_int("store_id", v);
        }
        if let Some(v) = &req.first_name {
            patch.set_text("first_name", v.clone());
        }
        if let Some(v) = &req.last_name {
            patch.set_text("last_name", v.clone());
        }
        if let Some(v) = &req.email {
            patch.set_text("email", v.clone());
        }
        if let Some(v) = req.address_id {
            patch.set_int("address_id", v);
        }
        if let Some(v) = req.active {
            patch.set_bool("active", v);
        }
        if patch.is_empty() {
            return Err(AppError::BadRequest("no data to update".into()));
        }

        let sql = patch.sql(COLUMNS);
        tracing::debug!(sql = %sql, id, "update customer");
        let mut query = sqlx::query_as::<_, Customer>(&sql);
        for value in patch.into_values() {
            query = query.bind(value);
        }
        let row = query
            .bind(crate::sql::SqlValue::Int(id))
            .fetch_optional(conn)
            .await
            .map_err(integrity_to_bad_request)?;
        // existed a moment ago; a concurrent delete is the only way to lose it
        row.ok_or_else(|| AppError::NotFound(format!("customer {id} not found")))
    }

    /// Delete: 404 if absent; a foreign-key violation (rentals still
    /// reference this customer) maps to 409.
    pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<(), AppError> {
        if Self::get(&mut *conn, id).await?.is_none() {
            return Err(AppError::NotFound(format!("customer {id} not found")));
        }
        tracing::debug!(id, "delete customer");
        let result = sqlx::query("DELETE FROM customer WHERE customer_id = $1")
            .bind(id)
            .execute(conn)
            .await;
        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => Err(
                AppError::Conflict("cannot delete customer with existing rentals".into()),
            ),
            Err(e) => Err(AppError::Db(e)),
        }
    }
}
