//! Rental persistence: create, get, list, and the one-way return transition.

use super::integrity_to_bad_request;
use crate::error::AppError;
use crate::model::{Rental, RentalCreate};
use sqlx::PgConnection;

const COLUMNS: &str =
    "rental_id, rental_date, inventory_id, customer_id, return_date, staff_id, last_update";

pub struct RentalService;

impl RentalService {
    /// Insert with client-supplied `rental_date`; `return_date` starts null.
    /// An invalid customer/staff/inventory reference maps to 400.
    pub async fn create(conn: &mut PgConnection, req: &RentalCreate) -> Result<Rental, AppError> {
        let sql = format!(
            "INSERT INTO rental (rental_date, inventory_id, customer_id, staff_id) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, "insert rental");
        let row = sqlx::query_as::<_, Rental>(&sql)
            .bind(req.rental_date)
            .bind(req.inventory_id)
            .bind(req.customer_id)
            .bind(req.staff_id)
            .fetch_optional(conn)
            .await
            .map_err(integrity_to_bad_request)?;
        row.ok_or_else(|| AppError::Internal("failed to read back created rental".into()))
    }

    pub async fn get(conn: &mut PgConnection, id: i64) -> Result<Option<Rental>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM rental WHERE rental_id = $1");
        let row = sqlx::query_as::<_, Rental>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(row)
    }

    /// Page of rentals ordered by rental date, newest first.
    pub async fn list(
        conn: &mut PgConnection,
        limit: i64,
        skip: i64,
    ) -> Result<Vec<Rental>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM rental ORDER BY rental_date DESC LIMIT $1 OFFSET $2"
        );
        tracing::debug!(sql = %sql, limit, skip, "list rentals");
        let rows = sqlx::query_as::<_, Rental>(&sql)
            .bind(limit)
            .bind(skip)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    /// Rentals for one customer, newest first. Callers check the customer
    /// exists before querying.
    pub async fn list_for_customer(
        conn: &mut PgConnection,
        customer_id: i64,
        limit: i64,
        skip: i64,
    ) -> Result<Vec<Rental>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM rental WHERE customer_id = $1 \
             ORDER BY rental_date DESC LIMIT $2 OFFSET $3"
        );
        tracing::debug!(sql = %sql, customer_id, limit, skip, "list customer rentals");
        let rows = sqlx::query_as::<_, Rental>(&sql)
            .bind(customer_id)
            .bind(limit)
            .bind(skip)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    /// The return transition: `return_date` goes null -> NOW() exactly once.
    /// 404 if the rental does not exist, 400 if already returned. The UPDATE
    /// is conditional on `return_date IS NULL`, so of two concurrent returns
    /// only one row wins; the loser takes the same 400 as a sequential
    /// second attempt.
    pub async fn mark_returned(conn: &mut PgConnection, id: i64) -> Result<Rental, AppError> {
        let current = Self::get(&mut *conn, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("rental {id} not found")))?;
        if current.return_date.is_some() {
            return Err(AppError::BadRequest("rental already returned".into()));
        }

        let sql = format!(
            "UPDATE rental SET return_date = NOW(), last_update = NOW() \
             WHERE rental_id = $1 AND return_date IS NULL RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, id, "return rental");
        let row = sqlx::query_as::<_, Rental>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        row.ok_or_else(|| AppError::BadRequest("rental already returned".into()))
    }
}
