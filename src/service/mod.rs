//! Persistence services: typed queries over a per-request connection.

mod customers;
mod rentals;
mod users;

pub use customers::CustomerService;
pub use rentals::RentalService;
pub use users::UserService;

use crate::error::AppError;

/// Map integrity violations on INSERT (bad foreign key, duplicate unique
/// value) to a 400 with the driver message; anything else stays a store error.
fn integrity_to_bad_request(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db)
            if db.is_unique_violation()
                || db.is_foreign_key_violation()
                || db.is_check_violation() =>
        {
            AppError::BadRequest(format!("integrity error: {}", db.message()))
        }
        _ => AppError::Db(e),
    }
}
