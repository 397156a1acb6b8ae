//! Password hashing and bearer-token issuance.

mod password;
mod token;

pub use password::PasswordHasher;
pub use token::{Claims, TokenService};
