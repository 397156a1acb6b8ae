//! Salted one-way password hashing. Plaintext is never persisted or logged.

use crate::error::AppError;
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordVerifier, SaltString};
use argon2::password_hash::PasswordHasher as _;
use argon2::Argon2;

pub struct PasswordHasher;

impl PasswordHasher {
    /// Hash a plaintext password with a fresh random salt (Argon2id, PHC string).
    pub fn hash(plain: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| {
                tracing::error!(error = %e, "password hashing failed");
                AppError::Internal("password hashing failed".into())
            })
    }

    /// Verify a plaintext password against a stored PHC hash string.
    /// An unparsable stored hash counts as a mismatch.
    pub fn verify(plain: &str, stored_hash: &str) -> bool {
        match PasswordHash::new(stored_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_mismatch_fails() {
        let hash = PasswordHasher::hash("correct horse").unwrap();
        assert_ne!(hash, "correct horse");
        assert!(PasswordHasher::verify("correct horse", &hash));
        assert!(!PasswordHasher::verify("wrong horse", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = PasswordHasher::hash("p4ssw0rd!").unwrap();
        let second = PasswordHasher::hash("p4ssw0rd!").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_stored_hash_is_a_mismatch() {
        assert!(!PasswordHasher::verify("anything", "not-a-phc-string"));
    }
}
