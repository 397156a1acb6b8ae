//! Signed, time-limited bearer tokens (HS256).

use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated username.
    pub sub: String,
    /// Expiry, seconds since epoch.
    pub exp: i64,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        TokenService {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Issue a token for the given subject, expiring after the configured window.
    pub fn issue(&self, username: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "token signing failed");
            AppError::Internal("token signing failed".into())
        })
    }

    /// Verify signature and expiry; returns the claims on success.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is enforced manually, with no leeway
        validation.validate_exp = false;

        let decoded = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::Unauthorized("invalid token".into()))?;

        if decoded.claims.exp < Utc::now().timestamp() {
            return Err(AppError::Unauthorized("token expired".into()));
        }
        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_decodes_with_subject_and_future_expiry() {
        let service = TokenService::new("test-secret", 30);
        let token = service.issue("ada").unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "ada");
        assert!(claims.exp > Utc::now().timestamp());
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = TokenService::new("test-secret", 30);
        assert!(matches!(
            service.verify("not.a.token"),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new("secret-a", 30);
        let verifier = TokenService::new("secret-b", 30);
        let token = issuer.issue("ada").unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = TokenService::new("test-secret", -1);
        let token = service.issue("ada").unwrap();
        assert!(matches!(
            service.verify(&token),
            Err(AppError::Unauthorized(msg)) if msg == "token expired"
        ));
    }
}
