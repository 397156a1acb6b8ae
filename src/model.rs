//! Typed entities and request/response records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub customer_id: i64,
    pub store_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub address_id: i64,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CustomerCreate {
    pub store_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub address_id: i64,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Partial update: only fields present in the body are written.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerUpdate {
    pub store_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address_id: Option<i64>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Rental {
    pub rental_id: i64,
    pub rental_date: DateTime<Utc>,
    pub inventory_id: i64,
    pub customer_id: i64,
    /// Null while the rental is active; set exactly once on return.
    pub return_date: Option<DateTime<Utc>>,
    pub staff_id: i64,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RentalCreate {
    pub rental_date: DateTime<Utc>,
    pub inventory_id: i64,
    pub customer_id: i64,
    pub staff_id: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    // never sent in API responses
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// OAuth2-style password grant body (form-encoded).
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_create_defaults_active_and_email() {
        let req: CustomerCreate = serde_json::from_str(
            r#"{"store_id": 1, "first_name": "Ada", "last_name": "Lovelace", "address_id": 7}"#,
        )
        .unwrap();
        assert!(req.active);
        assert_eq!(req.email, None);
    }

    #[test]
    fn empty_update_body_has_no_fields() {
        let req: CustomerUpdate = serde_json::from_str("{}").unwrap();
        assert!(req.store_id.is_none());
        assert!(req.first_name.is_none());
        assert!(req.last_name.is_none());
        assert!(req.email.is_none());
        assert!(req.address_id.is_none());
        assert!(req.active.is_none());
    }

    #[test]
    fn user_serialization_omits_password_hash() {
        let user = User {
            user_id: 1,
            username: "ada".into(),
            email: "ada@example.com".into(),
            password_hash: "$argon2id$secret".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "ada");
    }
}
