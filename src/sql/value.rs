//! Values the patch builder can bind to a PostgreSQL query.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;

/// A typed patch value. Encoded on the wire as text; the builder adds an SQL
/// cast (`$n::bigint`, `$n::boolean`) so the server coerces non-text values.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Int(i64),
    Text(String),
    Bool(bool),
}

impl SqlValue {
    /// Cast suffix appended to the placeholder, if the column is not text.
    pub fn cast(&self) -> Option<&'static str> {
        match self {
            SqlValue::Int(_) => Some("bigint"),
            SqlValue::Bool(_) => Some("boolean"),
            SqlValue::Text(_) => None,
        }
    }
}

impl<'q> Encode<'q, Postgres> for SqlValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            SqlValue::Int(n) => {
                let s = n.to_string();
                <&str as Encode<Postgres>>::encode_by_ref(&s.as_str(), buf)?
            }
            SqlValue::Text(s) => {
                let s_ref: &str = s.as_str();
                <&str as Encode<Postgres>>::encode_by_ref(&s_ref, buf)?
            }
            SqlValue::Bool(b) => {
                let s = if *b { "true" } else { "false" };
                <&str as Encode<Postgres>>::encode_by_ref(&s, buf)?
            }
        })
    }
}

impl sqlx::Type<Postgres> for SqlValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}
