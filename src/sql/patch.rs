//! Builds a parameterized UPDATE from only the fields present in a request.

use super::SqlValue;

/// Partial-update builder. Collects (column, value) pairs, then renders
/// `UPDATE <table> SET col = $1, ..., last_update = NOW() WHERE <pk> = $n
/// RETURNING <columns>`. Column and table names are static identifiers;
/// every value binds as a parameter.
pub struct Patch {
    table: &'static str,
    pk: &'static str,
    sets: Vec<(&'static str, SqlValue)>,
}

impl Patch {
    pub fn new(table: &'static str, pk: &'static str) -> Self {
        Patch {
            table,
            pk,
            sets: Vec::new(),
        }
    }

    pub fn set_int(&mut self, column: &'static str, value: i64) -> &mut Self {
        self.sets.push((column, SqlValue::Int(value)));
        self
    }

    pub fn set_text(&mut self, column: &'static str, value: impl Into<String>) -> &mut Self {
        self.sets.push((column, SqlValue::Text(value.into())));
        self
    }

    pub fn set_bool(&mut self, column: &'static str, value: bool) -> &mut Self {
        self.sets.push((column, SqlValue::Bool(value)));
        self
    }

    /// True when no field was supplied; callers reject this as "no data to update".
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Render the UPDATE statement. The row id binds as the last parameter.
    pub fn sql(&self, returning: &str) -> String {
        let mut set_parts: Vec<String> = Vec::with_capacity(self.sets.len() + 1);
        for (i, (column, value)) in self.sets.iter().enumerate() {
            let placeholder = match value.cast() {
                Some(cast) => format!("${}::{}", i + 1, cast),
                None => format!("${}", i + 1),
            };
            set_parts.push(format!("{} = {}", column, placeholder));
        }
        set_parts.push("last_update = NOW()".to_string());
        format!(
            "UPDATE {} SET {} WHERE {} = ${}::bigint RETURNING {}",
            self.table,
            set_parts.join(", "),
            self.pk,
            self.sets.len() + 1,
            returning
        )
    }

    /// Values in placeholder order, without the trailing id.
    pub fn into_values(self) -> Vec<SqlValue> {
        self.sets.into_iter().map(|(_, v)| v).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_only_supplied_fields_and_stamps_last_update() {
        let mut patch = Patch::new("customer", "customer_id");
        patch.set_bool("active", false);
        assert_eq!(
            patch.sql("*"),
            "UPDATE customer SET active = $1::boolean, last_update = NOW() \
             WHERE customer_id = $2::bigint RETURNING *"
        );
        assert_eq!(patch.into_values(), vec![SqlValue::Bool(false)]);
    }

    #[test]
    fn placeholders_follow_insertion_order() {
        let mut patch = Patch::new("customer", "customer_id");
        patch
            .set_int("store_id", 2)
            .set_text("first_name", "Ada")
            .set_bool("active", true);
        assert_eq!(
            patch.sql("customer_id, store_id"),
            "UPDATE customer SET store_id = $1::bigint, first_name = $2, \
             active = $3::boolean, last_update = NOW() \
             WHERE customer_id = $4::bigint RETURNING customer_id, store_id"
        );
        assert_eq!(
            patch.into_values(),
            vec![
                SqlValue::Int(2),
                SqlValue::Text("Ada".into()),
                SqlValue::Bool(true)
            ]
        );
    }

    #[test]
    fn empty_patch_is_detected() {
        let patch = Patch::new("customer", "customer_id");
        assert!(patch.is_empty());
    }
}
