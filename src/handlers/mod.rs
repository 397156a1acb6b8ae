//! HTTP handlers for customers, rentals, auth, and service metadata.

pub mod auth;
pub mod customers;
pub mod meta;
pub mod rentals;

use serde::Deserialize;

pub const MAX_LIMIT: u32 = 500;
const DEFAULT_LIMIT: u32 = 100;

/// Pagination query parameters. `skip` and `limit` are unsigned, so negative
/// values are rejected at extraction; `limit` is clamped to 1..=500.
#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Page {
    pub fn limit(&self) -> i64 {
        i64::from(self.limit.clamp(1, MAX_LIMIT))
    }

    pub fn skip(&self) -> i64 {
        i64::from(self.skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults() {
        let page: Page = serde_json::from_str("{}").unwrap();
        assert_eq!(page.skip(), 0);
        assert_eq!(page.limit(), 100);
    }

    #[test]
    fn limit_is_clamped_to_bounds() {
        let page = Page { skip: 0, limit: 0 };
        assert_eq!(page.limit(), 1);
        let page = Page {
            skip: 0,
            limit: 9000,
        };
        assert_eq!(page.limit(), 500);
        let page = Page { skip: 3, limit: 2 };
        assert_eq!(page.limit(), 2);
        assert_eq!(page.skip(), 3);
    }
}
