//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted mapping between a short code and its target URL.
///
/// `visit_count` only reflects flushed visits; hits still pending in
/// [`crate::domain::visit_counter::VisitCounter`] are not included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Link {
    pub short_code: String,
    pub long_url: String,
    pub visit_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        short_code: String,
        long_url: String,
        visit_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            short_code,
            long_url,
            visit_count,
            created_at,
        }
    }

    /// Formats `created_at` the way the stats pages display it.
    pub fn formatted_created_at(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl NewLink {
    /// Creates an insert request stamped with the current time.
    pub fn now(short_code: String, long_url: String) -> Self {
        Self {
            short_code,
            long_url,
            created_at: Utc::now(),
        }
    }

    /// Converts the insert request into the stored entity with zero visits.
    pub fn into_link(self) -> Link {
        Link::new(self.short_code, self.long_url, 0, self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            3,
            now,
        );

        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.visit_count, 3);
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_formatted_created_at() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let link = Link::new("a".into(), "https://a.com".into(), 0, created_at);
        assert_eq!(link.formatted_created_at(), "2024-03-09 07:05:01");
    }

    #[test]
    fn test_new_link_into_link_starts_at_zero() {
        let new_link = NewLink::now("xyz789".to_string(), "https://rust-lang.org".to_string());
        let created_at = new_link.created_at;
        let link = new_link.into_link();

        assert_eq!(link.short_code, "xyz789");
        assert_eq!(link.visit_count, 0);
        assert_eq!(link.created_at, created_at);
    }
}
