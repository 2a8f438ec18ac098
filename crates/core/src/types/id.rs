//! Newtype ID for type-safe cafe references.

use serde::{Deserialize, Serialize};

/// Database identifier of a cafe record.
///
/// A newtype wrapper around `i64` (SQLite `INTEGER PRIMARY KEY`) so that raw
/// integers cannot be passed where a cafe id is expected. Serializes
/// transparently as a plain number, and with the `sqlite` feature binds
/// directly in sqlx queries.
///
/// Ids are assigned once at creation and never reused (the table is declared
/// `AUTOINCREMENT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "sqlite", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlite", sqlx(transparent))]
pub struct CafeId(i64);

impl CafeId {
    /// Create an ID from an i64 value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CafeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CafeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<CafeId> for i64 {
    fn from(id: CafeId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cafe_id_roundtrip() {
        let id = CafeId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(CafeId::from(42), id);
    }

    #[test]
    fn test_cafe_id_display() {
        assert_eq!(CafeId::new(7).to_string(), "7");
    }

    #[test]
    fn test_cafe_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&CafeId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: CafeId = serde_json::from_str("3").unwrap();
        assert_eq!(id, CafeId::new(3));
    }
}
