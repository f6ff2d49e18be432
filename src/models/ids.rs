//! Strongly-typed transaction identifier
//!
//! Ids are random v4 UUIDs. Older ledger files used integer millisecond
//! timestamps as ids; those deserialize to a deterministic v5 UUID so the
//! same file always imports with the same ids.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used by the short display form
pub const DISPLAY_PREFIX: &str = "txn-";

/// Unique identifier of a transaction within a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Map a legacy integer id onto a stable UUID
    pub fn from_legacy(id: u64) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, id.to_string().as_bytes()))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The eight hex characters shown in the display form
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }

    /// Check whether a user-supplied short reference ("txn-1a2b3c4d",
    /// "1a2b", ...) points at this id
    pub fn matches_prefix(&self, reference: &str) -> bool {
        let reference = reference.trim();
        let reference = reference.strip_prefix(DISPLAY_PREFIX).unwrap_or(reference);
        !reference.is_empty()
            && self
                .0
                .simple()
                .to_string()
                .starts_with(&reference.to_ascii_lowercase())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.short())
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    /// Parse a full UUID, with or without the display prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Serialize for TransactionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

struct TransactionIdVisitor;

impl<'de> Visitor<'de> for TransactionIdVisitor {
    type Value = TransactionId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a UUID string or a non-negative integer id")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TransactionId, E> {
        Ok(TransactionId::from_legacy(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TransactionId, E> {
        u64::try_from(v)
            .map(TransactionId::from_legacy)
            .map_err(|_| E::custom(format!("negative transaction id: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<TransactionId, E> {
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < u64::MAX as f64 {
            Ok(TransactionId::from_legacy(v as u64))
        } else {
            Err(E::custom(format!("invalid transaction id: {}", v)))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TransactionId, E> {
        if let Ok(uuid) = Uuid::parse_str(v) {
            return Ok(TransactionId(uuid));
        }
        v.parse::<u64>()
            .map(TransactionId::from_legacy)
            .map_err(|_| E::custom(format!("invalid transaction id: {}", v)))
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TransactionIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = TransactionId::new();
        assert!(!id.as_uuid().is_nil());
        assert_ne!(id, TransactionId::new());
    }

    #[test]
    fn test_id_display() {
        let id = TransactionId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));

        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_legacy_integer_ids() {
        let a: TransactionId = serde_json::from_str("1704412800000").unwrap();
        let b: TransactionId = serde_json::from_str("1704412800000").unwrap();
        let c: TransactionId = serde_json::from_str("\"1704412800000\"").unwrap();
        let d: TransactionId = serde_json::from_str("1704412800001").unwrap();

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, d);
        assert!(serde_json::from_str::<TransactionId>("-4").is_err());
        assert!(serde_json::from_str::<TransactionId>("\"nope\"").is_err());
    }

    #[test]
    fn test_parse_and_prefix_match() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: TransactionId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
        assert_eq!(id.to_string(), "txn-550e8400");

        assert!(id.matches_prefix("txn-550e8400"));
        assert!(id.matches_prefix("550E84"));
        assert!(!id.matches_prefix("txn-"));
        assert!(!id.matches_prefix("660e"));
    }
}
