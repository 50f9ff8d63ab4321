//! Record identifier generation, injected into the editor so tests stay
//! deterministic.

use uuid::Uuid;

use crate::models::resume::EntryId;

/// Source of fresh record identifiers.
///
/// The only contract is that two calls on the same generator never return the
/// same value. Callers still guard against collisions with existing records.
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> EntryId;
}

/// Monotonic counter starting at 1. The default scheme.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> EntryId {
        let id = self.next;
        self.next += 1;
        EntryId::new(id.to_string())
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> EntryId {
        EntryId::new(Uuid::new_v4().to_string())
    }
}

/// The identifier schemes selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScheme {
    Sequential,
    Uuid,
}

impl IdScheme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Some(IdScheme::Sequential),
            "uuid" => Some(IdScheme::Uuid),
            _ => None,
        }
    }

    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdScheme::Sequential => Box::new(SequentialIds::new()),
            IdScheme::Uuid => Box::new(UuidIds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_increase() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "1");
        assert_eq!(ids.next_id().as_str(), "2");
        assert_eq!(ids.next_id().as_str(), "3");
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let mut ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_parse_scheme() {
        assert_eq!(IdScheme::parse("Sequential"), Some(IdScheme::Sequential));
        assert_eq!(IdScheme::parse(" uuid "), Some(IdScheme::Uuid));
        assert_eq!(IdScheme::parse("timestamp"), None);
    }
}
