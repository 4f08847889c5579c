//! Configuration persistence.
//!
//! `ConfigurationStore` is the list/create/delete contract the UI talks to.
//! `MemoryStore` keeps records in a `Vec`; it is serializable so browser
//! storage can persist it as a single JSON document.

use crate::{NewConfiguration, SavedConfiguration};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Configuration {0} not found")]
    NotFound(u32),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to (de)serialize configurations: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

/// CRUD operations on saved configurations.
pub trait ConfigurationStore {
    /// All records, oldest first.
    fn list(&self) -> Result<Vec<SavedConfiguration>, StoreError>;

    /// Validate and store a new record, assigning its id and timestamp.
    fn create(&mut self, config: NewConfiguration) -> Result<SavedConfiguration, StoreError>;

    /// Remove a record. Fails with `NotFound` if no record has this id.
    fn delete(&mut self, id: u32) -> Result<(), StoreError>;
}

/// Source of creation timestamps in milliseconds since the Unix epoch.
pub type Clock = fn() -> f64;

/// Wall-clock milliseconds.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// In-memory store. Ids start at 1 and are never reused.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStore {
    next_id: u32,
    records: Vec<SavedConfiguration>,
    #[serde(skip, default = "default_clock")]
    clock: Clock,
}

fn default_clock() -> Clock {
    now_ms
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clock(now_ms)
    }

    /// Store with an injected clock (tests use a fixed or stepping clock).
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&SavedConfiguration> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationStore for MemoryStore {
    fn list(&self) -> Result<Vec<SavedConfiguration>, StoreError> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| {
            a.created_at_ms
                .total_cmp(&b.created_at_ms)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(records)
    }

    fn create(&mut self, config: NewConfiguration) -> Result<SavedConfiguration, StoreError> {
        config.validate()?;

        let record = SavedConfiguration {
            id: self.next_id,
            name: config.name.trim().to_string(),
            wavelength: config.wavelength,
            separation: config.separation,
            distance: config.distance,
            created_at_ms: (self.clock)(),
        };
        self.next_id += 1;
        self.records.push(record.clone());

        log::info!("Saved configuration {} ({})", record.id, record.name);
        Ok(record)
    }

    fn delete(&mut self, id: u32) -> Result<(), StoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.records.remove(index);

        log::info!("Deleted configuration {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_clock() -> f64 {
        1_000.0
    }

    fn payload(name: &str) -> NewConfiguration {
        NewConfiguration {
            name: name.to_string(),
            wavelength: 500.0,
            separation: 0.5,
            distance: 100.0,
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = MemoryStore::with_clock(fixed_clock);
        let a = store.create(payload("a")).unwrap();
        let b = store.create(payload("b")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.created_at_ms, 1_000.0);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = MemoryStore::with_clock(fixed_clock);
        let a = store.create(payload("a")).unwrap();
        store.delete(a.id).unwrap();
        let b = store.create(payload("b")).unwrap();
        assert_eq!(b.id, 2);
    }

    #[test]
    fn empty_name_is_rejected_and_nothing_stored() {
        let mut store = MemoryStore::with_clock(fixed_clock);
        let err = store.create(payload("")).unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "name", .. }));
        assert_eq!(err.to_string(), "Name is required");
        assert!(store.is_empty());
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut store = MemoryStore::with_clock(fixed_clock);
        let err = store.delete(42).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(42)));
    }

    #[test]
    fn list_orders_by_creation_time_then_id() {
        let mut store = MemoryStore::with_clock(fixed_clock);
        store.create(payload("first")).unwrap();
        store.create(payload("second")).unwrap();
        // Same timestamp: id breaks the tie.
        let names: Vec<_> = store.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn names_are_trimmed() {
        let mut store = MemoryStore::with_clock(fixed_clock);
        let record = store.create(payload("  Green  ")).unwrap();
        assert_eq!(record.name, "Green");
    }

    #[test]
    fn json_roundtrip_keeps_next_id() {
        let mut store = MemoryStore::with_clock(fixed_clock);
        store.create(payload("a")).unwrap();
        store.create(payload("b")).unwrap();
        store.delete(2).unwrap();

        let json = serde_json::to_string(&store).unwrap();
        let mut restored: MemoryStore = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 1);
        assert_eq!(restored.create(payload("c")).unwrap().id, 3);
    }
}
